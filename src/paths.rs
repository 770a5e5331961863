//! Locations of the OpenRC-side tools

use std::path::PathBuf;

pub const RC_SERVICE: &str = "/bin/rc-service";
pub const RC_UPDATE: &str = "/bin/rc-update";
pub const CHMOD: &str = "/bin/chmod";
pub const LOGINCTL: &str = "/bin/loginctl";
pub const OPENRC: &str = "/sbin/openrc";
pub const INIT_D: &str = "/etc/init.d";

/// Executables and directories a translated command may refer to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Per-service control (start/stop/restart/status)
    pub rc_service: PathBuf,
    /// Runlevel membership (show/add/del)
    pub rc_update: PathBuf,
    /// Used for mask/unmask on init scripts
    pub chmod: PathBuf,
    /// Power and sleep control
    pub loginctl: PathBuf,
    /// Init executable, run with `single` for rescue/emergency
    pub openrc: PathBuf,
    /// Directory holding init scripts
    pub init_d: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            rc_service: PathBuf::from(RC_SERVICE),
            rc_update: PathBuf::from(RC_UPDATE),
            chmod: PathBuf::from(CHMOD),
            loginctl: PathBuf::from(LOGINCTL),
            openrc: PathBuf::from(OPENRC),
            init_d: PathBuf::from(INIT_D),
        }
    }
}

impl ToolPaths {
    /// Path of the init script for `service`
    ///
    /// Joined as a string so an empty name still yields `<init_d>/`.
    pub fn init_script(&self, service: &str) -> String {
        format!("{}/{}", self.init_d.display(), service)
    }
}
