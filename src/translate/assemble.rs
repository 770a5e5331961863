//! Build the OpenRC command line from a finished scan

use std::fmt;

use super::classify::{CommandType, ScanState};
use crate::paths::ToolPaths;

/// Full argument vector of the command to run; `argv[0]` is the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenrcCommand {
    argv: Vec<String>,
}

impl OpenrcCommand {
    /// Returns `None` for an empty vector
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn into_argv(self) -> Vec<String> {
        self.argv
    }
}

impl fmt::Display for OpenrcCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match shlex::try_join(self.argv.iter().map(String::as_str)) {
            Ok(line) => f.write_str(&line),
            // Arguments with NUL bytes cannot be quoted
            Err(_) => write!(f, "{:?}", self.argv),
        }
    }
}

fn path_arg(path: &std::path::Path) -> String {
    path.display().to_string()
}

/// Assemble the final command, or `None` when nothing was classified
pub fn assemble(state: &ScanState, paths: &ToolPaths) -> Option<OpenrcCommand> {
    let service_name = state.service_name.clone().unwrap_or_default();

    let argv = match state.command_type {
        CommandType::Unset => return None,
        CommandType::ServiceControl => {
            let mut argv = vec![path_arg(&paths.rc_service)];
            if state.user_mode {
                argv.push("--user".to_string());
            }
            // The name slot is kept even when empty
            argv.push(service_name);
            argv.extend(state.cmds.iter().cloned());
            argv
        }
        CommandType::UnitListOrToggle => {
            let mut argv = vec![path_arg(&paths.rc_update)];
            if state.user_mode {
                argv.push("--user".to_string());
            }
            argv.extend(state.cmds.iter().cloned());
            if !service_name.is_empty() {
                argv.push(service_name);
            }
            argv
        }
        CommandType::MaskToggle => {
            let mut argv = vec![path_arg(&paths.chmod)];
            argv.extend(state.cmds.iter().cloned());
            argv.push(paths.init_script(&service_name));
            argv
        }
        CommandType::PowerControl => {
            let mut argv = vec![path_arg(&paths.loginctl)];
            argv.extend(state.cmds.iter().cloned());
            argv
        }
        // cmds already starts with the init executable, unless an earlier
        // classification left tokens in front of it
        CommandType::SingleUserBoot => state.cmds.clone(),
    };

    OpenrcCommand::new(argv)
}
