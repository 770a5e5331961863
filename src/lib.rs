//! systemd2openrc - systemctl on top of OpenRC
//!
//! Translates one `systemctl` invocation into the matching OpenRC tool call:
//!
//! ```text
//! systemctl start foo        →  /bin/rc-service foo start
//! systemctl enable foo       →  /bin/rc-update add foo
//! systemctl mask foo         →  /bin/chmod 444 /etc/init.d/foo
//! systemctl poweroff         →  /bin/loginctl poweroff
//! systemctl rescue           →  /sbin/openrc single
//! ```
//!
//! The translated command runs as a child; its exit status becomes ours.

pub mod exec;
pub mod keyword;
pub mod paths;
pub mod translate;

pub use exec::{run, ExecError};
pub use paths::ToolPaths;
pub use translate::{plan, OpenrcCommand, Plan};
