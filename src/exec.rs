//! Run the translated command as a child process

use std::io;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::translate::OpenrcCommand;

/// Exit code reported when the child has none (killed by a signal)
pub const NO_EXIT_CODE: i32 = -1;

/// Failure to start or reap the translated command
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Path actually executed for `program`
///
/// A name without `/` resolves against the working directory, never PATH.
pub fn executable_path(program: &str) -> PathBuf {
    if program.contains('/') {
        PathBuf::from(program)
    } else {
        Path::new(".").join(program)
    }
}

/// Spawn `command`, block until it exits and return its exit code
///
/// The child inherits the working directory, the environment and all three
/// standard streams. argv[0] is the program as written, not the resolved path.
pub fn run(command: &OpenrcCommand) -> Result<i32, ExecError> {
    log::debug!("Running {}", command);

    let mut child = Command::new(executable_path(command.program()))
        .arg0(command.program())
        .args(command.args())
        .spawn()
        .map_err(|source| ExecError::Spawn {
            program: command.program().to_string(),
            source,
        })?;

    let status = child.wait().map_err(|source| ExecError::Wait {
        program: command.program().to_string(),
        source,
    })?;

    log::debug!("{} exited with {}", command.program(), status);
    Ok(status.code().unwrap_or(NO_EXIT_CODE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_path() {
        assert_eq!(executable_path("/bin/rc-service"), PathBuf::from("/bin/rc-service"));
        assert_eq!(executable_path("poweroff"), PathBuf::from("./poweroff"));
        assert_eq!(executable_path("sbin/openrc"), PathBuf::from("sbin/openrc"));
    }
}
