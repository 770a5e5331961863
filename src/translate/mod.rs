//! systemctl → OpenRC translation
//!
//! Three stages, none of which touch the outside world:
//! 1. [`normalize`] injects `list-units` when only flags were given
//! 2. [`classify`] folds the tokens into a [`ScanState`]
//! 3. [`assemble`] turns the state into an [`OpenrcCommand`]

mod assemble;
mod classify;
mod normalize;

pub use assemble::{assemble, OpenrcCommand};
pub use classify::{classify, CommandType, Scan, ScanState, BANNER};
pub use normalize::normalize;

use crate::paths::ToolPaths;

/// What the binary should do for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Print `output` and exit 0 without spawning anything
    Exit { output: Vec<String> },
    /// Print `output`, run `command` and exit with its status
    Run {
        output: Vec<String>,
        command: OpenrcCommand,
    },
}

impl Plan {
    pub fn output(&self) -> &[String] {
        match self {
            Plan::Exit { output } | Plan::Run { output, .. } => output,
        }
    }

    pub fn command(&self) -> Option<&OpenrcCommand> {
        match self {
            Plan::Exit { .. } => None,
            Plan::Run { command, .. } => Some(command),
        }
    }
}

/// Translate a raw argv (program name first)
pub fn plan(args: Vec<String>, paths: &ToolPaths) -> Plan {
    let args = normalize(args);
    log::debug!("Normalized arguments: {:?}", args);

    let state = match classify(&args, paths) {
        Scan::Complete(state) => state,
        Scan::Unimplemented { token, output } => {
            log::debug!("No OpenRC equivalent for {:?}", token);
            return Plan::Exit { output };
        }
    };
    log::debug!("Classified as {:?}", state.command_type);

    match assemble(&state, paths) {
        Some(command) => Plan::Run {
            output: state.output,
            command,
        },
        None => Plan::Exit {
            output: state.output,
        },
    }
}
