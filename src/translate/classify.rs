//! Single pass over the normalized arguments
//!
//! The scan is a fold of [`ScanState::step`] over `(index, token)` pairs.
//! Each classifying keyword overwrites the command type but only ever
//! appends to the accumulated arguments, so a mixed invocation such as
//! `start foo mask` keeps `start` in front of `444`.

use std::ops::ControlFlow;

use crate::keyword::Keyword;
use crate::paths::ToolPaths;

pub const BANNER: [&str; 3] = [
    concat!("SystemD2OpenRC v", env!("CARGO_PKG_VERSION")),
    "by frknkrc44",
    "Use the man documentation, a search engine etc. to find help.",
];

/// Target command family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandType {
    /// No classifying keyword seen; nothing will be run
    #[default]
    Unset,
    /// rc-service
    ServiceControl,
    /// rc-update
    UnitListOrToggle,
    /// chmod on the init script
    MaskToggle,
    /// loginctl
    PowerControl,
    /// openrc single
    SingleUserBoot,
}

/// Accumulated result of scanning a prefix of the arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub command_type: CommandType,
    /// Translated arguments; never shrinks
    pub cmds: Vec<String>,
    pub user_mode: bool,
    /// First non-keyword, non-flag token after the program name
    pub service_name: Option<String>,
    /// Lines to print, in the order they were produced
    pub output: Vec<String>,
}

/// Outcome of a full scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
    Complete(ScanState),
    /// Stopped at a keyword with no OpenRC equivalent
    Unimplemented { token: String, output: Vec<String> },
}

impl ScanState {
    fn set(&mut self, command_type: CommandType, cmds: &[&str]) {
        self.command_type = command_type;
        self.cmds.extend(cmds.iter().map(|s| s.to_string()));
    }

    /// Fold one token into the state
    pub fn step(mut self, index: usize, token: &str, paths: &ToolPaths) -> ControlFlow<Scan, Self> {
        let Some(keyword) = Keyword::parse(token) else {
            if index != 0
                && self.service_name.is_none()
                && !token.is_empty()
                && !token.starts_with('-')
            {
                self.service_name = Some(token.to_string());
            }
            return ControlFlow::Continue(self);
        };

        match keyword {
            Keyword::ServiceVerb(verb) => self.set(CommandType::ServiceControl, &[verb]),
            Keyword::Restart => self.set(CommandType::ServiceControl, &["restart"]),
            Keyword::User => {
                self.user_mode = true;
                if self.command_type == CommandType::Unset {
                    self.command_type = CommandType::ServiceControl;
                }
            }
            Keyword::ListUnits => self.set(CommandType::UnitListOrToggle, &["show"]),
            Keyword::TypeService => {
                // Only meaningful after a list verb
                if self.command_type == CommandType::UnitListOrToggle {
                    self.cmds.push("-v".to_string());
                }
            }
            Keyword::Enable => self.set(CommandType::UnitListOrToggle, &["add"]),
            Keyword::Disable => self.set(CommandType::UnitListOrToggle, &["del"]),
            Keyword::Mask => self.set(CommandType::MaskToggle, &["444"]),
            Keyword::Unmask => self.set(CommandType::MaskToggle, &["555"]),
            Keyword::Unimplemented => {
                self.output.push(format!("Not implemented: {}", token));
                return ControlFlow::Break(Scan::Unimplemented {
                    token: token.to_string(),
                    output: self.output,
                });
            }
            Keyword::SingleUser => {
                let openrc = paths.openrc.display().to_string();
                self.set(CommandType::SingleUserBoot, &[openrc.as_str(), "single"]);
            }
            Keyword::Power(verb) => self.set(CommandType::PowerControl, &[verb]),
            Keyword::IsSystemRunning => self.output.push("running".to_string()),
            Keyword::Banner => self.output.extend(BANNER.iter().map(|s| s.to_string())),
        }

        ControlFlow::Continue(self)
    }
}

/// Scan normalized arguments (program name included)
pub fn classify(args: &[String], paths: &ToolPaths) -> Scan {
    let folded = args
        .iter()
        .enumerate()
        .try_fold(ScanState::default(), |state, (index, token)| {
            state.step(index, token, paths)
        });

    match folded {
        ControlFlow::Continue(state) => Scan::Complete(state),
        ControlFlow::Break(scan) => scan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(tokens: &[&str]) -> Scan {
        let args: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        classify(&args, &ToolPaths::default())
    }

    fn complete(tokens: &[&str]) -> ScanState {
        match scan(tokens) {
            Scan::Complete(state) => state,
            other => panic!("scan stopped early: {:?}", other),
        }
    }

    #[test]
    fn test_service_verb() {
        let state = complete(&["systemctl", "start", "foo"]);
        assert_eq!(state.command_type, CommandType::ServiceControl);
        assert_eq!(state.cmds, vec!["start"]);
        assert_eq!(state.service_name.as_deref(), Some("foo"));
        assert!(!state.user_mode);
    }

    #[test]
    fn test_restart_aliases() {
        for verb in ["try-restart", "reload-or-restart", "try-reload-or-restart"] {
            let state = complete(&["systemctl", verb, "foo"]);
            assert_eq!(state.command_type, CommandType::ServiceControl);
            assert_eq!(state.cmds, vec!["restart"]);
        }
    }

    #[test]
    fn test_user_keeps_existing_type() {
        let state = complete(&["systemctl", "enable", "--user", "foo"]);
        assert_eq!(state.command_type, CommandType::UnitListOrToggle);
        assert!(state.user_mode);

        let state = complete(&["systemctl", "--user", "foo"]);
        assert_eq!(state.command_type, CommandType::ServiceControl);
        assert!(state.cmds.is_empty());
    }

    #[test]
    fn test_type_service_order() {
        let state = complete(&["systemctl", "list-units", "--type=service"]);
        assert_eq!(state.cmds, vec!["show", "-v"]);

        let state = complete(&["systemctl", "--type=service", "list-units"]);
        assert_eq!(state.cmds, vec!["show"]);
    }

    #[test]
    fn test_service_name_first_match_wins() {
        let state = complete(&["systemctl", "start", "foo", "bar"]);
        assert_eq!(state.service_name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_service_name_skips_flags_and_program() {
        let state = complete(&["nginx", "--now", "", "start", "foo"]);
        assert_eq!(state.service_name.as_deref(), Some("foo"));
    }

    #[test]
    fn test_program_name_is_classified() {
        // argv[0] goes through the keyword table like any other token
        let state = complete(&["reboot", "list-units"]);
        assert_eq!(state.command_type, CommandType::UnitListOrToggle);
        assert_eq!(state.cmds, vec!["reboot", "show"]);
    }

    #[test]
    fn test_overwrite_keeps_earlier_cmds() {
        let state = complete(&["systemctl", "start", "foo", "mask"]);
        assert_eq!(state.command_type, CommandType::MaskToggle);
        assert_eq!(state.cmds, vec!["start", "444"]);
    }

    #[test]
    fn test_single_user() {
        let state = complete(&["systemctl", "emergency"]);
        assert_eq!(state.command_type, CommandType::SingleUserBoot);
        assert_eq!(state.cmds, vec!["/sbin/openrc", "single"]);
    }

    #[test]
    fn test_unimplemented_stops_scan() {
        assert_eq!(
            scan(&["systemctl", "is-system-running", "daemon-reload", "help"]),
            Scan::Unimplemented {
                token: "daemon-reload".into(),
                output: vec!["running".into(), "Not implemented: daemon-reload".into()],
            }
        );
    }

    #[test]
    fn test_type_socket_unimplemented() {
        assert!(matches!(
            scan(&["systemctl", "list-units", "--type=socket"]),
            Scan::Unimplemented { token, .. } if token == "--type=socket"
        ));
    }

    #[test]
    fn test_banner() {
        let state = complete(&["systemctl", "version"]);
        assert_eq!(state.command_type, CommandType::Unset);
        assert_eq!(state.output.len(), 3);
        assert!(state.output[0].starts_with("SystemD2OpenRC v"));
        assert_eq!(state.output[1], "by frknkrc44");
    }

    #[test]
    fn test_is_system_running() {
        let state = complete(&["systemctl", "is-system-running"]);
        assert_eq!(state.command_type, CommandType::Unset);
        assert_eq!(state.output, vec!["running"]);
        assert!(state.cmds.is_empty());
    }
}
