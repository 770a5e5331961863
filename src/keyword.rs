//! systemctl keywords understood by the translator
//!
//! Matching is exact and case-sensitive. Anything that does not parse is a
//! candidate service name.

/// systemctl verbs and flags with no OpenRC counterpart
pub const UNIMPLEMENTED: &[&str] = &[
    "daemon-reload",
    "kill",
    "list-automounts",
    "list-paths",
    "list-sockets",
    "list-timers",
    "is-active",
    "is-failed",
    "cat",
    "list-dependencies",
    "reload",
    "isolate",
    "clean",
    "freeze",
    "thaw",
    "set-property",
    "bind",
    "mount-image",
    "service-log-level",
    "service-log-target",
    "reset-failed",
    "whoami",
    "preset",
    "preset-all",
    "is-enabled",
    "link",
    "revert",
    "add-wants",
    "edit",
    "get-default",
    "set-default",
    "list-machines",
    "list-jobs",
    "cancel",
    "show-environment",
    "set-environment",
    "unset-environment",
    "import-environment",
    "daemon-reexec",
    "log-level",
    "log-target",
    "service-watchdogs",
    "default",
    "kexec",
    "soft-reboot",
    "exit",
    "switch-root",
    "--type=socket",
];

/// A recognized input token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// start, stop, restart, status (passed through as-is)
    ServiceVerb(&'static str),
    /// try-restart and the reload-or-restart family, all mapped to `restart`
    Restart,
    /// --user
    User,
    /// list-units, list-unit-files
    ListUnits,
    /// --type=service
    TypeService,
    /// enable, reenable
    Enable,
    /// disable
    Disable,
    /// mask
    Mask,
    /// unmask
    Unmask,
    /// Known systemctl keyword with no OpenRC equivalent
    Unimplemented,
    /// rescue, emergency
    SingleUser,
    /// Power and sleep verbs, carrying the loginctl verb to use
    Power(&'static str),
    /// is-system-running
    IsSystemRunning,
    /// help, version
    Banner,
}

impl Keyword {
    pub fn parse(token: &str) -> Option<Self> {
        let keyword = match token {
            "start" => Self::ServiceVerb("start"),
            "stop" => Self::ServiceVerb("stop"),
            "restart" => Self::ServiceVerb("restart"),
            "status" => Self::ServiceVerb("status"),
            "try-restart" | "reload-or-restart" | "try-reload-or-restart" => Self::Restart,
            "--user" => Self::User,
            "list-units" | "list-unit-files" => Self::ListUnits,
            "--type=service" => Self::TypeService,
            "enable" | "reenable" => Self::Enable,
            "disable" => Self::Disable,
            "mask" => Self::Mask,
            "unmask" => Self::Unmask,
            "rescue" | "emergency" => Self::SingleUser,
            "halt" | "shutdown" | "poweroff" => Self::Power("poweroff"),
            "reboot" => Self::Power("reboot"),
            "hibernate" => Self::Power("hibernate"),
            "hybrid-sleep" => Self::Power("hybrid-sleep"),
            "suspend-then-hibernate" => Self::Power("suspend-then-hibernate"),
            "sleep" | "suspend" => Self::Power("suspend"),
            "is-system-running" => Self::IsSystemRunning,
            "help" | "version" => Self::Banner,
            _ if UNIMPLEMENTED.contains(&token) => Self::Unimplemented,
            _ => return None,
        };
        Some(keyword)
    }
}
