//! Default-command injection

/// Verb assumed when the caller gave only flags, or nothing at all
const DEFAULT_VERB: &str = "list-units";

/// Program name used when argv is empty
const FALLBACK_PROGRAM: &str = "systemctl";

/// True if any argument after the program name is not flag-like
fn has_command(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| !arg.starts_with('-'))
}

/// Insert `list-units` after the program name unless a command was given
pub fn normalize(args: Vec<String>) -> Vec<String> {
    if args.len() >= 2 && has_command(&args) {
        return args;
    }

    let mut iter = args.into_iter();
    let program = iter.next().unwrap_or_else(|| FALLBACK_PROGRAM.to_string());

    let mut normalized = vec![program, DEFAULT_VERB.to_string()];
    normalized.extend(iter);
    normalized
}
