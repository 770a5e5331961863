//! systemctl - drop-in systemctl for OpenRC systems
//!
//! Accepts systemctl's argument grammar, runs the equivalent OpenRC tool
//! and exits with its status.

use systemd2openrc::{plan, Plan, ToolPaths};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // argv[0] takes part in classification, so keep the raw vector
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let plan = plan(args, &ToolPaths::default());

    for line in plan.output() {
        println!("{}", line);
    }

    let Plan::Run { command, .. } = plan else {
        return;
    };

    match systemd2openrc::run(&command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
