use colored::*;
use env_logger::Env;
use std::io::{self, IsTerminal};

/// Start `env_logger` with `default_level` unless `RUST_LOG` says otherwise.
pub fn init(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Print a command failure as `shell: <cause>: <cause>...` on stderr.
pub fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", "shell:".red().bold(), err);
}
