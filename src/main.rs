mod cli;
mod config;
mod handlers;
mod logger;
mod sh;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use handlers::shell;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    logger::init(&config.shell.log_level);

    shell::handle_shell(cli, config)
}
