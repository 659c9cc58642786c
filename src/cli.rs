use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minish", version, about = "Minish: a minimal fork/exec command shell")]
pub struct Cli {
    /// Read commands from this file instead of standard input
    pub script: Option<PathBuf>,

    /// Configuration file (defaults to ~/.minish.toml when present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Do not print the prompt
    #[arg(short = 'n', long = "no-prompt")]
    pub no_prompt: bool,
}
