use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufReader};
use crate::cli::Cli;
use crate::config::MinishConfig;
use crate::sh::context::ShellContext;
use crate::sh::session::Session;

pub fn handle_shell(cli: Cli, config: MinishConfig) -> Result<()> {
    let settings = config.shell;
    if settings.recall_depth == 0 {
        warn!("recall_depth is 0; '!!' will always fail");
    }

    let ctx = ShellContext::from_config(&settings);
    let prompt = (!cli.no_prompt).then_some(settings.prompt);
    let out = io::stdout();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            debug!("reading commands from {}", path.display());
            Session::new(ctx, BufReader::new(file), out, prompt).run()
        }
        None => Session::new(ctx, io::stdin().lock(), out, prompt).run(),
    }
}
