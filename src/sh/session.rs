use crate::logger::report;
use crate::sh::ast::Flow;
use crate::sh::context::ShellContext;
use crate::sh::run_command_line;
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// The read → tokenize → classify → execute loop.
pub struct Session<R, W> {
    ctx: ShellContext,
    input: R,
    out: W,
    prompt: Option<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ctx: ShellContext, input: R, out: W, prompt: Option<String>) -> Self {
        Self {
            ctx,
            input,
            out,
            prompt,
        }
    }

    /// Run until `exit` or end of input. Command failures are reported and
    /// never end the loop; only a failed read does.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = self.read_line()? else {
                debug!("end of input");
                return Ok(());
            };

            match run_command_line(&line, &mut self.ctx, &mut self.out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Terminate) => {
                    debug!("exit requested");
                    return Ok(());
                }
                Err(e) => report(&e),
            }
            self.out.flush()?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
