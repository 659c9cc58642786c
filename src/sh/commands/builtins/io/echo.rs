// ECHO marker output

use crate::sh::parser::PIPE;
use anyhow::Result;
use std::io::Write;

/// Print each token on its own line followed by a `SPACE` line, writing
/// `PIPE` in place of a `|` token.
pub fn print_marked(tokens: &[String], out: &mut dyn Write) -> Result<()> {
    for token in tokens {
        if token == PIPE {
            writeln!(out, "PIPE")?;
        } else {
            writeln!(out, "{}", token)?;
        }
        writeln!(out, "SPACE")?;
    }
    Ok(())
}
