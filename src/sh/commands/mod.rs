pub mod builtins;
pub mod system;
pub mod redirect;
pub mod pipe;

use crate::sh::ast::Flow;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

/// A command that runs inside the shell process.
pub trait Executable: Send + Sync {
    /// `args[0]` is the command's own name. Output goes to `out`.
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<Flow>;
}
