// Mkdir command

use crate::sh::ast::Flow;
use crate::sh::commands::Executable;
use crate::sh::commands::builtins::common::single_operand;
use crate::sh::context::ShellContext;
use anyhow::{Context, Result};
use std::fs::DirBuilder;
use std::io::Write;
use std::os::unix::fs::DirBuilderExt;

pub struct MkdirCommand;

impl Executable for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<Flow> {
        let path = single_operand("mkdir", args)?;
        DirBuilder::new()
            .mode(ctx.mkdir_mode)
            .create(path)
            .with_context(|| format!("mkdir: {}", path))?;
        Ok(Flow::Continue)
    }
}
