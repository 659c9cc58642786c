// Cd command

use crate::sh::ast::Flow;
use crate::sh::commands::Executable;
use crate::sh::commands::builtins::common::single_operand;
use crate::sh::context::ShellContext;
use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::io::Write;

pub struct CdCommand;

impl Executable for CdCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<Flow> {
        // args[0] is "cd". args[1] is the directory.
        let target = single_operand("cd", args)?;
        env::set_current_dir(target).with_context(|| format!("cd: {}", target))?;
        debug!("cwd -> {}", target);
        Ok(Flow::Continue)
    }
}
