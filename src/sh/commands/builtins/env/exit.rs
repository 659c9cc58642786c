// Exit command

use crate::sh::ast::Flow;
use crate::sh::commands::Executable;
use crate::sh::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct ExitCommand;

impl Executable for ExitCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<Flow> {
        Ok(Flow::Terminate)
    }
}
