// Help command

use crate::sh::ast::Flow;
use crate::sh::commands::Executable;
use crate::sh::commands::builtins::Builtin;
use crate::sh::context::ShellContext;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<Flow> {
        writeln!(out, "{}", "minish: a minimal command shell".bold())?;
        writeln!(out, "Type program names and arguments, and hit enter.")?;
        writeln!(out, "The following are built in:")?;
        for builtin in Builtin::ALL {
            writeln!(out, "  {}", builtin.name())?;
        }
        writeln!(out, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}
