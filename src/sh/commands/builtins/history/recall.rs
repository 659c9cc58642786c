// Recall command (!!)

use crate::sh::ast::{Flow, Plan};
use crate::sh::commands::Executable;
use crate::sh::commands::builtins::Builtin;
use crate::sh::context::ShellContext;
use crate::sh::error::ShellError;
use crate::sh::executor::dispatch;
use crate::sh::parser::classify;
use anyhow::Result;
use log::debug;
use std::io::Write;

pub struct RecallCommand;

impl Executable for RecallCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<Flow> {
        let mut depth = 0;
        loop {
            let previous = ctx
                .history
                .previous()
                .cloned()
                .ok_or(ShellError::NoPreviousCommand)?;

            depth += 1;
            if depth > ctx.recall_depth {
                return Err(ShellError::RecallDepth(ctx.recall_depth).into());
            }

            debug!("recall #{}: {:?}", depth, &*previous);
            match classify(&previous)? {
                Plan::Builtin { kind: Builtin::Recall, .. } => continue,
                plan => return dispatch(plan, ctx, out),
            }
        }
    }
}
