use crate::sh::ast::{Flow, Plan};
use crate::sh::commands::builtins::io::echo::print_marked;
use crate::sh::commands::{pipe, redirect, system};
use crate::sh::context::ShellContext;
use crate::sh::process::Termination;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Run a classified line. External commands never change the returned flow;
/// only a builtin can ask the session to stop.
pub fn dispatch(plan: Plan, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<Flow> {
    match plan {
        Plan::Empty => Ok(Flow::Continue),
        Plan::Echo(tokens) => {
            print_marked(&tokens, out)?;
            Ok(Flow::Continue)
        }
        Plan::Builtin { kind, args } => kind.handler().execute(&args, ctx, out),
        Plan::Simple(spec) => {
            // Anything still buffered would be written twice once the child inherits it.
            out.flush()?;
            let status = system::launch(&spec)?;
            log_status(spec.program(), status);
            Ok(Flow::Continue)
        }
        Plan::Redirect(spec) => {
            out.flush()?;
            let status = redirect::launch(&spec)?;
            log_status(spec.program(), status);
            Ok(Flow::Continue)
        }
        Plan::Pipe { left, right } => {
            out.flush()?;
            let (left_status, right_status) = pipe::launch(&left, &right)?;
            log_status(left.program(), left_status);
            log_status(right.program(), right_status);
            Ok(Flow::Continue)
        }
    }
}

fn log_status(program: &str, status: Termination) {
    if !status.success() {
        debug!("{} finished unsuccessfully: {:?}", program, status);
    }
}
