// System command: one external program, stdio inherited from the shell

use crate::sh::ast::CommandSpec;
use crate::sh::process::{Argv, Termination, spawn};
use anyhow::Result;

pub fn launch(spec: &CommandSpec) -> Result<Termination> {
    let argv = Argv::new(&spec.argv)?;
    let child = spawn(&argv, || Ok(()))?;
    Ok(child.wait()?)
}
