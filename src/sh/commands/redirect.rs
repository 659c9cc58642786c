// Redirected command: stdin/stdout bound to files inside the child

use crate::sh::ast::CommandSpec;
use crate::sh::process::{Argv, Termination, move_fd, spawn};
use anyhow::Result;
use nix::fcntl::{OFlag, open};
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::sys::stat::Mode;
use std::os::fd::RawFd;

pub fn launch(spec: &CommandSpec) -> Result<Termination> {
    let argv = Argv::new(&spec.argv)?;
    let input = spec.input.as_deref();
    let output = spec.output.as_deref();

    let child = spawn(&argv, || {
        if let Some(path) = input {
            let fd = open_file(path, OFlag::O_RDONLY, Mode::empty())?;
            move_fd(fd, STDIN_FILENO)?;
        }
        if let Some(path) = output {
            let fd = open_file(
                path,
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
                Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH,
            )?;
            move_fd(fd, STDOUT_FILENO)?;
        }
        Ok(())
    })?;
    Ok(child.wait()?)
}

fn open_file(path: &str, flags: OFlag, mode: Mode) -> Result<RawFd, String> {
    open(path, flags, mode).map_err(|e| format!("{}: {}", path, e.desc()))
}
