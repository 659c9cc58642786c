// Two commands joined by one pipe

use crate::sh::ast::CommandSpec;
use crate::sh::error::ShellError;
use crate::sh::process::{Argv, Termination, move_fd, spawn};
use anyhow::Result;
use log::debug;
use nix::libc::{STDIN_FILENO, STDOUT_FILENO};
use nix::unistd::{close, pipe};
use std::os::fd::AsRawFd;

/// Run `left | right` and wait for both. Returns (left, right) terminations.
pub fn launch(left: &CommandSpec, right: &CommandSpec) -> Result<(Termination, Termination)> {
    let left_argv = Argv::new(&left.argv)?;
    let right_argv = Argv::new(&right.argv)?;

    let (reader, writer) = pipe().map_err(ShellError::Pipe)?;
    let (read_fd, write_fd) = (reader.as_raw_fd(), writer.as_raw_fd());

    let left_child = spawn(&left_argv, || {
        move_fd(write_fd, STDOUT_FILENO)?;
        close(read_fd).map_err(|e| format!("close: {}", e.desc()))
    })?;

    let right_child = match spawn(&right_argv, || {
        move_fd(read_fd, STDIN_FILENO)?;
        close(write_fd).map_err(|e| format!("close: {}", e.desc()))
    }) {
        Ok(child) => child,
        Err(e) => {
            // Left sees a broken pipe once our ends are gone; reap it before bailing.
            drop(reader);
            drop(writer);
            left_child.wait()?;
            return Err(e.into());
        }
    };
    debug!("pipeline {} | {}", left_child.pid(), right_child.pid());

    // The reader only sees end-of-stream once every write end is closed.
    drop(reader);
    drop(writer);

    let left_status = left_child.wait();
    let right_status = right_child.wait();
    Ok((left_status?, right_status?))
}
