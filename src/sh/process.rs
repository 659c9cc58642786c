// Fork/exec/wait primitives shared by the launchers

use crate::sh::error::ShellError;
use log::{debug, trace};
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, close, dup2, execvp, fork};
use std::ffi::CString;
use std::os::fd::RawFd;

/// Exit status of a child whose program could not be executed.
pub const EXEC_FAILURE: i32 = 127;
/// Exit status of a child that failed while wiring its descriptors.
pub const SETUP_FAILURE: i32 = 1;

/// argv converted to C strings ahead of the fork, so the child only has to exec.
#[derive(Debug)]
pub struct Argv {
    args: Vec<CString>,
}

impl Argv {
    pub fn new(tokens: &[String]) -> Result<Self, ShellError> {
        if tokens.is_empty() {
            return Err(ShellError::MissingCommand);
        }
        let args = tokens
            .iter()
            .map(|t| CString::new(t.as_str()).map_err(|_| ShellError::NulByte(t.clone())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { args })
    }

    pub fn program(&self) -> &CString {
        &self.args[0]
    }
}

/// How a child reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(Signal),
}

impl Termination {
    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }
}

/// A running child process.
#[derive(Debug)]
pub struct Child {
    pid: Pid,
    program: String,
}

impl Child {
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Block until the child exits or is killed. Stop/continue transitions
    /// and interrupted waits keep waiting.
    pub fn wait(self) -> Result<Termination, ShellError> {
        loop {
            match waitpid(self.pid, Some(WaitPidFlag::WUNTRACED)) {
                Ok(WaitStatus::Exited(_, code)) => {
                    debug!("{} ({}) exited with status {}", self.program, self.pid, code);
                    return Ok(Termination::Exited(code));
                }
                Ok(WaitStatus::Signaled(_, signal, _)) => {
                    debug!("{} ({}) killed by {}", self.program, self.pid, signal);
                    return Ok(Termination::Signaled(signal));
                }
                Ok(status) => trace!("{} ({}): {:?}", self.program, self.pid, status),
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(ShellError::Wait(e)),
            }
        }
    }
}

/// Fork a child that runs `setup` and then replaces itself with `argv`.
///
/// `setup` runs in the child only. If it fails the child prints the cause and
/// exits with [`SETUP_FAILURE`]; if exec fails it exits with [`EXEC_FAILURE`].
pub fn spawn<F>(argv: &Argv, setup: F) -> Result<Child, ShellError>
where
    F: FnOnce() -> Result<(), String>,
{
    let program = argv.program().to_string_lossy().into_owned();

    // SAFETY: the child only touches descriptors before exec or _exit.
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            trace!("forked {} as {}", program, child);
            Ok(Child {
                pid: child,
                program,
            })
        }
        Ok(ForkResult::Child) => {
            if let Err(cause) = setup() {
                child_exit(&cause, SETUP_FAILURE);
            }
            let err = match execvp(argv.program(), &argv.args) {
                Ok(never) => match never {},
                Err(e) => e,
            };
            child_exit(&format!("{}: {}", program, err.desc()), EXEC_FAILURE)
        }
        Err(e) => Err(ShellError::Fork(e)),
    }
}

/// Make `target` refer to `fd`, then close `fd`.
pub fn move_fd(fd: RawFd, target: RawFd) -> Result<(), String> {
    if fd == target {
        return Ok(());
    }
    dup2(fd, target).map_err(|e| format!("dup2: {}", e.desc()))?;
    close(fd).map_err(|e| format!("close: {}", e.desc()))
}

fn child_exit(cause: &str, code: i32) -> ! {
    eprintln!("shell: {}", cause);
    // SAFETY: _exit skips the parent's atexit handlers and buffered stdio.
    unsafe { nix::libc::_exit(code) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[&str]) -> Termination {
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        let argv = Argv::new(&tokens).unwrap();
        spawn(&argv, || Ok(())).unwrap().wait().unwrap()
    }

    #[test]
    fn test_exit_code_is_classified() {
        assert_eq!(run(&["sh", "-c", "exit 3"]), Termination::Exited(3));
        assert!(run(&["true"]).success());
    }

    #[test]
    fn test_signal_is_classified() {
        assert_eq!(
            run(&["sh", "-c", "kill -KILL $$"]),
            Termination::Signaled(Signal::SIGKILL)
        );
    }

    #[test]
    fn test_missing_program_exits_127() {
        assert_eq!(
            run(&["minish-test-no-such-program"]),
            Termination::Exited(EXEC_FAILURE)
        );
    }

    #[test]
    fn test_failed_setup_exits_1() {
        let argv = Argv::new(&["true".to_string()]).unwrap();
        let child = spawn(&argv, || Err("setup refused".to_string())).unwrap();
        assert_eq!(child.wait().unwrap(), Termination::Exited(SETUP_FAILURE));
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let err = Argv::new(&["ec\0ho".to_string()]).unwrap_err();
        assert!(matches!(err, ShellError::NulByte(_)));
    }
}
