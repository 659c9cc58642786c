use nix::errno::Errno;
use thiserror::Error;

/// Conditions the shell diagnoses and recovers from.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),

    #[error("no previous command")]
    NoPreviousCommand,

    #[error("recall nested deeper than {0} levels")]
    RecallDepth(usize),

    #[error("syntax error: missing command before '|'")]
    EmptyPipeLeft,

    #[error("syntax error: missing command after '|'")]
    EmptyPipeRight,

    #[error("syntax error: '{0}' cannot be combined with '|'")]
    RedirectInPipeline(String),

    #[error("syntax error: expected file name after '{0}'")]
    MissingRedirectTarget(&'static str),

    #[error("syntax error: missing command for redirection")]
    MissingCommand,

    #[error("argument contains a NUL byte: {0:?}")]
    NulByte(String),

    #[error("fork: {0}")]
    Fork(Errno),

    #[error("pipe: {0}")]
    Pipe(Errno),

    #[error("wait: {0}")]
    Wait(Errno),
}
