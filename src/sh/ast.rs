use crate::sh::commands::builtins::Builtin;

/// Whether the session loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// One external command: argv plus the files its stdin/stdout are bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub argv: Vec<String>,
    pub input: Option<String>,
    pub output: Option<String>,
}

impl CommandSpec {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            ..Self::default()
        }
    }

    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    // Blank line
    Empty,
    // "a b | c ECHO": tokens before the marker
    Echo(Vec<String>),
    // args[0] is the builtin's own name
    Builtin { kind: Builtin, args: Vec<String> },
    // "ls | wc"
    Pipe { left: CommandSpec, right: CommandSpec },
    // "sort < in.txt > out.txt"
    Redirect(CommandSpec),
    // "ls -la"
    Simple(CommandSpec),
}
