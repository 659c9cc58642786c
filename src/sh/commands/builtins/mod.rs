pub mod fs;
pub mod env;
pub mod io;
pub mod history;
pub mod common; // Private helpers

use crate::sh::commands::Executable;

/// The fixed builtin table, in lookup and `help` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Cd,
    Mkdir,
    Exit,
    Recall,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Help,
        Builtin::Cd,
        Builtin::Mkdir,
        Builtin::Exit,
        Builtin::Recall,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::Cd => "cd",
            Builtin::Mkdir => "mkdir",
            Builtin::Exit => "exit",
            Builtin::Recall => "!!",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn handler(self) -> &'static dyn Executable {
        match self {
            Builtin::Help => &io::help::HelpCommand,
            Builtin::Cd => &env::cd::CdCommand,
            Builtin::Mkdir => &fs::mkdir::MkdirCommand,
            Builtin::Exit => &env::exit::ExitCommand,
            Builtin::Recall => &history::recall::RecallCommand,
        }
    }
}
