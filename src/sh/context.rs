use crate::config::{PERMISSION_BITS, SessionConfig};
use crate::sh::tokenizer::TokenSeq;
use log::debug;

/// The previous line's raw tokens.
#[derive(Debug, Clone, Default)]
pub struct History {
    previous: Option<TokenSeq>,
}

impl History {
    pub fn previous(&self) -> Option<&TokenSeq> {
        self.previous.as_ref()
    }

    pub fn record(&mut self, tokens: &TokenSeq) {
        debug!("history <- {:?}", &**tokens);
        self.previous = Some(tokens.clone());
    }
}

/// Per-session state threaded through classification and execution.
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub history: History,
    pub mkdir_mode: u32,
    pub recall_depth: usize,
}

impl ShellContext {
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            history: History::default(),
            mkdir_mode: config.mkdir_mode & PERMISSION_BITS,
            recall_depth: config.recall_depth,
        }
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
