pub mod ast;
pub mod commands;
pub mod context;
pub mod error;
pub mod executor;
pub mod parser;
pub mod process;
pub mod session;
pub mod tokenizer;

use anyhow::Result;
use ast::{Flow, Plan};
use commands::builtins::Builtin;
use context::ShellContext;
use executor::dispatch;
use std::io::Write;
use tokenizer::tokenize;


/// Tokenize, classify and run one line, then remember its tokens for `!!`.
///
/// Lines that fail to classify run nothing and leave the history alone. Blank
/// lines and recalls are never remembered, so `!!` always names a real command.
pub fn run_command_line(line: &str, ctx: &mut ShellContext, out: &mut dyn Write) -> Result<Flow> {
    let tokens = tokenize(line);
    let plan = parser::classify(&tokens)?;
    let remember = !matches!(
        plan,
        Plan::Empty
            | Plan::Builtin {
                kind: Builtin::Recall,
                ..
            }
    );

    let result = dispatch(plan, ctx, out);
    if remember {
        ctx.history.record(&tokens);
    }
    result
}
