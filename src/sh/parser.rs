use crate::sh::ast::{CommandSpec, Plan};
use crate::sh::commands::builtins::Builtin;
use crate::sh::error::ShellError;
use log::debug;

pub const ECHO_MARKER: &str = "ECHO";
pub const PIPE: &str = "|";
pub const REDIRECT_OUT: &str = ">";
pub const REDIRECT_IN: &str = "<";

/// Decide how a tokenized line runs. Checks, in order: empty line, trailing
/// `ECHO` marker, builtin name, first `|`, `<`/`>` redirections, plain command.
pub fn classify(tokens: &[String]) -> Result<Plan, ShellError> {
    let Some(first) = tokens.first() else {
        return Ok(Plan::Empty);
    };

    if tokens.last().is_some_and(|t| t == ECHO_MARKER) {
        return Ok(Plan::Echo(tokens[..tokens.len() - 1].to_vec()));
    }

    if let Some(kind) = Builtin::from_name(first) {
        return Ok(Plan::Builtin {
            kind,
            args: tokens.to_vec(),
        });
    }

    let plan = if let Some(split) = tokens.iter().position(|t| t == PIPE) {
        parse_pipe(tokens, split)?
    } else if tokens.iter().any(|t| is_redirect_op(t)) {
        Plan::Redirect(parse_redirection(tokens)?)
    } else {
        Plan::Simple(CommandSpec::new(tokens.to_vec()))
    };
    debug!("classified {:?} as {:?}", tokens, plan);
    Ok(plan)
}

fn parse_pipe(tokens: &[String], split: usize) -> Result<Plan, ShellError> {
    let (left, right) = (&tokens[..split], &tokens[split + 1..]);
    if left.is_empty() {
        return Err(ShellError::EmptyPipeLeft);
    }
    if right.is_empty() {
        return Err(ShellError::EmptyPipeRight);
    }
    // Redirection targets would otherwise reach exec as plain arguments
    if let Some(op) = tokens.iter().find(|t| is_redirect_op(t)) {
        return Err(ShellError::RedirectInPipeline(op.clone()));
    }
    Ok(Plan::Pipe {
        left: CommandSpec::new(left.to_vec()),
        right: CommandSpec::new(right.to_vec()),
    })
}

/// Strip every `< file` and `> file` pair out of `tokens`. The last occurrence
/// of each operator wins.
pub fn parse_redirection(tokens: &[String]) -> Result<CommandSpec, ShellError> {
    let mut spec = CommandSpec::default();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let op = match token.as_str() {
            REDIRECT_OUT => REDIRECT_OUT,
            REDIRECT_IN => REDIRECT_IN,
            _ => {
                spec.argv.push(token.clone());
                continue;
            }
        };

        let target = match iter.next() {
            Some(file) if !is_redirect_op(file) => file.clone(),
            _ => return Err(ShellError::MissingRedirectTarget(op)),
        };
        if op == REDIRECT_OUT {
            spec.output = Some(target);
        } else {
            spec.input = Some(target);
        }
    }

    if spec.argv.is_empty() {
        return Err(ShellError::MissingCommand);
    }
    Ok(spec)
}

fn is_redirect_op(token: &str) -> bool {
    token == REDIRECT_OUT || token == REDIRECT_IN
}
