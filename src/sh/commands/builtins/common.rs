use crate::sh::error::ShellError;

/// The single operand of `name`. Missing and surplus operands are both errors.
pub fn single_operand<'a>(name: &'static str, args: &'a [String]) -> Result<&'a str, ShellError> {
    match args {
        [_, operand] => Ok(operand.as_str()),
        [] | [_] => Err(ShellError::MissingArgument(name)),
        _ => Err(ShellError::TooManyArguments(name)),
    }
}
