pub use parser::BinOp;
pub use parser::Expr;
pub use parser::ParseError;
pub use parser::UnaryOp;
pub use parser::{parse, parse_str};

pub mod parser;
#[cfg(test)]
mod parser_test;

pub use self::treeval::{AngleMode, EvalError, MathContext};

mod treeval;

mod display;
pub use display::{format_result, group_thousands};


use thiserror::Error;

/// Anything that can go wrong between raw input and a rendered result.
/// Both variants surface to the user the same way: "Error".
#[derive(Debug, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Parse and evaluate `expr` against `ctx`, rendering the value to 12
/// significant digits. Pure: no state survives between calls, so it is
/// safe to invoke on every keystroke.
pub fn evaluate(expr: &str, ctx: &MathContext) -> Result<String, CalcError> {
    let tree = parser::parse_str(expr)?;
    let value = ctx.eval(&tree)?;
    if !value.is_finite() {
        return Err(EvalError::NotFinite.into());
    }
    Ok(display::format_result(value))
}
