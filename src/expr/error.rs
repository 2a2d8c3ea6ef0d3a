//! Expression parse errors.

use thiserror::Error;

/// Errors raised while parsing a conditional expression.
///
/// All of these are fatal: a run aborts before any row is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The left-hand column name is not in the table header.
    #[error("expecting a valid column name, found {0:?}")]
    UnknownColumn(String),

    /// The operator token is not one of the six comparison operators.
    #[error("unknown operand: {0}")]
    UnknownOperand(String),

    /// A numeric literal failed to decode as a float.
    #[error("malformed number: {0}")]
    MalformedNumber(String),

    /// The expression ended where another token was required.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
}
