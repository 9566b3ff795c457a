use thiserror::Error;

/// Why an expression could not be evaluated.
///
/// Token indices are 0-based positions in the space-split input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("operator `{operator}` at token {index} is missing an operand")]
    StackUnderflow { operator: &'static str, index: usize },

    #[error("expression produced no value")]
    EmptyExpression,

    #[error("unrecognized token `{token}` at token {index}")]
    UnrecognizedToken { token: String, index: usize },

    #[error("`(` at token {index} is never closed")]
    UnmatchedOpenParen { index: usize },

    #[error("`)` at token {index} has no matching `(`")]
    UnmatchedCloseParen { index: usize },

    #[error("{count} operand(s) left unused")]
    UnusedOperands { count: usize },

    #[error("unknown operator `{symbol}` at token {index}")]
    UnknownOperator { symbol: String, index: usize },
}

pub type Result<T> = std::result::Result<T, CalcError>;
