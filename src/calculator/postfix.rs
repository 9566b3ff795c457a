//! Postfix evaluation on a value stack.

use tracing::trace;

use super::error::{CalcError, Result};
use super::operator::{Operator, OperatorTable};
use super::options::Strictness;
use super::shunting_yard::Postfix;
use super::token::{TokenKind, classify};

/// Value stack for one evaluation.
#[derive(Debug, Default)]
struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pop both operands of `operator` and push the result. The value pushed
    /// last is the right operand.
    fn apply(&mut self, operator: Operator, index: usize) -> Result<()> {
        let underflow = || CalcError::StackUnderflow {
            operator: operator.symbol(),
            index,
        };
        let right = self.values.pop().ok_or_else(underflow)?;
        let left = self.values.pop().ok_or_else(underflow)?;
        let value = operator.op.apply(left, right);
        trace!(left, right, operator = operator.symbol(), value, "applied");
        self.values.push(value);
        Ok(())
    }

    /// The top of the stack. Values beneath it are an error only when strict.
    fn finish(self, strictness: Strictness) -> Result<f64> {
        let Some(&top) = self.values.last() else {
            return Err(CalcError::EmptyExpression);
        };
        if strictness.is_strict() && self.values.len() > 1 {
            return Err(CalcError::UnusedOperands {
                count: self.values.len() - 1,
            });
        }
        Ok(top)
    }
}

/// Evaluate converter output.
///
/// Anything other than numbers and operators (only ever a `(` left over from
/// lenient conversion) is skipped.
pub fn evaluate(postfix: &Postfix<'_>, strictness: Strictness) -> Result<f64> {
    let mut stack = ValueStack::default();

    for token in postfix.tokens() {
        match token.kind {
            TokenKind::Number(value) => stack.push(value),
            TokenKind::Operator(operator) => stack.apply(operator, token.index)?,
            TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::Unrecognized => {}
        }
    }

    stack.finish(strictness)
}

/// Evaluate an expression that is already in postfix order, one symbol per
/// item.
///
/// Symbols that are neither numbers nor operators of `table` are skipped
/// when lenient and rejected as [`CalcError::UnknownOperator`] when strict.
pub fn evaluate_symbols<'a, I>(symbols: I, table: &OperatorTable, strictness: Strictness) -> Result<f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stack = ValueStack::default();

    for (index, symbol) in symbols.into_iter().enumerate() {
        match classify(symbol, table) {
            TokenKind::Number(value) => stack.push(value),
            TokenKind::Operator(operator) => stack.apply(operator, index)?,
            _ if strictness.is_strict() => {
                return Err(CalcError::UnknownOperator {
                    symbol: symbol.to_string(),
                    index,
                });
            }
            _ => {}
        }
    }

    stack.finish(strictness)
}
