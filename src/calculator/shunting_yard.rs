//! Infix to postfix conversion.
//!
//! Operators wait on a stack until something that binds looser arrives.
//! Parentheses are stack markers that never satisfy the pop rule, so only a
//! closing paren (or the end of input) can remove them.

use std::fmt;

use tracing::{debug, trace};

use super::detection::suggest_spacing;
use super::error::{CalcError, Result};
use super::operator::{Operator, OperatorTable};
use super::options::{CalcOptions, PopStrategy};
use super::token::{Token, TokenKind, tokenize};

/// An expression in postfix order.
///
/// Holds numbers and operators. In lenient mode it may also hold the `(` of
/// an unmatched paren, which evaluation skips.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Postfix<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Postfix<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The token texts in postfix order.
    pub fn symbols(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|token| token.text).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols().join(" "))
    }
}

/// An operator together with the token it came from.
#[derive(Clone, Copy, Debug)]
struct Pending<'a> {
    operator: Operator,
    token: Token<'a>,
}

#[derive(Clone, Copy, Debug)]
enum StackEntry<'a> {
    Operator(Pending<'a>),
    OpenParen(Token<'a>),
}

impl<'a> StackEntry<'a> {
    fn token(&self) -> Token<'a> {
        match self {
            Self::Operator(pending) => pending.token,
            Self::OpenParen(token) => *token,
        }
    }
}

/// Convert a space-delimited infix expression to postfix order.
///
/// Lenient conversion never fails; strict conversion rejects unrecognized
/// tokens and unbalanced parentheses.
pub fn to_postfix<'a>(
    input: &'a str,
    table: &'a OperatorTable,
    options: &CalcOptions,
) -> Result<Postfix<'a>> {
    let strict = options.strictness.is_strict();
    let mut output: Vec<Token<'a>> = Vec::new();
    let mut stack: Vec<StackEntry<'a>> = Vec::new();

    for token in tokenize(input, table) {
        match token.kind {
            TokenKind::Number(_) => output.push(token),
            TokenKind::Operator(operator) => {
                loop {
                    let Some(StackEntry::Operator(top)) = stack.last().copied() else {
                        break;
                    };
                    if !table.should_pop(&top.operator, &operator) {
                        break;
                    }
                    stack.pop();
                    output.push(top.token);
                    if options.pop_strategy == PopStrategy::Single {
                        break;
                    }
                }
                stack.push(StackEntry::Operator(Pending { operator, token }));
            }
            TokenKind::OpenParen => stack.push(StackEntry::OpenParen(token)),
            TokenKind::CloseParen => {
                let mut matched = false;
                while let Some(entry) = stack.pop() {
                    match entry {
                        StackEntry::OpenParen(_) => {
                            matched = true;
                            break;
                        }
                        StackEntry::Operator(pending) => output.push(pending.token),
                    }
                }
                if !matched && strict {
                    return Err(CalcError::UnmatchedCloseParen { index: token.index });
                }
            }
            TokenKind::Unrecognized => {
                if strict {
                    return Err(CalcError::UnrecognizedToken {
                        token: token.text.to_string(),
                        index: token.index,
                    });
                }
                match suggest_spacing(token.text) {
                    Some(spaced) => debug!(
                        token = token.text,
                        index = token.index,
                        suggestion = %spaced,
                        "dropping glued token"
                    ),
                    None => debug!(
                        token = token.text,
                        index = token.index,
                        "dropping unrecognized token"
                    ),
                }
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::OpenParen(token) if strict => {
                return Err(CalcError::UnmatchedOpenParen { index: token.index });
            }
            _ => output.push(entry.token()),
        }
    }

    let postfix = Postfix { tokens: output };
    trace!(input, postfix = %postfix, "converted to postfix");
    Ok(postfix)
}
