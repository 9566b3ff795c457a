//! Tokenization: split on single spaces and classify each piece.

use super::operator::{Operator, OperatorTable};

/// What a token turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    OpenParen,
    CloseParen,
    Unrecognized,
}

/// A piece of the input together with its classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Position in the space-split input, starting at 0.
    pub index: usize,
    pub kind: TokenKind,
}

/// Classify a single token. Numbers take priority, so `-5` and `1e3` are
/// numbers rather than operators or garbage.
pub fn classify(text: &str, table: &OperatorTable) -> TokenKind {
    if let Ok(value) = text.parse::<f64>() {
        return TokenKind::Number(value);
    }

    if let Some(operator) = table.lookup(text) {
        return TokenKind::Operator(operator);
    }

    match text {
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        _ => TokenKind::Unrecognized,
    }
}

/// Split `input` on every single space and classify the pieces.
///
/// Consecutive spaces produce empty tokens and glued text such as `3+4`
/// stays a single token; both classify as [`TokenKind::Unrecognized`].
pub fn tokenize<'a>(
    input: &'a str,
    table: &'a OperatorTable,
) -> impl Iterator<Item = Token<'a>> + 'a {
    input.split(' ').enumerate().map(move |(index, text)| Token {
        text,
        index,
        kind: classify(text, table),
    })
}
