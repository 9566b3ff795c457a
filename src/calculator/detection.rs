//! Detection of glued tokens.
//!
//! The tokenizer only splits on spaces, so `3+4` is a single unrecognized
//! token. This module recognizes such tokens and proposes the spaced form
//! so callers can tell the user what went wrong.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A token made entirely of numbers, operators and parentheses.
    static ref GLUED: Regex = Regex::new(
        r"^(?:\d+(?:\.\d+)?(?:[eE][+-]?\d+)?|[-+*/^()])+$"
    ).unwrap();

    /// One number, operator or parenthesis.
    static ref PIECE: Regex = Regex::new(
        r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?|[-+*/^()]"
    ).unwrap();
}

/// Suggest the space-delimited spelling of a glued token.
///
/// Returns `None` when the token is not made of numbers, operators and
/// parentheses, or when it is already a single piece.
pub fn suggest_spacing(token: &str) -> Option<String> {
    if !GLUED.is_match(token) {
        return None;
    }

    let mut pieces: Vec<String> = Vec::new();
    let mut raw = PIECE.find_iter(token).map(|m| m.as_str()).peekable();

    while let Some(piece) = raw.next() {
        // A minus that cannot be binary belongs to the number after it.
        let follows_operand = pieces
            .last()
            .is_some_and(|prev| prev == ")" || is_number(prev));
        if piece == "-" && !follows_operand {
            if let Some(next) = raw.peek().copied().filter(|next| is_number(next)) {
                raw.next();
                pieces.push(format!("-{}", next));
                continue;
            }
        }
        pieces.push(piece.to_string());
    }

    if pieces.len() < 2 {
        return None;
    }

    Some(pieces.join(" "))
}

fn is_number(piece: &str) -> bool {
    piece.parse::<f64>().is_ok()
}
