//! Calculator module for evaluating space-delimited infix expressions.
//!
//! This module provides functionality to:
//! - Classify tokens against a fixed operator table
//! - Convert infix expressions to postfix order (shunting-yard)
//! - Evaluate postfix expressions on a value stack
//! - Suggest spacing for glued tokens such as `3+4`
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod error;
mod evaluation;
mod operator;
mod options;
mod postfix;
mod shunting_yard;
mod token;

pub use clipboard::copy_to_clipboard;
pub use detection::suggest_spacing;
pub use error::{CalcError, Result};
pub use evaluation::{CalcResult, Calculator, calculate, format_clipboard, format_display};
pub use operator::{AssociativityRule, BinaryOp, Operator, OperatorTable};
pub use options::{CalcOptions, PopStrategy, Strictness};
pub use postfix::{evaluate, evaluate_symbols};
pub use shunting_yard::{Postfix, to_postfix};
pub use token::{Token, TokenKind, classify, tokenize};
