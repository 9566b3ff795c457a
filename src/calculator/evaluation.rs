//! Expression evaluation and result formatting.
//!
//! [`Calculator`] binds a set of [`CalcOptions`] to its operator table and
//! runs the full pipeline: tokens, postfix, value.

use serde::Serialize;

use super::error::Result;
use super::operator::OperatorTable;
use super::options::CalcOptions;
use super::postfix;
use super::shunting_yard::{Postfix, to_postfix};

/// Result of evaluating a calculator expression, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalcResult {
    /// The expression produced a value. Infinities and NaN count as values.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Formatted for display (with thousand separators).
        display_result: String,
        /// Formatted for clipboard (raw number).
        clipboard_result: String,
    },
    /// The expression could not be evaluated.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    fn from_outcome(expression: &str, outcome: Result<f64>) -> Self {
        let expression = expression.to_string();
        match outcome {
            Ok(value) => Self::Success {
                expression,
                display_result: format_display(value),
                clipboard_result: format_clipboard(value),
                value,
            },
            Err(err) => Self::Error {
                expression,
                message: err.to_string(),
            },
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluates space-delimited infix expressions.
#[derive(Clone, Copy, Debug)]
pub struct Calculator {
    options: CalcOptions,
    table: &'static OperatorTable,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalcOptions::default())
    }
}

impl Calculator {
    pub fn new(options: CalcOptions) -> Self {
        Self {
            options,
            table: options.associativity.table(),
        }
    }

    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    /// Convert `input` to postfix order without evaluating it.
    pub fn to_postfix<'a>(&self, input: &'a str) -> Result<Postfix<'a>> {
        to_postfix(input, self.table, &self.options)
    }

    /// Evaluate an infix expression.
    pub fn calculate(&self, input: &str) -> Result<f64> {
        let postfix = self.to_postfix(input)?;
        postfix::evaluate(&postfix, self.options.strictness)
    }

    /// Evaluate an expression that is already in postfix order.
    pub fn calculate_postfix(&self, input: &str) -> Result<f64> {
        postfix::evaluate_symbols(input.split(' '), self.table, self.options.strictness)
    }

    /// Evaluate an infix expression and format the outcome for display.
    pub fn evaluate(&self, input: &str) -> CalcResult {
        CalcResult::from_outcome(input, self.calculate(input))
    }

    /// Evaluate a postfix expression and format the outcome for display.
    pub fn evaluate_postfix(&self, input: &str) -> CalcResult {
        CalcResult::from_outcome(input, self.calculate_postfix(input))
    }
}

/// Evaluate an infix expression with the default options.
///
/// Tokens must be separated by single spaces: `"3 + 4 * ( 2 - 1 )"`.
pub fn calculate(input: &str) -> Result<f64> {
    Calculator::default().calculate(input)
}

/// Outside `[SMALL, LARGE)` non-zero magnitudes use scientific notation.
const LARGE: f64 = 1e15;
const SMALL: f64 = 1e-4;

fn is_scientific(value: f64) -> bool {
    let magnitude = value.abs();
    magnitude >= LARGE || (magnitude != 0.0 && magnitude < SMALL)
}

/// Format a number for display with thousand separators.
pub fn format_display(value: f64) -> String {
    if !value.is_finite() || is_scientific(value) {
        return format_clipboard(value);
    }

    let raw = format_clipboard(value);
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    format!("{}{}{}", sign, with_separators(int_part), dec_part)
}

/// Format a number for clipboard (raw number, no separators).
pub fn format_clipboard(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if is_scientific(value) {
        return format!("{:e}", value);
    }
    if value.fract() == 0.0 {
        // Avoid "-0".
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Insert a comma every three digits, counting from the right.
fn with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
