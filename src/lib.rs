//! A calculator for space-delimited infix expressions.
//!
//! ```
//! assert_eq!(yardcalc::calculate("3 + 4 * ( 2 - 1 )"), Ok(7.0));
//! ```

pub mod calculator;
pub mod config;

pub use calculator::{CalcError, CalcOptions, CalcResult, Calculator, calculate};
pub use config::Config;
