//! Behavior switches for conversion and evaluation.
//!
//! The defaults reproduce the legacy calculator exactly; every hardened or
//! textbook variant is opt-in.

use serde::Deserialize;

pub use super::operator::AssociativityRule;

/// What happens to tokens and stack leftovers the grammar does not cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Unrecognized tokens are dropped, unmatched parens are tolerated and
    /// extra operands are ignored.
    #[default]
    Lenient,
    /// All of the above are errors.
    Strict,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// How many operators an incoming operator may pop before being pushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopStrategy {
    /// At most one pop per incoming operator.
    #[default]
    Single,
    /// Keep popping while the stack top qualifies (textbook shunting-yard).
    Drain,
}

/// Options shared by the converter and the evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalcOptions {
    pub strictness: Strictness,
    pub pop_strategy: PopStrategy,
    pub associativity: AssociativityRule,
}

impl CalcOptions {
    /// Textbook behavior: strict tokens, draining pops and conventional
    /// associativity.
    pub fn hardened() -> Self {
        Self {
            strictness: Strictness::Strict,
            pop_strategy: PopStrategy::Drain,
            associativity: AssociativityRule::Conventional,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_pop_strategy(mut self, pop_strategy: PopStrategy) -> Self {
        self.pop_strategy = pop_strategy;
        self
    }

    pub fn with_associativity(mut self, associativity: AssociativityRule) -> Self {
        self.associativity = associativity;
        self
    }
}
