//! The fixed binary operator table.
//!
//! Two read-only tables exist, one per [`AssociativityRule`]. Both are
//! built once on first use and shared by reference afterwards.

use lazy_static::lazy_static;

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// The symbol this operation is written with.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Apply the operation. Division follows IEEE-754, so dividing by zero
    /// yields an infinity or NaN rather than an error.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
            Self::Power => left.powf(right),
        }
    }
}

/// An entry of the operator table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    pub op: BinaryOp,
    /// Higher binds tighter.
    pub precedence: u8,
    pub right_associative: bool,
}

impl Operator {
    const fn new(op: BinaryOp, precedence: u8, right_associative: bool) -> Self {
        Self {
            op,
            precedence,
            right_associative,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.op.symbol()
    }
}

/// How equal-precedence operators are grouped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssociativityRule {
    /// Every operator is flagged right-associative and a tie pops the stack
    /// when the incoming operator carries that flag, so same-precedence
    /// chains always fold left: `2 ^ 3 ^ 2` is `64`.
    #[default]
    Legacy,
    /// `+ - * /` group left, `^` groups right: `2 ^ 3 ^ 2` is `512`.
    Conventional,
}

impl AssociativityRule {
    /// Whether an incoming operator pops an equal-precedence stack top.
    pub fn pops_on_tie(self, incoming: &Operator) -> bool {
        match self {
            Self::Legacy => incoming.right_associative,
            Self::Conventional => !incoming.right_associative,
        }
    }

    /// The table matching this rule.
    pub fn table(self) -> &'static OperatorTable {
        match self {
            Self::Legacy => &*LEGACY_TABLE,
            Self::Conventional => &*CONVENTIONAL_TABLE,
        }
    }
}

/// Symbol to operator mapping.
#[derive(Debug)]
pub struct OperatorTable {
    rule: AssociativityRule,
    operators: [Operator; 5],
}

lazy_static! {
    static ref LEGACY_TABLE: OperatorTable = OperatorTable {
        rule: AssociativityRule::Legacy,
        operators: [
            Operator::new(BinaryOp::Add, 1, true),
            Operator::new(BinaryOp::Subtract, 1, true),
            Operator::new(BinaryOp::Multiply, 2, true),
            Operator::new(BinaryOp::Divide, 2, true),
            Operator::new(BinaryOp::Power, 3, true),
        ],
    };

    static ref CONVENTIONAL_TABLE: OperatorTable = OperatorTable {
        rule: AssociativityRule::Conventional,
        operators: [
            Operator::new(BinaryOp::Add, 1, false),
            Operator::new(BinaryOp::Subtract, 1, false),
            Operator::new(BinaryOp::Multiply, 2, false),
            Operator::new(BinaryOp::Divide, 2, false),
            Operator::new(BinaryOp::Power, 3, true),
        ],
    };
}

impl OperatorTable {
    /// Look up a symbol. Unknown symbols are simply not operators.
    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        self.operators
            .iter()
            .find(|operator| operator.symbol() == symbol)
            .copied()
    }

    /// Whether `incoming` must pop `top` off the operator stack first.
    pub fn should_pop(&self, top: &Operator, incoming: &Operator) -> bool {
        top.precedence > incoming.precedence
            || (top.precedence == incoming.precedence && self.rule.pops_on_tie(incoming))
    }
}
