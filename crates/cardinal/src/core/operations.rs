//! The fixed table of calculator operations, keyed by key-face symbol
//!
//! Every operation is one of four kinds. The table is built once per process
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Numeric function of one operand
pub type UnaryFn = fn(f64) -> f64;
/// Renders the description of a unary result from its operand's description
pub type DescribeFn = fn(&str) -> String;
/// Numeric function of two operands
pub type BinaryFn = fn(f64, f64) -> f64;
/// Combines the descriptions of a first and second operand
pub type CombineFn = fn(&str, &str) -> String;

/// A single entry of the operation table
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value described by its symbol
    Constant(f64),
    /// Transforms the accumulator in place
    Unary {
        /// Numeric function
        apply: UnaryFn,
        /// Description rendering
        describe: DescribeFn,
    },
    /// Captures the accumulator as the first operand of a pending operation
    Binary {
        /// Numeric function
        apply: BinaryFn,
        /// Description combiner
        combine: CombineFn,
    },
    /// Resolves the pending operation against the accumulator
    Equals,
}

impl Operation {
    /// Returns the kind of this operation
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Constant(_) => OperationKind::Constant,
            Self::Unary { .. } => OperationKind::Unary,
            Self::Binary { .. } => OperationKind::Binary,
            Self::Equals => OperationKind::Equals,
        }
    }
}

/// Operation kinds, used when listing the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Fixed value
    Constant,
    /// One operand
    Unary,
    /// Two operands
    Binary,
    /// Resolves a pending binary operation
    Equals,
}

impl OperationKind {
    /// Returns the lowercase name of the kind
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Unary => "unary",
            Self::Binary => "binary",
            Self::Equals => "equals",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Joins two descriptions around an infix operator.
///
/// An empty second description leaves no trailing space (`5 ×`).
fn infix(first: &str, op: &str, second: &str) -> String {
    format!("{first} {op} {second}").trim_end().to_string()
}

/// Immutable symbol-to-operation mapping
#[derive(Debug)]
pub struct OperationTable {
    entries: Vec<(&'static str, Operation)>,
}

impl OperationTable {
    /// Returns the process-wide table of built-in operations
    #[must_use]
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<OperationTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let entries: Vec<(&'static str, Operation)> = vec![
            ("π", Operation::Constant(std::f64::consts::PI)),
            ("e", Operation::Constant(std::f64::consts::E)),
            (
                "√",
                Operation::Unary {
                    apply: f64::sqrt,
                    describe: |d| format!("√({d})"),
                },
            ),
            (
                "∛",
                Operation::Unary {
                    apply: f64::cbrt,
                    describe: |d| format!("∛({d})"),
                },
            ),
            (
                "x²",
                Operation::Unary {
                    apply: |x| x * x,
                    describe: |d| format!("({d})²"),
                },
            ),
            (
                "x⁻¹",
                Operation::Unary {
                    apply: f64::recip,
                    describe: |d| format!("1/({d})"),
                },
            ),
            (
                "±",
                Operation::Unary {
                    apply: |x| -x,
                    describe: |d| format!("-({d})"),
                },
            ),
            (
                "sin",
                Operation::Unary {
                    apply: f64::sin,
                    describe: |d| format!("sin({d})"),
                },
            ),
            (
                "cos",
                Operation::Unary {
                    apply: f64::cos,
                    describe: |d| format!("cos({d})"),
                },
            ),
            (
                "tan",
                Operation::Unary {
                    apply: f64::tan,
                    describe: |d| format!("tan({d})"),
                },
            ),
            (
                "ln",
                Operation::Unary {
                    apply: f64::ln,
                    describe: |d| format!("ln({d})"),
                },
            ),
            (
                "×",
                Operation::Binary {
                    apply: |a, b| a * b,
                    combine: |a, b| infix(a, "×", b),
                },
            ),
            (
                "÷",
                Operation::Binary {
                    apply: |a, b| a / b,
                    combine: |a, b| infix(a, "÷", b),
                },
            ),
            (
                "+",
                Operation::Binary {
                    apply: |a, b| a + b,
                    combine: |a, b| infix(a, "+", b),
                },
            ),
            (
                "−",
                Operation::Binary {
                    apply: |a, b| a - b,
                    combine: |a, b| infix(a, "−", b),
                },
            ),
            (
                "xʸ",
                Operation::Binary {
                    apply: f64::powf,
                    combine: |a, b| infix(a, "^", b),
                },
            ),
            ("=", Operation::Equals),
        ];
        Self { entries }
    }

    /// Looks up an operation by symbol
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Operation> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, op)| op)
    }

    /// Returns true if the symbol names an operation
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Iterates over `(symbol, operation)` pairs in keypad order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        self.entries.iter().map(|(s, op)| (*s, op))
    }

    /// Returns the number of operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no operations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
