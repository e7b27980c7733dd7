//! Calculator core: number formatting, the operation table and the evaluator

pub mod evaluator;
pub mod format;
mod operations;

pub use evaluator::Evaluator;
pub use format::format_number;
pub use operations::{
    BinaryFn, CombineFn, DescribeFn, Operation, OperationKind, OperationTable, UnaryFn,
};

/// A value paired with the human-readable derivation that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// Numeric value
    pub value: f64,
    /// Textual derivation, e.g. `√(9)` or `5 × 4`
    pub description: String,
}

impl Operand {
    /// Creates an operand from a value and its description
    #[must_use]
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}
