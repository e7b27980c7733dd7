//! The calculator brain: an accumulator plus at most one pending binary operation
//!
//! Every method is total. Missing preconditions and unknown symbols leave the
//! state untouched instead of failing, and non-finite values simply propagate.

use tracing::{debug, trace};

use crate::core::format::format_number;
use crate::core::operations::{BinaryFn, CombineFn, Operation, OperationTable};
use crate::core::Operand;

/// A binary operation waiting for its second operand
#[derive(Debug, Clone)]
struct PendingBinaryOperation {
    apply: BinaryFn,
    combine: CombineFn,
    first: Operand,
}

impl PendingBinaryOperation {
    /// Applies the operation to the captured first operand and `second`
    fn resolve(&self, second: &Operand) -> Operand {
        Operand::new(
            (self.apply)(self.first.value, second.value),
            (self.combine)(&self.first.description, &second.description),
        )
    }
}

/// Strict left-to-right calculator brain
#[derive(Debug, Clone)]
pub struct Evaluator {
    operations: &'static OperationTable,
    accumulator: Option<Operand>,
    pending: Option<PendingBinaryOperation>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an empty evaluator over the built-in operation table
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: OperationTable::builtin(),
            accumulator: None,
            pending: None,
        }
    }

    /// Returns the operation table this evaluator dispatches on
    #[must_use]
    pub fn operations(&self) -> &'static OperationTable {
        self.operations
    }

    /// Sets the accumulator to a literal value, described by its formatted text
    pub fn set_operand(&mut self, value: f64) {
        let operand = Operand::new(value, format_number(value));
        trace!(value, description = %operand.description, "operand set");
        self.accumulator = Some(operand);
    }

    /// Applies the operation named by `symbol`.
    ///
    /// Unknown symbols are ignored.
    pub fn apply_operation(&mut self, symbol: &str) {
        let operations = self.operations;
        let Some(operation) = operations.get(symbol) else {
            debug!(symbol, "ignoring unknown operation");
            return;
        };

        match *operation {
            Operation::Constant(value) => {
                self.accumulator = Some(Operand::new(value, symbol));
            }
            Operation::Unary { apply, describe } => {
                if let Some(acc) = self.accumulator.as_mut() {
                    acc.value = apply(acc.value);
                    acc.description = describe(&acc.description);
                }
            }
            Operation::Binary { apply, combine } => {
                if self.accumulator.is_some() {
                    self.resolve_pending();
                    if let Some(first) = self.accumulator.take() {
                        self.pending = Some(PendingBinaryOperation {
                            apply,
                            combine,
                            first,
                        });
                    }
                }
            }
            Operation::Equals => {
                if self.accumulator.is_some() {
                    self.resolve_pending();
                }
            }
        }

        debug!(
            symbol,
            kind = %operation.kind(),
            result = ?self.result(),
            pending = self.result_is_pending(),
            "operation applied"
        );
    }

    /// Resolves the pending operation against the accumulator, if both exist
    fn resolve_pending(&mut self) {
        let Some(second) = self.accumulator.as_ref() else {
            return;
        };
        if let Some(pending) = self.pending.take() {
            self.accumulator = Some(pending.resolve(second));
        }
    }

    /// Current value: the accumulator, else the pending first operand
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        self.accumulator
            .as_ref()
            .or_else(|| self.pending.as_ref().map(|p| &p.first))
            .map(|operand| operand.value)
    }

    /// True while a binary operation awaits its second operand
    #[must_use]
    pub fn result_is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Human-readable derivation of the current result.
    ///
    /// While an operation is pending this renders the expression in progress,
    /// e.g. `5 ×` before the second operand is entered.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        match (&self.pending, &self.accumulator) {
            (Some(pending), acc) => {
                let second = acc.as_ref().map_or("", |a| a.description.as_str());
                Some((pending.combine)(&pending.first.description, second))
            }
            (None, Some(acc)) => Some(acc.description.clone()),
            (None, None) => None,
        }
    }

    /// Clears the accumulator and any pending operation
    pub fn reset(&mut self) {
        trace!("evaluator reset");
        self.accumulator = None;
        self.pending = None;
    }
}
