//! Cardinal - an accumulator calculator brain
//!
//! The [`Evaluator`](core::Evaluator) keeps a running value plus at most one
//! pending binary operation and evaluates strictly left to right, with no
//! operator precedence. Every result carries a description of how it was
//! derived, so a front end can show `5 × 4 + ...` while input is in progress.
//!
//! Operations come from a fixed table keyed by key-face symbol: constants
//! (`π`, `e`), unary functions (`√`, `x²`, `±`, `sin`, ...), binary
//! operators (`×`, `÷`, `+`, `−`, `xʸ`) and `=`. Unknown symbols and
//! operations without the operands they need are silently ignored.
//!
//! # Example
//!
//! ```rust
//! use cardinal::prelude::*;
//!
//! let mut brain = Evaluator::new();
//! brain.set_operand(5.0);
//! brain.apply_operation("×");
//! assert_eq!(brain.description().as_deref(), Some("5 ×"));
//!
//! brain.set_operand(4.0);
//! brain.apply_operation("+");
//! brain.set_operand(2.0);
//! brain.apply_operation("=");
//! assert_eq!(brain.result(), Some(22.0));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, Evaluator, Operand, Operation, OperationKind, OperationTable,
    };
    pub use crate::session::{DisplayState, Key, Session};
}
