//! Property-based tests for the evaluator and session
//!
//! Random key sequences must never panic and must keep the state invariants.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use cardinal::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Symbols that are not in the operation table
fn unknown_symbol_strategy() -> impl Strategy<Value = String> {
    "[a-z%*/^-]{0,4}".prop_filter("must not be a known symbol", |s| {
        !OperationTable::builtin().contains(s)
    })
}

/// Any symbol in the operation table
fn known_symbol_strategy() -> impl Strategy<Value = String> {
    let symbols: Vec<String> = OperationTable::builtin()
        .iter()
        .map(|(s, _)| s.to_string())
        .collect();
    proptest::sample::select(symbols)
}

/// Binary operator symbols
fn binary_symbol_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("×"), Just("÷"), Just("+"), Just("−"), Just("xʸ")]
}

/// A single evaluator step
#[derive(Debug, Clone)]
enum Step {
    Operand(f64),
    Apply(String),
    Reset,
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (-1e6f64..1e6f64).prop_map(Step::Operand),
        5 => known_symbol_strategy().prop_map(Step::Apply),
        1 => unknown_symbol_strategy().prop_map(Step::Apply),
        1 => Just(Step::Reset),
    ]
}

fn replay(steps: &[Step]) -> Evaluator {
    let mut eval = Evaluator::new();
    for step in steps {
        match step {
            Step::Operand(v) => eval.set_operand(*v),
            Step::Apply(s) => eval.apply_operation(s),
            Step::Reset => eval.reset(),
        }
    }
    eval
}

fn state(eval: &Evaluator) -> (Option<f64>, bool, Option<String>) {
    (eval.result(), eval.result_is_pending(), eval.description())
}

proptest! {
    /// Unknown symbols never change any observable state
    #[test]
    fn prop_unknown_symbol_is_noop(
        steps in prop::collection::vec(step_strategy(), 0..20),
        symbol in unknown_symbol_strategy(),
    ) {
        let mut eval = replay(&steps);
        let before = state(&eval);
        eval.apply_operation(&symbol);
        let after = state(&eval);
        // NaN != NaN, so compare the bits of the result
        prop_assert_eq!(before.0.map(f64::to_bits), after.0.map(f64::to_bits));
        prop_assert_eq!(before.1, after.1);
        prop_assert_eq!(before.2, after.2);
    }

    /// set_operand is immediately observable and never pending on a fresh brain
    #[test]
    fn prop_set_operand_result(x in -1e12f64..1e12f64) {
        let mut eval = Evaluator::new();
        eval.set_operand(x);
        prop_assert_eq!(eval.result(), Some(x));
        prop_assert!(!eval.result_is_pending());
        prop_assert_eq!(eval.description(), Some(format_number(x)));
    }

    /// Reset always returns to the empty state
    #[test]
    fn prop_reset_empties(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let mut eval = replay(&steps);
        eval.reset();
        prop_assert_eq!(state(&eval), (None, false, None));
    }

    /// A result exists exactly when a description exists
    #[test]
    fn prop_result_and_description_agree(steps in prop::collection::vec(step_strategy(), 0..30)) {
        let eval = replay(&steps);
        prop_assert_eq!(eval.result().is_some(), eval.description().is_some());
    }

    /// Chains of binary operators evaluate strictly left to right
    #[test]
    fn prop_left_to_right(
        first in -1e3f64..1e3f64,
        rest in prop::collection::vec((binary_symbol_strategy(), 1.0f64..10.0f64), 1..6),
    ) {
        let mut eval = Evaluator::new();
        eval.set_operand(first);
        let mut expected = first;
        for (symbol, operand) in &rest {
            eval.apply_operation(symbol);
            eval.set_operand(*operand);
            expected = match *symbol {
                "×" => expected * operand,
                "÷" => expected / operand,
                "+" => expected + operand,
                "−" => expected - operand,
                _ => expected.powf(*operand),
            };
        }
        eval.apply_operation("=");
        let result = eval.result().unwrap();
        prop_assert!(
            result.to_bits() == expected.to_bits() || (result.is_nan() && expected.is_nan()),
            "got {result}, expected {expected}"
        );
        prop_assert!(!eval.result_is_pending());
    }

    /// Repeating a binary operator without a second operand keeps the first operand
    #[test]
    fn prop_repeated_binary_keeps_first(x in -1e6f64..1e6f64, symbol in binary_symbol_strategy(), n in 1usize..5) {
        let mut eval = Evaluator::new();
        eval.set_operand(x);
        for _ in 0..n {
            eval.apply_operation(symbol);
            prop_assert_eq!(eval.result(), Some(x));
            prop_assert!(eval.result_is_pending());
        }
    }

    /// Formatting is deterministic and never exceeds six fraction digits
    #[test]
    fn prop_format_fraction_digits(x in -1e9f64..1e9f64) {
        let text = format_number(x);
        prop_assert_eq!(&text, &format_number(x));
        let fraction = text.split('.').nth(1).unwrap_or("");
        prop_assert!(fraction.len() <= 6);
        prop_assert!(!fraction.ends_with('0'));
        prop_assert!(!text.starts_with('.'));
    }

    /// The session display always holds a parseable number or a non-finite marker
    #[test]
    fn prop_session_display_is_number(
        keys in prop::collection::vec(
            prop_oneof![
                "[0-9.]".prop_map(|s| Key::Digit(s.chars().next().unwrap())),
                known_symbol_strategy().prop_map(Key::Operation),
                Just(Key::Clear),
            ],
            0..30,
        )
    ) {
        let mut session = Session::new();
        for key in &keys {
            session.press(key);
        }
        let display = session.display();
        prop_assert!(
            display.parse::<f64>().is_ok() || ["∞", "-∞", "NaN"].contains(&display),
            "unexpected display {display}"
        );
    }
}

#[test]
fn test_mixed_sequence_left_to_right() {
    let mut eval = Evaluator::new();
    eval.set_operand(5.0);
    eval.apply_operation("×");
    eval.set_operand(4.0);
    eval.apply_operation("+");
    eval.set_operand(2.0);
    eval.apply_operation("=");
    assert_eq!(eval.result(), Some(22.0));
}

#[test]
fn test_in_progress_description() {
    let mut eval = Evaluator::new();
    eval.set_operand(5.0);
    eval.apply_operation("×");
    assert_eq!(eval.description().as_deref(), Some("5 ×"));
}
