//! Key-entry session driving a single evaluator
//!
//! Holds what a calculator face shows: the display text that digits are typed
//! into and the description line underneath it. Front ends translate their
//! input into [`Key`] presses and render a [`DisplayState`].

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{format_number, Evaluator};

/// Text shown on the display before anything is entered
pub const INITIAL_DISPLAY: &str = "0";

/// A key press on the calculator face
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    /// An operation symbol from the operation table
    Operation(String),
    /// Clear everything
    Clear,
}

/// Renderable state of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Main display text
    pub display: String,
    /// Description line, empty when there is nothing to describe
    pub description: String,
    /// Whether a binary operation awaits its second operand
    pub pending: bool,
    /// Current result of the evaluator, if any
    pub result: Option<f64>,
}

/// Interactive calculator session
#[derive(Debug, Clone)]
pub struct Session {
    brain: Evaluator,
    display: String,
    typing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty evaluator and a `0` display
    #[must_use]
    pub fn new() -> Self {
        Self {
            brain: Evaluator::new(),
            display: INITIAL_DISPLAY.to_string(),
            typing: false,
        }
    }

    /// Returns the evaluator
    #[must_use]
    pub fn brain(&self) -> &Evaluator {
        &self.brain
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns whether digits are currently being typed
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Dispatches a key press
    pub fn press(&mut self, key: &Key) {
        match key {
            Key::Digit(c) => {
                self.touch_digit(*c);
            }
            Key::Operation(symbol) => self.perform_operation(symbol),
            Key::Clear => self.clear(),
        }
    }

    /// Types a digit or decimal point into the display.
    ///
    /// Returns false if the key was rejected, either because it is not a digit
    /// or because the resulting text would not be a number (a second `.`).
    pub fn touch_digit(&mut self, key: char) -> bool {
        if !(key.is_ascii_digit() || key == '.') {
            return false;
        }

        if self.typing {
            let mut proposed = self.display.clone();
            proposed.push(key);
            if proposed.parse::<f64>().is_err() {
                trace!(%proposed, "rejected digit");
                return false;
            }
            self.display = proposed;
        } else {
            self.display = if key == '.' {
                "0.".to_string()
            } else {
                key.to_string()
            };
            self.typing = true;
        }
        true
    }

    /// Commits any typed number, then applies the operation named by `symbol`
    pub fn perform_operation(&mut self, symbol: &str) {
        if self.typing {
            if let Ok(value) = self.display.parse::<f64>() {
                self.brain.set_operand(value);
            }
            self.typing = false;
        }

        self.brain.apply_operation(symbol);

        if let Some(result) = self.brain.result() {
            self.display = format_number(result);
        }
    }

    /// Resets the evaluator and the display
    pub fn clear(&mut self) {
        self.brain.reset();
        self.typing = false;
        self.display = INITIAL_DISPLAY.to_string();
    }

    /// Description line: the expression followed by `...` while pending or `=`
    /// once resolved
    #[must_use]
    pub fn description_line(&self) -> String {
        match self.brain.description() {
            Some(description) if self.brain.result_is_pending() => {
                format!("{description} ...")
            }
            Some(description) => format!("{description} ="),
            None => String::new(),
        }
    }

    /// Captures what a front end should render
    #[must_use]
    pub fn snapshot(&self) -> DisplayState {
        DisplayState {
            display: self.display.clone(),
            description: self.description_line(),
            pending: self.brain.result_is_pending(),
            result: self.brain.result(),
        }
    }
}
