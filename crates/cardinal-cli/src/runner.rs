//! Feeds key presses to a session and writes the rendered state

use std::io::{BufRead, Write};

use cardinal::prelude::{Key, OperationTable, Session};
use tracing::debug;

use crate::error::CliResult;
use crate::keys::parse_line;
use crate::output::Renderer;

/// Drives one calculator session
#[derive(Debug)]
pub struct KeyRunner {
    session: Session,
    renderer: Renderer,
}

impl KeyRunner {
    /// Create a runner with a fresh session
    #[must_use]
    pub fn new(renderer: Renderer) -> Self {
        Self {
            session: Session::new(),
            renderer,
        }
    }

    /// Returns the session being driven
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Presses every key in order
    pub fn press_all(&mut self, keys: &[Key]) {
        for key in keys {
            if let Key::Operation(symbol) = key {
                if !OperationTable::builtin().contains(symbol) {
                    debug!(%symbol, "symbol is not on the keypad, ignoring");
                }
            }
            debug!(?key, "press");
            self.session.press(key);
        }
    }

    /// Runs the given argument tokens and writes the final state once
    pub fn run_args<W: Write>(&mut self, args: &[String], out: &mut W) -> CliResult<()> {
        for arg in args {
            let keys = parse_line(arg)?;
            self.press_all(&keys);
        }
        self.write_state(out)
    }

    /// Runs keys line by line from `input`, writing the state after each line
    pub fn run_lines<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let keys = parse_line(&line)?;
            self.press_all(&keys);
            self.write_state(out)?;
        }
        Ok(())
    }

    fn write_state<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let rendered = self.renderer.state(&self.session.snapshot())?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
