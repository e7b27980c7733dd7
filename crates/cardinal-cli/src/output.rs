//! Rendering of display states and the operation table

use cardinal::prelude::{DisplayState, OperationKind, OperationTable};
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for rendered state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per rendering
    Json,
}

/// A row of the `ops` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationEntry {
    /// Key-face symbol
    pub symbol: String,
    /// Operation kind
    pub kind: OperationKind,
}

/// Renders session state in the configured format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    use_color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Renders a display state: the display line, then the description line
    pub fn state(&self, state: &DisplayState) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(state)?),
            OutputFormat::Text => {
                let display = if self.use_color {
                    style(&state.display).bold().force_styling(true).to_string()
                } else {
                    state.display.clone()
                };
                let description = if self.use_color && !state.description.is_empty() {
                    style(&state.description).dim().force_styling(true).to_string()
                } else {
                    state.description.clone()
                };
                Ok(format!("{display}\n{description}"))
            }
        }
    }

    /// Renders the operation table, one operation per line in text mode
    pub fn operations(&self, table: &OperationTable) -> CliResult<String> {
        let entries: Vec<OperationEntry> = table
            .iter()
            .map(|(symbol, op)| OperationEntry {
                symbol: symbol.to_string(),
                kind: op.kind(),
            })
            .collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => Ok(entries
                .iter()
                .map(|entry| {
                    let symbol = if self.use_color {
                        style(&entry.symbol).cyan().force_styling(true).to_string()
                    } else {
                        entry.symbol.clone()
                    };
                    format!("{symbol}\t{}", entry.kind)
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
