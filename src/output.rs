//! Output formatting for human and JSON modes
//!
//! Human mode prints the bare negative count, one line. JSON mode prints the
//! whole tally as an object.

use serde::Serialize;

use crate::counter::Tally;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of counting one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Number of readings consumed
    pub readings: usize,
    /// Number of readings below zero
    pub negatives: usize,
}

impl From<Tally> for CountResult {
    fn from(tally: Tally) -> Self {
        Self {
            readings: tally.readings,
            negatives: tally.negatives,
        }
    }
}

impl CountResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        println!("{}", self.to_line(mode));
    }

    /// The single output line, without its terminator
    #[must_use]
    pub fn to_line(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self.negatives.to_string(),
            OutputMode::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}
