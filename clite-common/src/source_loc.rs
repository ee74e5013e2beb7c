//! Source location tracking for error reporting
//!
//! Positions are only used for diagnostics; nothing in the pipeline
//! depends on them for its semantics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source buffer.
///
/// `offset` is 0-based and counted in characters; `line` and `column`
/// are 1-based. A position with line 0 is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "-")
        }
    }
}

/// Cursor bookkeeping for the scanner
#[derive(Debug, Clone)]
pub struct SourceTracker {
    offset: usize,
    line: u32,
    column: u32,
}

impl SourceTracker {
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Advance past one character
    pub fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for SourceTracker {
    fn default() -> Self {
        Self::new()
    }
}
