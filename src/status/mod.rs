//! Status line
//!
//! ## status/ Invariants
//!
//! - The message is transient: every key event clears it before handling.
//! - Status content is derived from editor state; rendering it never
//!   influences editor behavior.

use crate::position::Position;

/// The one-line transient message shown under the buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn clear(&mut self) {
        self.message.clear();
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full status line: `<file>[*]: <row>,<col> --- <message>`, padded or
    /// cut to exactly `width` characters
    #[must_use]
    pub fn format(&self, file_name: &str, dirty: bool, cursor: Position, width: usize) -> String {
        let marker = if dirty { "*" } else { "" };
        let line = format!(
            "{file_name}{marker}: {},{} --- {}",
            cursor.row, cursor.col, self.message
        );
        let mut cells: String = line.chars().take(width).collect();
        let used = cells.chars().count();
        cells.extend(std::iter::repeat(' ').take(width - used));
        cells
    }
}
