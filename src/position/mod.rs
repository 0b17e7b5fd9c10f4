//! Cursor row/column tracking
//!
//! The position is a cache over the gap buffer: it must always equal
//! `Position::scan(buffer.before_gap())`. Forward motion can update it from
//! the single crossed byte; backward motion over a newline cannot (the
//! previous line's length is unknown) and falls back to a rescan.

/// Zero-based line and byte column of the cursor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Derive the position from everything before the cursor
    #[must_use]
    pub fn scan(before_cursor: &[u8]) -> Self {
        before_cursor
            .iter()
            .fold(Position::default(), |pos, &byte| pos.advanced(byte))
    }

    #[must_use]
    fn advanced(mut self, byte: u8) -> Self {
        self.advance(byte);
        self
    }

    /// Account for `byte` having moved from after the cursor to before it
    pub fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
    }

    /// Account for `byte` having left the region before the cursor
    ///
    /// Returns `false` when the byte was a newline; the caller has to rescan.
    #[must_use]
    pub fn retreat(&mut self, byte: u8) -> bool {
        if byte == b'\n' {
            return false;
        }
        self.col = self.col.saturating_sub(1);
        true
    }
}
