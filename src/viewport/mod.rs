//! Viewport management
//! Handles the visible portion of the text buffer
//!
//! ## viewport/ Invariants
//!
//! - The viewport never mutates buffer contents.
//! - After `clamp`, the cursor lies inside the window:
//!   `scroll_row <= row < scroll_row + height` and likewise for columns.
//! - Scroll offsets only move as far as needed to contain the cursor.
//! - `clamp` is idempotent.

use crate::position::Position;

/// Window into the logical content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    scroll_row: usize,
    /// First visible column (0-indexed)
    scroll_col: usize,
    /// Number of visible text rows
    height: usize,
    /// Number of visible columns
    width: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Viewport {
            scroll_row: 0,
            scroll_col: 0,
            height,
            width,
        }
    }

    /// Scroll just far enough that `cursor` is visible
    /// Returns true if either offset changed
    pub fn clamp(&mut self, cursor: Position) -> bool {
        let before = (self.scroll_row, self.scroll_col);

        // A zero-sized window cannot contain anything
        if self.height > 0 {
            if cursor.row < self.scroll_row {
                self.scroll_row = cursor.row;
            } else if cursor.row >= self.scroll_row + self.height {
                self.scroll_row = cursor.row + 1 - self.height;
            }
        }

        if self.width > 0 {
            if cursor.col < self.scroll_col {
                self.scroll_col = cursor.col;
            } else if cursor.col >= self.scroll_col + self.width {
                self.scroll_col = cursor.col + 1 - self.width;
            }
        }

        before != (self.scroll_row, self.scroll_col)
    }

    /// A fresh line starts left-aligned
    pub fn reset_col(&mut self) {
        self.scroll_col = 0;
    }

    /// Adopt new dimensions and bring the cursor back into view
    pub fn resize(&mut self, height: usize, width: usize, cursor: Position) {
        self.height = height;
        self.width = width;
        self.clamp(cursor);
    }

    /// Whether `pos` falls inside the window
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= self.scroll_row
            && pos.row < self.scroll_row + self.height
            && pos.col >= self.scroll_col
            && pos.col < self.scroll_col + self.width
    }

    /// Translate a buffer position to window-relative (row, col)
    #[must_use]
    pub fn to_screen(&self, pos: Position) -> Option<(usize, usize)> {
        self.contains(pos)
            .then(|| (pos.row - self.scroll_row, pos.col - self.scroll_col))
    }

    #[must_use]
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    #[must_use]
    pub fn scroll_col(&self) -> usize {
        self.scroll_col
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}
