//! Document: the single editable buffer together with its cursor and viewport
//!
//! ## document/ Invariants
//!
//! - `position` always equals a full rescan of the text before the cursor.
//! - Every primitive that can move the cursor re-clamps the viewport before
//!   returning, including on the newline-crossing paths.
//! - A failed primitive leaves buffer, position and viewport untouched.

use crate::buffer::GapBuffer;
use crate::error::Result;
use crate::position::Position;
use crate::viewport::Viewport;

/// Buffer, cached cursor position and viewport of the editor instance
#[derive(Debug, Clone)]
pub struct Document {
    buffer: GapBuffer,
    position: Position,
    viewport: Viewport,
    /// Edited since the last load or save
    dirty: bool,
}

impl Document {
    /// Empty document for a file that does not exist yet
    #[must_use]
    pub fn new(capacity: usize, viewport: Viewport) -> Self {
        Self::with_buffer(GapBuffer::with_capacity(capacity), viewport)
    }

    /// Document over the bytes of an existing file, cursor at the start
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, viewport: Viewport) -> Self {
        Self::with_buffer(GapBuffer::from_bytes(bytes), viewport)
    }

    fn with_buffer(buffer: GapBuffer, viewport: Viewport) -> Self {
        let mut doc = Document {
            position: Position::scan(buffer.before_gap()),
            buffer,
            viewport,
            dirty: false,
        };
        doc.viewport.clamp(doc.position);
        doc
    }

    #[must_use]
    pub fn buffer(&self) -> &GapBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.position.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.position.col
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Byte right after the cursor
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.buffer.byte_after()
    }

    /// Logical content as the two ranges a save writes, in order
    #[must_use]
    pub fn save_ranges(&self) -> (&[u8], &[u8]) {
        (self.buffer.before_gap(), self.buffer.after_gap())
    }

    #[must_use]
    pub fn content(&self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Insert a byte at the cursor
    ///
    /// Returns `true` when the buffer had to grow to make room.
    pub fn insert(&mut self, byte: u8) -> bool {
        let grew = self.buffer.insert(byte);
        self.position.advance(byte);
        if byte == b'\n' {
            self.viewport.reset_col();
        }
        self.viewport.clamp(self.position);
        self.dirty = true;
        grew
    }

    pub fn delete_backward(&mut self) -> Result<u8> {
        let byte = self.buffer.delete_backward()?;
        self.retreat(byte);
        self.dirty = true;
        Ok(byte)
    }

    /// Delete the byte after the cursor; the cursor's row/col are unchanged
    pub fn delete_forward(&mut self) -> Result<u8> {
        let byte = self.buffer.delete_forward()?;
        self.viewport.clamp(self.position);
        self.dirty = true;
        Ok(byte)
    }

    pub fn move_left(&mut self) -> Result<u8> {
        let byte = self.buffer.move_left()?;
        self.retreat(byte);
        Ok(byte)
    }

    pub fn move_right(&mut self) -> Result<u8> {
        let byte = self.buffer.move_right()?;
        self.position.advance(byte);
        if byte == b'\n' {
            self.viewport.reset_col();
        }
        self.viewport.clamp(self.position);
        Ok(byte)
    }

    /// Recompute row/col from scratch
    pub fn rescan(&mut self) {
        self.position = Position::scan(self.buffer.before_gap());
    }

    /// Adopt new window dimensions without touching buffer or cursor
    pub fn resize_viewport(&mut self, height: usize, width: usize) {
        self.viewport.resize(height, width, self.position);
    }

    fn retreat(&mut self, byte: u8) {
        if !self.position.retreat(byte) {
            self.rescan();
            self.viewport.reset_col();
        }
        self.viewport.clamp(self.position);
    }
}
