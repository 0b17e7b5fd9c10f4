//! Gap buffer implementation for efficient text editing
//!
//! ## buffer/ Invariants
//!
//! - `0 <= gap_start <= gap_end <= capacity` at all times.
//! - Logical content is `storage[..gap_start]` followed by `storage[gap_end..]`.
//! - Bytes inside the gap are dead and never read as content.
//! - The cursor is `gap_start`; only `move_left`/`move_right` relocate the gap.

use crate::error::{EditError, Result};

/// Gap buffer holding raw bytes
///
/// Layout: `[before_gap][gap][after_gap]`
#[derive(Debug, Clone)]
pub struct GapBuffer {
    storage: Vec<u8>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    /// Create an empty buffer whose whole capacity is gap
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        GapBuffer {
            storage: vec![0; capacity],
            gap_start: 0,
            gap_end: capacity,
        }
    }

    /// Wrap loaded file bytes with a zero-length gap at offset 0
    ///
    /// The cursor starts at the beginning of the content and the first
    /// insert grows the storage.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        GapBuffer {
            storage: bytes,
            gap_start: 0,
            gap_end: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn gap_start(&self) -> usize {
        self.gap_start
    }

    #[must_use]
    pub fn gap_end(&self) -> usize {
        self.gap_end
    }

    /// Logical cursor offset (same as `gap_start`)
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    #[must_use]
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Length of the logical content
    #[must_use]
    pub fn len(&self) -> usize {
        self.capacity() - self.gap_len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content before the cursor
    #[must_use]
    pub fn before_gap(&self) -> &[u8] {
        &self.storage[..self.gap_start]
    }

    /// Content after the cursor
    #[must_use]
    pub fn after_gap(&self) -> &[u8] {
        &self.storage[self.gap_end..]
    }

    /// Byte immediately before the cursor
    #[must_use]
    pub fn byte_before(&self) -> Option<u8> {
        self.before_gap().last().copied()
    }

    /// Byte immediately after the cursor
    #[must_use]
    pub fn byte_after(&self) -> Option<u8> {
        self.after_gap().first().copied()
    }

    /// Iterate over the logical content, skipping the gap
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.before_gap()
            .iter()
            .chain(self.after_gap().iter())
            .copied()
    }

    /// Copy the logical content out
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.before_gap());
        out.extend_from_slice(self.after_gap());
        out
    }

    /// Insert a byte at the cursor
    ///
    /// Returns `true` when the storage had to grow first.
    pub fn insert(&mut self, byte: u8) -> bool {
        let grew = self.gap_start == self.gap_end;
        if grew {
            self.grow();
        }
        self.storage[self.gap_start] = byte;
        self.gap_start += 1;
        grew
    }

    /// Remove the byte before the cursor and return it
    pub fn delete_backward(&mut self) -> Result<u8> {
        if self.gap_start == 0 {
            return Err(EditError::AtBufferStart);
        }
        self.gap_start -= 1;
        Ok(self.storage[self.gap_start])
    }

    /// Remove the byte after the cursor and return it
    pub fn delete_forward(&mut self) -> Result<u8> {
        if self.gap_end == self.capacity() {
            return Err(EditError::AtBufferEnd);
        }
        let byte = self.storage[self.gap_end];
        self.gap_end += 1;
        Ok(byte)
    }

    /// Shift the gap one byte left and return the byte that crossed it
    pub fn move_left(&mut self) -> Result<u8> {
        if self.gap_start == 0 {
            return Err(EditError::AtBufferStart);
        }
        let byte = self.storage[self.gap_start - 1];
        self.storage[self.gap_end - 1] = byte;
        self.gap_start -= 1;
        self.gap_end -= 1;
        Ok(byte)
    }

    /// Shift the gap one byte right and return the byte that crossed it
    pub fn move_right(&mut self) -> Result<u8> {
        if self.gap_end == self.capacity() {
            return Err(EditError::AtBufferEnd);
        }
        let byte = self.storage[self.gap_end];
        self.storage[self.gap_start] = byte;
        self.gap_start += 1;
        self.gap_end += 1;
        Ok(byte)
    }

    /// Enlarge the storage by half (at least one byte), keeping content
    /// order and widening the gap
    pub fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = (old_capacity + old_capacity / 2).max(old_capacity + 1);
        let after_len = old_capacity - self.gap_end;

        let mut storage = vec![0; new_capacity];
        storage[..self.gap_start].copy_from_slice(&self.storage[..self.gap_start]);
        storage[new_capacity - after_len..].copy_from_slice(&self.storage[self.gap_end..]);

        self.storage = storage;
        self.gap_end = new_capacity - after_len;
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::with_capacity(crate::constants::buffer::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
