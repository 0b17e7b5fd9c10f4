//! Test utilities
//! Shared testing helpers and mocks

use crate::key::Key;
use crate::term::{Size, TerminalBackend};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Mock terminal backend for testing
/// Replays scripted keys and records all output operations
pub struct MockTerminal {
    pub keys: VecDeque<Key>,
    pub writes: Vec<Vec<u8>>,
    pub cursor_moves: Vec<(u16, u16)>,
    pub clear_screen_calls: usize,
    pub flushes: usize,
    pub reverse: bool,
    pub initialized: bool,
    pub size: (u16, u16),
    /// Polls that report no input before queued keys are handed out
    pub idle_ticks: usize,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            keys: VecDeque::new(),
            writes: Vec::new(),
            cursor_moves: Vec::new(),
            clear_screen_calls: 0,
            flushes: 0,
            reverse: false,
            initialized: false,
            size: (rows, cols),
            idle_ticks: 0,
        }
    }

    /// Queue keys to be read by the editor
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue every byte of `text` as a key
    pub fn type_text(&mut self, text: &str) {
        self.keys.extend(text.bytes().map(Key::from_byte));
    }

    /// Get all written bytes as a single vector
    pub fn get_written_bytes(&self) -> Vec<u8> {
        self.writes.iter().flatten().copied().collect()
    }

    /// Get all written bytes as a string (lossy UTF-8 conversion)
    pub fn get_written_string(&self) -> String {
        String::from_utf8_lossy(&self.get_written_bytes()).to_string()
    }

    /// Clear all recorded operations (useful for testing multiple renders)
    pub fn clear(&mut self) {
        self.writes.clear();
        self.cursor_moves.clear();
        self.clear_screen_calls = 0;
        self.flushes = 0;
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> io::Result<()> {
        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) {
        self.initialized = false;
    }

    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        if self.idle_ticks > 0 {
            self.idle_ticks -= 1;
            return Ok(false);
        }
        Ok(!self.keys.is_empty())
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }

    fn size(&self) -> io::Result<Size> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clear_screen_calls += 1;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.cursor_moves.push((row, col));
        Ok(())
    }

    fn set_reverse(&mut self, on: bool) -> io::Result<()> {
        self.reverse = on;
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
