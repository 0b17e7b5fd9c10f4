//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations
//!
//! ## term/ Invariants
//!
//! - Terminal handling is isolated behind a strict abstraction boundary.
//! - Raw mode is enabled before input processing begins.
//! - Terminal state is restored on normal exit and on panic.
//! - Terminal code never depends on editor internals.

use crate::key::Key;
use std::io;
use std::time::Duration;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> io::Result<()>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Wait at most `timeout` for input; true if a key can be read
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read one key without blocking; `None` if the event carried no key
    fn read_key(&mut self) -> io::Result<Option<Key>>;

    /// Get terminal dimensions
    fn size(&self) -> io::Result<Size>;

    /// Queue raw bytes for output
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Clear entire screen
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Move cursor to specified position (0-indexed)
    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()>;

    /// Switch reverse video on or off
    fn set_reverse(&mut self, on: bool) -> io::Result<()>;

    fn hide_cursor(&mut self) -> io::Result<()>;

    fn show_cursor(&mut self) -> io::Result<()>;

    /// Push everything queued to the terminal
    fn flush(&mut self) -> io::Result<()>;
}

pub mod crossterm;
