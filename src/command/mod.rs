//! Editor commands
//! Everything the dispatcher can ask the editor to do, as plain data

use crate::key::Key;

/// Editor commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Direct edits
    Insert(u8),
    DeleteBackward,
    DeleteForward,

    // Movement
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    WordForward,
    WordBackward,
    PageUp,
    PageDown,

    // Line / word editing
    KillLine,
    KillWord,

    // Control
    Save,
    Quit,
}

impl Command {
    /// Command for a key that edits directly without going through the
    /// command table
    #[must_use]
    pub fn direct(key: Key) -> Option<Self> {
        match key {
            Key::Byte(byte) if !key.is_control() => Some(Command::Insert(byte)),
            Key::Up => Some(Command::CursorUp),
            Key::Down => Some(Command::CursorDown),
            Key::Left => Some(Command::CursorLeft),
            Key::Right => Some(Command::CursorRight),
            Key::Backspace => Some(Command::DeleteBackward),
            Key::Byte(_) | Key::Resize(..) => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::DeleteBackward => "delete-backward",
            Command::DeleteForward => "delete-forward",
            Command::CursorLeft => "cursor-left",
            Command::CursorRight => "cursor-right",
            Command::CursorUp => "cursor-up",
            Command::CursorDown => "cursor-down",
            Command::WordForward => "word-forward",
            Command::WordBackward => "word-backward",
            Command::PageUp => "page-up",
            Command::PageDown => "page-down",
            Command::KillLine => "kill-line",
            Command::KillWord => "kill-word",
            Command::Save => "save",
            Command::Quit => "quit",
        }
    }
}
