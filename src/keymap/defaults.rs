//! Default chord bindings

use crate::command::Command;

/// The command table: exact chord strings to commands
pub const DEFAULT_BINDINGS: &[(&str, Command)] = &[
    ("C-x s", Command::Save),
    ("C-x C-s", Command::Save),
    ("C-x c", Command::Quit),
    ("C-x C-c", Command::Quit),
    ("C-c", Command::Quit),
    ("C-k", Command::KillLine),
    ("C-x d", Command::KillWord),
    ("C-x f", Command::WordForward),
    ("C-x b", Command::WordBackward),
    ("C-v", Command::PageDown),
    ("C-x v", Command::PageUp),
    ("C-p", Command::CursorUp),
    ("C-n", Command::CursorDown),
    ("C-b", Command::CursorLeft),
    ("C-f", Command::CursorRight),
    ("C-d", Command::DeleteForward),
];
