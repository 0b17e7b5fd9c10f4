//! Key representation for editor input

/// A single key event delivered by the terminal collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Raw byte, including control bytes (Ctrl+X arrives as 0x18)
    Byte(u8),
    /// Arrow keys
    Up,
    Down,
    Left,
    Right,
    Backspace,
    /// Terminal resized to (cols, rows)
    Resize(u16, u16),
}

impl Key {
    /// Normalise a raw byte: carriage return becomes newline, DEL becomes
    /// Backspace
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\r' => Key::Byte(b'\n'),
            0x7f => Key::Backspace,
            _ => Key::Byte(byte),
        }
    }

    /// Control key, i.e. a byte below 32 that does not produce text
    ///
    /// Newline and tab are ordinal control bytes but insert text, so they are
    /// ordinary keys here.
    #[must_use]
    pub fn is_control(self) -> bool {
        match self {
            Key::Byte(b'\n' | b'\t') => false,
            Key::Byte(byte) => byte < 32,
            _ => false,
        }
    }

    /// Textual token used in chord strings: `C-x`, `s`, `<up>`
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Key::Byte(byte) if self.is_control() => {
                format!("C-{}", char::from(byte | 0x40).to_ascii_lowercase())
            }
            Key::Byte(b'\n') => "<ret>".to_string(),
            Key::Byte(b'\t') => "<tab>".to_string(),
            Key::Byte(b' ') => "<spc>".to_string(),
            Key::Byte(byte) => char::from(byte).to_ascii_lowercase().to_string(),
            Key::Up => "<up>".to_string(),
            Key::Down => "<down>".to_string(),
            Key::Left => "<left>".to_string(),
            Key::Right => "<right>".to_string(),
            Key::Backspace => "<bs>".to_string(),
            Key::Resize(..) => "<resize>".to_string(),
        }
    }

    /// Control byte for `letter`, e.g. `ctrl(b'x') == Key::Byte(0x18)`
    #[must_use]
    pub fn ctrl(letter: u8) -> Self {
        Key::Byte(letter.to_ascii_lowercase() & 0x1f)
    }
}
