//! Byte classification for word operations

/// Whitespace for word motions: space, tab, vertical tab, carriage return,
/// newline
#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0b | b'\r' | b'\n')
}

/// Check if a byte is part of a word (not whitespace)
#[must_use]
pub fn is_word_byte(byte: u8) -> bool {
    !is_whitespace(byte)
}
