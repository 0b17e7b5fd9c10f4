//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
};
use std::collections::VecDeque;
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;

use crate::key::Key;
use crate::term::{Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    out: Stdout,
    /// Keys decoded from one event but not yet handed out (multi-byte chars)
    pending: VecDeque<Key>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        CrosstermBackend {
            out: stdout(),
            pending: VecDeque::new(),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::EnterAlternateScreen)?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode()?;
        self.raw_mode_enabled = true;

        execute!(self.out, cursor::Hide)?;
        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(self.out, SetAttribute(Attribute::Reset), cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(self.out, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.pending.is_empty() {
            return Ok(true);
        }
        event::poll(timeout)
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        if let Some(key) = self.pending.pop_front() {
            return Ok(Some(key));
        }
        self.pending.extend(translate_event(event::read()?));
        Ok(self.pending.pop_front())
    }

    fn size(&self) -> io::Result<Size> {
        let (cols, rows) = terminal::size()?;
        Ok(Size { rows, cols })
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))
    }

    fn set_reverse(&mut self, on: bool) -> io::Result<()> {
        let attribute = if on {
            Attribute::Reverse
        } else {
            Attribute::NoReverse
        };
        queue!(self.out, SetAttribute(attribute))
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Translate a crossterm event into zero or more keys
pub(crate) fn translate_event(event: Event) -> Vec<Key> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            translate_key_event(key_event)
        }
        Event::Resize(cols, rows) => vec![Key::Resize(cols, rows)],
        _ => Vec::new(),
    }
}

/// Translate a crossterm `KeyEvent` to raw-byte keys
///
/// Non-ASCII characters expand to their UTF-8 bytes since the buffer is
/// byte-oriented.
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Vec<Key> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) if ctrl && has_control_byte(ch) => vec![Key::ctrl(ch as u8)],
        KeyCode::Char(ch) => {
            let mut utf8 = [0; 4];
            ch.encode_utf8(&mut utf8)
                .bytes()
                .map(Key::from_byte)
                .collect()
        }
        KeyCode::Enter => vec![Key::Byte(b'\n')],
        KeyCode::Tab => vec![Key::Byte(b'\t')],
        KeyCode::Esc => vec![Key::Byte(0x1b)],
        KeyCode::Backspace => vec![Key::Backspace],
        KeyCode::Up => vec![Key::Up],
        KeyCode::Down => vec![Key::Down],
        KeyCode::Left => vec![Key::Left],
        KeyCode::Right => vec![Key::Right],
        _ => Vec::new(),
    }
}

/// Characters that have a control-byte form: letters, `@[\]^_` and space
fn has_control_byte(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '@' | '[' | '\\' | ']' | '^' | '_' | ' ')
}
