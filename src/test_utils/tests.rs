//! Tests for test utilities
//! These tests verify that MockTerminal works correctly

use crate::key::Key;
use crate::term::TerminalBackend;
use crate::test_utils::MockTerminal;
use std::time::Duration;

#[test]
fn test_mock_terminal_new() {
    let term = MockTerminal::new(10, 80);
    assert_eq!(term.size, (10, 80));
    assert!(term.writes.is_empty());
    assert!(term.cursor_moves.is_empty());
    assert_eq!(term.clear_screen_calls, 0);
}

#[test]
fn test_mock_terminal_write() {
    let mut term = MockTerminal::new(10, 80);
    term.write(b"hello").unwrap();
    term.write(b" world").unwrap();

    assert_eq!(term.writes.len(), 2);
    assert_eq!(term.get_written_string(), "hello world");

    term.clear();
    assert!(term.get_written_bytes().is_empty());
}

#[test]
fn test_mock_terminal_replays_keys() {
    let mut term = MockTerminal::new(10, 80).with_keys([Key::Up]);
    term.type_text("a\r");

    assert!(term.poll(Duration::ZERO).unwrap());
    assert_eq!(term.read_key().unwrap(), Some(Key::Up));
    assert_eq!(term.read_key().unwrap(), Some(Key::Byte(b'a')));
    assert_eq!(term.read_key().unwrap(), Some(Key::Byte(b'\n')));
    assert!(!term.poll(Duration::ZERO).unwrap());
    assert_eq!(term.read_key().unwrap(), None);
}

#[test]
fn test_mock_terminal_idle_ticks() {
    let mut term = MockTerminal::new(10, 80).with_keys([Key::Up]);
    term.idle_ticks = 2;

    assert!(!term.poll(Duration::ZERO).unwrap());
    assert!(!term.poll(Duration::ZERO).unwrap());
    assert!(term.poll(Duration::ZERO).unwrap());
}
