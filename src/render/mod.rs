//! Rendering
//! Turns editor state into a frame of styled spans and paints it
//!
//! ## render/ Invariants
//!
//! - Rendering reads document and status state only; it never mutates them.
//! - Every buffer byte occupies exactly one cell, so the screen cursor is
//!   always `position - scroll offset`.
//! - A full redraw is always safe.

use crate::constants::ui::PLACEHOLDER;
use crate::document::Document;
use crate::term::TerminalBackend;
use std::io;

/// How a span should be painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Text,
    Status,
}

/// A run of cells on one screen row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub row: usize,
    pub col: usize,
    pub style: Style,
    pub text: String,
}

/// Cell shown for a buffer byte
#[must_use]
pub fn display_byte(byte: u8) -> char {
    match byte {
        b'\t' => ' ',
        0x20..=0x7e => char::from(byte),
        _ => PLACEHOLDER,
    }
}

/// Iterator over the visible part of each line in the window, one text span
/// per screen row that has content
pub struct VisibleLines<I> {
    bytes: I,
    line: usize,
    exhausted: bool,
    scroll_row: usize,
    scroll_col: usize,
    height: usize,
    width: usize,
}

impl<I: Iterator<Item = u8>> VisibleLines<I> {
    pub fn new(bytes: I, scroll_row: usize, scroll_col: usize, height: usize, width: usize) -> Self {
        VisibleLines {
            bytes,
            line: 0,
            exhausted: false,
            scroll_row,
            scroll_col,
            height,
            width,
        }
    }

    /// Consume one logical line, keeping only the columns inside the window
    fn next_line(&mut self) -> String {
        let mut text = String::new();
        let mut col = 0;
        loop {
            match self.bytes.next() {
                Some(b'\n') => break,
                Some(byte) => {
                    if col >= self.scroll_col && col < self.scroll_col + self.width {
                        text.push(display_byte(byte));
                    }
                    col += 1;
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        text
    }
}

impl<I: Iterator<Item = u8>> Iterator for VisibleLines<I> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while !self.exhausted && self.line < self.scroll_row + self.height {
            let line = self.line;
            let text = self.next_line();
            self.line += 1;
            if line >= self.scroll_row {
                return Some(Span {
                    row: line - self.scroll_row,
                    col: 0,
                    style: Style::Text,
                    text,
                });
            }
        }
        None
    }
}

/// Spans for the document window
pub fn visible_spans(doc: &Document) -> VisibleLines<impl Iterator<Item = u8> + '_> {
    let viewport = doc.viewport();
    VisibleLines::new(
        doc.buffer().bytes(),
        viewport.scroll_row(),
        viewport.scroll_col(),
        viewport.height(),
        viewport.width(),
    )
}

/// Everything the terminal needs to paint one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub spans: Vec<Span>,
    /// Screen (row, col) of the cursor
    pub cursor: (u16, u16),
}

impl Frame {
    /// Build the frame for `doc` with `status_line` on the row below the window
    pub fn compose(doc: &Document, status_line: String) -> Self {
        let viewport = doc.viewport();
        let mut spans: Vec<Span> = visible_spans(doc).collect();
        spans.push(Span {
            row: viewport.height(),
            col: 0,
            style: Style::Status,
            text: status_line,
        });

        let (row, col) = viewport.to_screen(doc.position()).unwrap_or((0, 0));
        Frame {
            spans,
            cursor: (to_cell(row), to_cell(col)),
        }
    }
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Paint a frame onto the terminal
pub fn draw<T: TerminalBackend>(term: &mut T, frame: &Frame) -> io::Result<()> {
    term.hide_cursor()?;
    term.clear_screen()?;

    for span in &frame.spans {
        term.move_cursor(to_cell(span.row), to_cell(span.col))?;
        match span.style {
            Style::Text => term.write(span.text.as_bytes())?,
            Style::Status => {
                term.set_reverse(true)?;
                term.write(span.text.as_bytes())?;
                term.set_reverse(false)?;
            }
        }
    }

    term.move_cursor(frame.cursor.0, frame.cursor.1)?;
    term.show_cursor()?;
    term.flush()
}
