//! Word and line operations composed from the document primitives
//!
//! Every operation here is a loop over `move_left`, `move_right` and
//! `delete_forward`; none touches the gap directly. The first failing
//! primitive aborts the operation with its error and whatever already
//! happened stays applied.
//!
//! ## Modules
//!
//! - [`classify`] - Whitespace classification

pub mod classify;

use crate::document::Document;
use crate::error::{EditError, Result};

pub use classify::{is_whitespace, is_word_byte};

/// Delete from the cursor up to (not including) the next newline, or the
/// newline itself when the cursor already sits before one
pub fn kill_line(doc: &mut Document) -> Result<()> {
    if doc.peek() == Some(b'\n') {
        doc.delete_forward()?;
        return Ok(());
    }
    while doc.peek() != Some(b'\n') {
        doc.delete_forward()?;
    }
    Ok(())
}

/// Delete any whitespace after the cursor, then the word that follows
pub fn kill_word(doc: &mut Document) -> Result<()> {
    if doc.peek().is_none() {
        return Err(EditError::AtBufferEnd);
    }
    while doc.peek().is_some_and(is_whitespace) {
        doc.delete_forward()?;
    }
    while doc.peek().is_some_and(is_word_byte) {
        doc.delete_forward()?;
    }
    Ok(())
}

/// Move right until the byte just crossed is whitespace
pub fn word_forward(doc: &mut Document) -> Result<()> {
    while !is_whitespace(doc.move_right()?) {}
    Ok(())
}

/// Move left until the byte just crossed is whitespace
pub fn word_backward(doc: &mut Document) -> Result<()> {
    while !is_whitespace(doc.move_left()?) {}
    Ok(())
}

/// Move to the same column on the previous line, or to the end of that
/// line if it is shorter
pub fn cursor_up(doc: &mut Document) -> Result<()> {
    let dest_col = doc.col();
    // On the first line there is no row to reach; walking left ends at the
    // buffer start with AtBufferStart.
    let dest_row = doc.row().checked_sub(1);

    while dest_row.map_or(true, |row| doc.row() > row) {
        doc.move_left()?;
    }

    while doc.col() > dest_col {
        doc.move_left()?;
        if Some(doc.row()) != dest_row {
            doc.move_right()?;
            return Ok(());
        }
    }
    Ok(())
}

/// Move to the same column on the next line, or to the end of that line if
/// it is shorter
pub fn cursor_down(doc: &mut Document) -> Result<()> {
    let dest_col = doc.col();
    let dest_row = doc.row() + 1;

    while doc.row() < dest_row {
        doc.move_right()?;
    }

    while doc.col() < dest_col {
        doc.move_right()?;
        // Ran past the end of a shorter line
        if doc.row() != dest_row {
            doc.move_left()?;
            return Ok(());
        }
    }
    Ok(())
}

/// Scroll back by two window heights
pub fn page_up(doc: &mut Document) -> Result<()> {
    let height = doc.viewport().height();
    repeat(doc, 2 * height, cursor_up)
}

/// Scroll forward one page: overshoot by two window heights, then unwind one
pub fn page_down(doc: &mut Document) -> Result<()> {
    let height = doc.viewport().height();
    repeat(doc, 2 * height, cursor_down)?;
    repeat(doc, height, cursor_up)
}

fn repeat(doc: &mut Document, times: usize, step: fn(&mut Document) -> Result<()>) -> Result<()> {
    for _ in 0..times {
        step(doc)?;
    }
    Ok(())
}
