//! gapedit - a small gap-buffer terminal text editor

pub mod buffer;
pub mod command;
pub mod constants;
pub mod dispatcher;
pub mod document;
pub mod editor;
pub mod error;
pub mod file;
pub mod key;
pub mod keymap;
pub mod logging;
pub mod movement;
pub mod position;
pub mod render;
pub mod settings;
pub mod status;
pub mod term;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;
