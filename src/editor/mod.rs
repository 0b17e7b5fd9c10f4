//! Editor core
//! Ties the document, dispatcher, status line and terminal together

use crate::command::Command;
use crate::constants::{messages, ui::STATUS_ROWS};
use crate::dispatcher::{Dispatch, Dispatcher};
use crate::document::Document;
use crate::error::{EditError, ErrorSeverity, Result};
use crate::file;
use crate::key::Key;
use crate::keymap::KeyMap;
use crate::movement;
use crate::render::{self, Frame};
use crate::settings::Settings;
use crate::status::StatusLine;
use crate::term::TerminalBackend;
use crate::viewport::Viewport;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    document: Document,
    dispatcher: Dispatcher,
    keymap: KeyMap,
    status: StatusLine,
    settings: Settings,
    path: PathBuf,
    should_quit: bool,
    /// Set by anything that changes what is on screen
    needs_redraw: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Load `path` (a missing file starts empty) and take over the terminal
    ///
    /// The file is read before the terminal is touched, so a failed load
    /// leaves the terminal as it was.
    pub fn open(mut terminal: T, settings: Settings, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let loaded = file::load(&path)?;

        terminal.init()?;
        let size = match terminal.size() {
            Ok(size) => size,
            Err(err) => {
                terminal.deinit();
                return Err(err.into());
            }
        };
        let viewport = Viewport::new(
            usize::from(size.rows).saturating_sub(STATUS_ROWS),
            usize::from(size.cols),
        );

        let mut status = StatusLine::new();
        let document = match loaded {
            Some(bytes) => {
                status.set(format!("loaded {}", path.display()));
                Document::from_bytes(bytes, viewport)
            }
            None => {
                status.set(format!("opened new file {}", path.display()));
                Document::new(settings.default_capacity, viewport)
            }
        };
        info!(
            path = %path.display(),
            rows = size.rows,
            cols = size.cols,
            "editor started"
        );

        Ok(Editor {
            term: terminal,
            document,
            dispatcher: Dispatcher::new(),
            keymap: KeyMap::default(),
            status,
            settings,
            path,
            should_quit: false,
            needs_redraw: true,
        })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Run the main loop until a quit command
    ///
    /// Idle poll ticks do not repaint.
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.term.poll(self.settings.poll_interval)? {
                if let Some(key) = self.term.read_key()? {
                    self.handle_key(key);
                }
            }
            if self.needs_redraw {
                self.render()?;
            }
        }
        info!("editor quit");
        Ok(())
    }

    /// Process one key event; failures end up on the status line
    pub fn handle_key(&mut self, key: Key) {
        self.status.clear();
        self.needs_redraw = true;

        if let Key::Resize(cols, rows) = key {
            let height = usize::from(rows).saturating_sub(STATUS_ROWS);
            debug!(rows, cols, "resize");
            self.document.resize_viewport(height, usize::from(cols));
            return;
        }

        match self.dispatcher.feed(key, &self.keymap) {
            Dispatch::Execute(command) => {
                if let Err(err) = self.execute(command) {
                    self.report(&err);
                }
            }
            Dispatch::Pending(chord) => self.status.set(format!("{chord} -")),
            Dispatch::Undefined(chord) => self.report(&EditError::UndefinedChord(chord)),
            Dispatch::Cancelled => self.status.set(messages::CANCELLED),
            Dispatch::Ignored => {}
        }
    }

    /// Apply a resolved command to the document
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let doc = &mut self.document;
        match command {
            Command::Insert(byte) => {
                if doc.insert(byte) {
                    debug!(capacity = doc.buffer().capacity(), "buffer grew");
                    self.status.set(messages::EXPANDED);
                }
            }
            Command::DeleteBackward => {
                doc.delete_backward()?;
            }
            Command::DeleteForward => {
                doc.delete_forward()?;
            }
            Command::CursorLeft => {
                doc.move_left()?;
            }
            Command::CursorRight => {
                doc.move_right()?;
            }
            Command::CursorUp => movement::cursor_up(doc)?,
            Command::CursorDown => movement::cursor_down(doc)?,
            Command::WordForward => movement::word_forward(doc)?,
            Command::WordBackward => movement::word_backward(doc)?,
            Command::PageUp => movement::page_up(doc)?,
            Command::PageDown => movement::page_down(doc)?,
            Command::KillLine => movement::kill_line(doc)?,
            Command::KillWord => movement::kill_word(doc)?,
            Command::Save => self.save()?,
            Command::Quit => self.should_quit = true,
        }
        Ok(())
    }

    /// Write the buffer back to its file
    pub fn save(&mut self) -> Result<()> {
        let (before, after) = self.document.save_ranges();
        file::save(&self.path, before, after)?;
        self.document.mark_saved();
        self.status.set(messages::SAVED);
        Ok(())
    }

    /// Paint the current state onto the terminal
    pub fn render(&mut self) -> Result<()> {
        let width = self.document.viewport().width();
        let status_line = self.status.format(
            &self.path.display().to_string(),
            self.document.is_dirty(),
            self.document.position(),
            width,
        );
        let frame = Frame::compose(&self.document, status_line);
        render::draw(&mut self.term, &frame)?;
        self.needs_redraw = false;
        Ok(())
    }

    fn report(&mut self, err: &EditError) {
        match err.severity() {
            ErrorSeverity::Info => debug!(%err, "boundary"),
            ErrorSeverity::Warning => warn!(%err),
            ErrorSeverity::Error | ErrorSeverity::Critical => error!(%err),
        }
        self.status.set(err.to_string());
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
