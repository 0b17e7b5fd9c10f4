//! Chord dispatcher
//!
//! ## dispatcher/ Invariants
//!
//! - In `Idle`, ordinary keys become direct edits and never touch the table.
//! - A control key in `Idle` starts a chord; every key in `Pending` extends it.
//! - After each append the chord is matched exactly against the command table.
//! - Every outcome except "still a prefix" returns the dispatcher to `Idle`.
//! - The token buffer is bounded; overflowing it resets to `Idle`.

use crate::command::Command;
use crate::constants::input::{CANCEL_TOKEN, MAX_CHORD_TOKENS};
use crate::key::Key;
use crate::keymap::{KeyMap, MatchResult};

/// Where the dispatcher is in a multi-key sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChordState {
    #[default]
    Idle,
    /// Tokens recorded so far
    Pending(Vec<String>),
}

/// What a single key event resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run this command
    Execute(Command),
    /// The chord so far is a prefix of some binding
    Pending(String),
    /// The sequence matches nothing
    Undefined(String),
    /// The cancel key abandoned the sequence
    Cancelled,
    /// The key has no meaning on its own
    Ignored,
}

/// Key-chord state machine
#[derive(Debug, Default)]
pub struct Dispatcher {
    state: ChordState,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ChordState {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ChordState::Pending(_))
    }

    /// Chord typed so far, if any
    #[must_use]
    pub fn pending_chord(&self) -> Option<String> {
        match &self.state {
            ChordState::Pending(tokens) => Some(tokens.join(" ")),
            ChordState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = ChordState::Idle;
    }

    /// Feed one key event through the state machine
    pub fn feed(&mut self, key: Key, keymap: &KeyMap) -> Dispatch {
        let token = key.token();
        if token == CANCEL_TOKEN {
            tracing::debug!(chord = ?self.pending_chord(), "chord cancelled");
            self.reset();
            return Dispatch::Cancelled;
        }

        let mut tokens = match std::mem::take(&mut self.state) {
            ChordState::Idle if !key.is_control() => {
                return Command::direct(key).map_or(Dispatch::Ignored, Dispatch::Execute);
            }
            ChordState::Idle => Vec::new(),
            ChordState::Pending(tokens) => tokens,
        };

        if tokens.len() >= MAX_CHORD_TOKENS {
            tokens.push(token);
            let chord = tokens.join(" ");
            tracing::warn!(%chord, "chord overflow");
            return Dispatch::Undefined(chord);
        }
        tokens.push(token);

        match keymap.lookup(&tokens) {
            MatchResult::Exact(command) => {
                tracing::debug!(chord = %tokens.join(" "), command = command.name(), "chord matched");
                Dispatch::Execute(command)
            }
            MatchResult::Prefix => {
                let chord = tokens.join(" ");
                self.state = ChordState::Pending(tokens);
                Dispatch::Pending(chord)
            }
            MatchResult::None => Dispatch::Undefined(tokens.join(" ")),
        }
    }
}
