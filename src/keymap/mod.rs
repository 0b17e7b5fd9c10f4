//! Command table
//! Maps chord strings such as `"C-x s"` to commands. Built once at startup
//! and never modified afterwards.

pub mod defaults;
pub mod trie;

pub use self::defaults::DEFAULT_BINDINGS;
pub use self::trie::{MatchResult, TrieNode};
use crate::command::Command;

/// Chord table stored as a trie over space-separated tokens
#[derive(Debug, Clone)]
pub struct KeyMap {
    root: TrieNode,
}

impl KeyMap {
    /// Build a keymap from `(chord, command)` pairs
    pub fn from_table(table: &[(&str, Command)]) -> Self {
        let mut root = TrieNode::new();
        for &(chord, command) in table {
            let tokens: Vec<&str> = chord.split_whitespace().collect();
            root.insert(&tokens, command);
        }
        Self { root }
    }

    /// Look up the tokens typed so far
    pub fn lookup<S: AsRef<str>>(&self, tokens: &[S]) -> MatchResult {
        if tokens.is_empty() {
            return MatchResult::None;
        }
        self.root.lookup(tokens)
    }

    /// Number of bound chords
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_table(DEFAULT_BINDINGS)
    }
}
