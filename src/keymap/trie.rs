use crate::command::Command;
use std::collections::HashMap;

/// Result of looking up a token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The sequence is bound to a command
    Exact(Command),
    /// The sequence is a strict prefix of at least one binding
    Prefix,
    /// No binding starts with this sequence
    None,
}

/// A node in the chord token trie
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Children nodes mapped by token
    children: HashMap<String, TrieNode>,
    /// Command bound to the sequence ending here
    command: Option<Command>,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token sequence into the trie
    pub fn insert<S: AsRef<str>>(&mut self, tokens: &[S], command: Command) {
        let Some((first, rest)) = tokens.split_first() else {
            self.command = Some(command);
            return;
        };
        self.children
            .entry(first.as_ref().to_string())
            .or_default()
            .insert(rest, command);
    }

    /// Look up a token sequence
    ///
    /// A bound sequence is an exact match even if longer bindings extend it;
    /// chords fire as soon as they are complete.
    pub fn lookup<S: AsRef<str>>(&self, tokens: &[S]) -> MatchResult {
        let Some((first, rest)) = tokens.split_first() else {
            if let Some(command) = self.command {
                return MatchResult::Exact(command);
            }
            if !self.children.is_empty() {
                return MatchResult::Prefix;
            }
            return MatchResult::None;
        };

        match self.children.get(first.as_ref()) {
            Some(child) => child.lookup(rest),
            None => MatchResult::None,
        }
    }

    /// Number of bound sequences below this node
    pub fn len(&self) -> usize {
        usize::from(self.command.is_some())
            + self.children.values().map(TrieNode::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
