use smiley_core::InternalError;

use crate::ParseTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    pub state: usize,
    pub tree: Option<ParseTree>,
}

/// The parser's stack of automaton states and partially built subtrees
///
/// The bottom entry is the start state sentinel `(0, None)`. It is pushed on creation and can
/// never be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStack {
    entries: Vec<StackEntry>,
}

impl Default for ParseStack {
    fn default() -> Self {
        ParseStack::new()
    }
}

impl ParseStack {
    pub fn new() -> Self {
        ParseStack {
            entries: vec![StackEntry {
                state: 0,
                tree: None,
            }],
        }
    }

    pub fn push(&mut self, state: usize, tree: Option<ParseTree>) {
        self.entries.push(StackEntry { state, tree });
    }

    pub fn pop(&mut self) -> Result<StackEntry, InternalError> {
        let underflow = InternalError::StackUnderflow {
            needed: 1,
            available: 0,
        };
        if self.depth() == 0 {
            return Err(underflow);
        }
        self.entries.pop().ok_or(underflow)
    }

    /// Pop the topmost `count` entries and hand out their subtrees left to right
    ///
    /// Nothing is popped if fewer than `count` entries sit above the sentinel.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<ParseTree>, InternalError> {
        let available = self.depth();
        if count > available {
            return Err(InternalError::StackUnderflow {
                needed: count,
                available,
            });
        }
        let start = self.entries.len() - count;
        self.entries
            .drain(start..)
            .map(|entry| {
                entry
                    .tree
                    .ok_or(InternalError::MissingSubtree { state: entry.state })
            })
            .collect()
    }

    pub fn top_state(&self) -> usize {
        self.entries.last().map_or(0, |entry| entry.state)
    }

    /// Number of entries above the sentinel
    pub fn depth(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Move the finished tree out of the single entry above the sentinel
    ///
    /// The entry itself stays on the stack with an empty tree slot.
    pub fn take_result(&mut self) -> Result<ParseTree, InternalError> {
        if self.depth() != 1 {
            return Err(InternalError::MalformedAccept {
                entries: self.depth(),
            });
        }
        let entry = &mut self.entries[1];
        entry
            .tree
            .take()
            .ok_or(InternalError::MissingSubtree { state: entry.state })
    }
}
