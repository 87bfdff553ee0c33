use std::collections::HashMap;

use crate::{Action, Nonterminal, Terminal};

#[derive(Debug)]
pub struct State {
    pub action_map: HashMap<Terminal, Action>,
    pub goto_map: HashMap<Nonterminal, usize>,
}

/// Static description of one automaton state
///
/// Only the defined entries are listed; everything else is an error (actions) or absent (gotos).
#[derive(Debug, Clone, Copy)]
pub struct StateRow {
    pub actions: &'static [(Terminal, Action)],
    pub gotos: &'static [(Nonterminal, usize)],
}

impl From<&StateRow> for State {
    fn from(row: &StateRow) -> Self {
        State {
            action_map: row.actions.iter().cloned().collect(),
            goto_map: row.gotos.iter().cloned().collect(),
        }
    }
}
