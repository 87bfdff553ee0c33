use lazy_static::lazy_static;

use crate::lalr::table_data::STATE_ROWS;
use crate::{Action, Nonterminal, ProductionRule, State, StateRow, Terminal, RULES};

lazy_static! {
    /// The parse table of the language, built once and shared by every parser session
    pub static ref GRAMMAR_TABLE: ParseTable = ParseTable::smiley();
}

#[derive(Debug)]
pub struct ParseTable {
    pub rules: &'static [ProductionRule],
    pub states: Vec<State>,
}

impl ParseTable {
    /// Assemble a parse table from static rule and state data
    pub fn from_rows(rules: &'static [ProductionRule], rows: &[StateRow]) -> Self {
        ParseTable {
            rules,
            states: rows.iter().map(State::from).collect(),
        }
    }

    /// The parse table of the `prog … :)` language
    pub fn smiley() -> Self {
        ParseTable::from_rows(&RULES, &STATE_ROWS)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn production_rule(&self, rule_idx: usize) -> Option<&ProductionRule> {
        self.rules.get(rule_idx)
    }

    /// Look up `Action[state, terminal]`
    ///
    /// Every pair without an entry, including states outside the table, is an `Error`.
    pub fn action(&self, state: usize, terminal: Terminal) -> Action {
        self.states
            .get(state)
            .and_then(|s| s.action_map.get(&terminal))
            .cloned()
            .unwrap_or_default()
    }

    pub fn goto(&self, state: usize, nonterminal: Nonterminal) -> Option<usize> {
        self.states
            .get(state)
            .and_then(|s| s.goto_map.get(&nonterminal))
            .cloned()
    }

    /// Terminals with a defined action in `state`, in column order
    pub fn expected_terminals(&self, state: usize) -> Vec<Terminal> {
        Terminal::ALL
            .iter()
            .cloned()
            .filter(|t| self.action(state, *t) != Action::Error)
            .collect()
    }
}
