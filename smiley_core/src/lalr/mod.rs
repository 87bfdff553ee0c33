mod symbol;
pub use self::symbol::{Nonterminal, Symbol, Terminal};

mod rule;
pub use self::rule::{ProductionRule, RULES};

mod action;
pub use self::action::Action;

mod state;
pub use self::state::{State, StateRow};

mod parse_table;
pub use self::parse_table::{ParseTable, GRAMMAR_TABLE};

mod table_data;
