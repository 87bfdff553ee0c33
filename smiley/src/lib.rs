#[macro_use]
pub mod extra;
mod parser;
mod stack;
mod tree;

pub use smiley_core::*;

pub use crate::parser::{parse, parse_reporting, ParserSession, Step};
pub use crate::stack::{ParseStack, StackEntry};
pub use crate::tree::ParseTree;

#[cfg(feature = "logos_support")]
pub use crate::extra::Lexer;

/// Lex and parse a complete program
#[cfg(feature = "logos_support")]
pub fn parse_str(source: &str) -> Result<ParseTree, ParseError> {
    parse(Lexer::new(source))
}
