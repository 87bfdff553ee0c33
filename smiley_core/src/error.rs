use std::error::Error;
use std::fmt;

use crate::{Nonterminal, Terminal, Token};

/// Category handed to an `ErrorSink` alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Lexer,
    Parser,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ErrorCategory::Lexer => write!(f, "Lexer"),
            ErrorCategory::Parser => write!(f, "Parser"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

/// Inconsistency between the parse table and the parser state
///
/// None of these can be caused by user input on a well-formed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    StackUnderflow { needed: usize, available: usize },
    MissingSubtree { state: usize },
    MissingGoto { state: usize, nonterminal: Nonterminal },
    UnknownRule { rule: usize },
    MalformedAccept { entries: usize },
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            InternalError::StackUnderflow { needed, available } => write!(
                f,
                "stack underflow: reduction needs {} entries, {} available",
                needed, available
            ),
            InternalError::MissingSubtree { state } => {
                write!(f, "stack entry for state {} holds no subtree", state)
            }
            InternalError::MissingGoto { state, nonterminal } => {
                write!(f, "no goto entry for state {} and {}", state, nonterminal)
            }
            InternalError::UnknownRule { rule } => write!(f, "unknown production rule {}", rule),
            InternalError::MalformedAccept { entries } => write!(
                f,
                "accept with {} entries above the start entry, expected 1",
                entries
            ),
        }
    }
}

impl Error for InternalError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lookahead token has no action in the current state
    Unexpected {
        token: Token,
        expected: Vec<Terminal>,
    },
    Internal(InternalError),
    /// The session already accepted or failed
    Finished,
}

impl ParseError {
    /// Source line of the offending token
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Unexpected { token, .. } => Some(token.line),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseError::Unexpected { .. } => ErrorCategory::Parser,
            ParseError::Internal(_) | ParseError::Finished => ErrorCategory::Internal,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParseError::Unexpected { token, expected } if expected.is_empty() => {
                format!("Unexpected token {}", token)
            }
            ParseError::Unexpected { token, expected } => {
                let expected: Vec<String> = expected.iter().map(|t| t.to_string()).collect();
                format!(
                    "Unexpected token {}, expected one of: {}",
                    token,
                    expected.join(", ")
                )
            }
            ParseError::Internal(err) => format!("Internal error: {}", err),
            ParseError::Finished => "parse session already finished".to_owned(),
        }
    }
}

impl From<InternalError> for ParseError {
    fn from(err: InternalError) -> Self {
        ParseError::Internal(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.line() {
            Some(line) => write!(f, "Parse error on line {}: {}", line, self.message()),
            None => write!(f, "Parse error: {}", self.message()),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Internal(err) => Some(err),
            _ => None,
        }
    }
}
