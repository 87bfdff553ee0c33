use std::fmt;

use crate::Terminal;

/// A lexical token as handed to the parser by a `TokenSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: Terminal,
    pub text: Option<String>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: Terminal, text: Option<String>, line: usize) -> Self {
        Token { kind, text, line }
    }

    /// Token without source text, e.g. a keyword
    pub fn bare(kind: Terminal, line: usize) -> Self {
        Token {
            kind,
            text: None,
            line,
        }
    }

    pub fn end(line: usize) -> Self {
        Token::bare(Terminal::End, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.text {
            Some(text) => write!(f, "{} `{}`", self.kind, text),
            None => write!(f, "{}", self.kind),
        }
    }
}
