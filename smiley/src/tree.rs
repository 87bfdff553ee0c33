use std::fmt;

use smiley_core::{Nonterminal, Symbol, Token};

/// Concrete syntax tree built by the parser
///
/// Every nonterminal node owns its children, ordered left to right as in the production rule
/// that created it. Nodes are never modified once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Terminal(Token),
    Nonterminal {
        symbol: Nonterminal,
        children: Vec<ParseTree>,
    },
}

impl ParseTree {
    pub fn new_terminal(token: Token) -> Self {
        ParseTree::Terminal(token)
    }

    /// No arity check happens here, the parser passes exactly `arity` children
    pub fn new_nonterminal(symbol: Nonterminal, children: Vec<ParseTree>) -> Self {
        ParseTree::Nonterminal { symbol, children }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            ParseTree::Terminal(token) => Symbol::Terminal(token.kind),
            ParseTree::Nonterminal { symbol, .. } => Symbol::Nonterminal(*symbol),
        }
    }

    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Terminal(_) => &[],
            ParseTree::Nonterminal { children, .. } => children,
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseTree::Terminal(token) => Some(token),
            ParseTree::Nonterminal { .. } => None,
        }
    }

    /// First source line covered by this node
    ///
    /// `None` for nodes that cover no tokens at all, such as an empty `ELSE`.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseTree::Terminal(token) => Some(token.line),
            ParseTree::Nonterminal { children, .. } => children.iter().find_map(|c| c.line()),
        }
    }

    /// Tokens at the leaves, left to right
    pub fn leaves(&self) -> Vec<&Token> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'t>(&'t self, leaves: &mut Vec<&'t Token>) {
        match self {
            ParseTree::Terminal(token) => leaves.push(token),
            ParseTree::Nonterminal { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter, depth: usize) -> Result<(), fmt::Error> {
        write!(f, "{:width$}", "", width = depth * 2)?;
        match self {
            ParseTree::Terminal(token) => writeln!(f, "{}", token),
            ParseTree::Nonterminal { symbol, children } => {
                writeln!(f, "{}", symbol)?;
                for child in children {
                    child.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.fmt_indented(f, 0)
    }
}
