use std::fmt;

use crate::{Nonterminal, Symbol, Terminal};

/// A production rule of the grammar
///
/// `arity` is the number of stack entries a reduction by this rule consumes. It is the
/// authoritative value; `rhs` names the right-hand side symbols for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductionRule {
    pub produces: Nonterminal,
    pub arity: usize,
    pub rhs: &'static [Symbol],
}

impl fmt::Display for ProductionRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} →", self.produces)?;
        if self.rhs.is_empty() {
            return write!(f, " ε");
        }
        for symbol in self.rhs {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

macro_rules! symbol {
    (t $s:ident) => {
        Symbol::Terminal(Terminal::$s)
    };
    (n $s:ident) => {
        Symbol::Nonterminal(Nonterminal::$s)
    };
}

macro_rules! rule {
    ($lhs:ident, $arity:expr => $($kind:ident $s:ident),*) => {
        ProductionRule {
            produces: Nonterminal::$lhs,
            arity: $arity,
            rhs: &[$(symbol!($kind $s)),*],
        }
    };
}

/// All production rules, indexed by the `Reduce` actions of the parse table
pub static RULES: [ProductionRule; 28] = [
    rule![Prog, 5 => t Prog, t Id, t Colon, n Block, t Smiley],
    rule![Block, 2 => n Stmt, n Block],
    rule![Block, 1 => t Done],
    rule![Stmt, 1 => n Decl],
    rule![Stmt, 1 => n Assign],
    rule![Stmt, 1 => n IfElse],
    rule![Stmt, 1 => n While],
    rule![Decl, 3 => t DataType, t Id, t Semicolon],
    rule![Assign, 5 => t Set, t Id, t Assign, n LowLogicExpr, t Semicolon],
    rule![IfElse, 7 => t If, t LeftParen, n LowLogicExpr, t RightParen, t Colon, n Block, n Else],
    rule![Else, 3 => t Else, t Colon, n Block],
    rule![Else, 0 =>],
    rule![While, 6 => t While, t LeftParen, n LowLogicExpr, t RightParen, t Colon, n Block],
    rule![LowLogicExpr, 3 => n LowLogicExpr, t LowLogicOp, n HighLogicExpr],
    rule![LowLogicExpr, 1 => n HighLogicExpr],
    rule![HighLogicExpr, 3 => n HighLogicExpr, t HighLogicOp, n BoolExpr],
    rule![HighLogicExpr, 1 => n BoolExpr],
    rule![BoolExpr, 3 => n BoolExpr, t BoolOp, n Expr],
    rule![BoolExpr, 1 => n Expr],
    rule![Expr, 3 => n Expr, t ExprOp, n Term],
    rule![Expr, 1 => n Term],
    rule![Term, 3 => n Term, t TermOp, n Factor],
    rule![Term, 1 => n Factor],
    rule![Factor, 1 => t Id],
    rule![Factor, 1 => t Literal],
    rule![Factor, 3 => t LeftParen, n LowLogicExpr, t RightParen],
    rule![Factor, 2 => t Not, n Factor],
    rule![Factor, 2 => t Minus, n Factor],
];
