use crate::Action::{Accept, Reduce, Shift};
use crate::Nonterminal as N;
use crate::StateRow;
use crate::Terminal as T;

/// LALR(1) automaton for the augmented grammar `S' → PROG EOF`
///
/// Row `i` describes state `i`. Reduce indices refer to `RULES`.
pub(crate) static STATE_ROWS: [StateRow; 62] = [
    // 0
    StateRow {
        actions: &[
            (T::Prog, Shift(1)),
        ],
        gotos: &[
            (N::Prog, 2),
        ],
    },
    // 1
    StateRow {
        actions: &[
            (T::Id, Shift(3)),
        ],
        gotos: &[],
    },
    // 2
    StateRow {
        actions: &[
            (T::End, Accept),
        ],
        gotos: &[],
    },
    // 3
    StateRow {
        actions: &[
            (T::Colon, Shift(4)),
        ],
        gotos: &[],
    },
    // 4
    StateRow {
        actions: &[
            (T::Done, Shift(5)), (T::DataType, Shift(6)), (T::Set, Shift(7)), (T::If, Shift(8)),
            (T::While, Shift(9)),
        ],
        gotos: &[
            (N::Block, 10), (N::Stmt, 11), (N::Decl, 12), (N::Assign, 13), (N::IfElse, 14),
            (N::While, 15),
        ],
    },
    // 5
    StateRow {
        actions: &[
            (T::Smiley, Reduce(2)), (T::Done, Reduce(2)), (T::DataType, Reduce(2)),
            (T::Set, Reduce(2)), (T::If, Reduce(2)), (T::Else, Reduce(2)), (T::While, Reduce(2)),
        ],
        gotos: &[],
    },
    // 6
    StateRow {
        actions: &[
            (T::Id, Shift(16)),
        ],
        gotos: &[],
    },
    // 7
    StateRow {
        actions: &[
            (T::Id, Shift(17)),
        ],
        gotos: &[],
    },
    // 8
    StateRow {
        actions: &[
            (T::LeftParen, Shift(18)),
        ],
        gotos: &[],
    },
    // 9
    StateRow {
        actions: &[
            (T::LeftParen, Shift(19)),
        ],
        gotos: &[],
    },
    // 10
    StateRow {
        actions: &[
            (T::Smiley, Shift(20)),
        ],
        gotos: &[],
    },
    // 11
    StateRow {
        actions: &[
            (T::Done, Shift(5)), (T::DataType, Shift(6)), (T::Set, Shift(7)), (T::If, Shift(8)),
            (T::While, Shift(9)),
        ],
        gotos: &[
            (N::Block, 21), (N::Stmt, 11), (N::Decl, 12), (N::Assign, 13), (N::IfElse, 14),
            (N::While, 15),
        ],
    },
    // 12
    StateRow {
        actions: &[
            (T::Done, Reduce(3)), (T::DataType, Reduce(3)), (T::Set, Reduce(3)),
            (T::If, Reduce(3)), (T::While, Reduce(3)),
        ],
        gotos: &[],
    },
    // 13
    StateRow {
        actions: &[
            (T::Done, Reduce(4)), (T::DataType, Reduce(4)), (T::Set, Reduce(4)),
            (T::If, Reduce(4)), (T::While, Reduce(4)),
        ],
        gotos: &[],
    },
    // 14
    StateRow {
        actions: &[
            (T::Done, Reduce(5)), (T::DataType, Reduce(5)), (T::Set, Reduce(5)),
            (T::If, Reduce(5)), (T::While, Reduce(5)),
        ],
        gotos: &[],
    },
    // 15
    StateRow {
        actions: &[
            (T::Done, Reduce(6)), (T::DataType, Reduce(6)), (T::Set, Reduce(6)),
            (T::If, Reduce(6)), (T::While, Reduce(6)),
        ],
        gotos: &[],
    },
    // 16
    StateRow {
        actions: &[
            (T::Semicolon, Shift(22)),
        ],
        gotos: &[],
    },
    // 17
    StateRow {
        actions: &[
            (T::Assign, Shift(23)),
        ],
        gotos: &[],
    },
    // 18
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::LowLogicExpr, 29), (N::HighLogicExpr, 30), (N::BoolExpr, 31), (N::Expr, 32),
            (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 19
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::LowLogicExpr, 35), (N::HighLogicExpr, 30), (N::BoolExpr, 31), (N::Expr, 32),
            (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 20
    StateRow {
        actions: &[
            (T::End, Reduce(0)),
        ],
        gotos: &[],
    },
    // 21
    StateRow {
        actions: &[
            (T::Smiley, Reduce(1)), (T::Done, Reduce(1)), (T::DataType, Reduce(1)),
            (T::Set, Reduce(1)), (T::If, Reduce(1)), (T::Else, Reduce(1)), (T::While, Reduce(1)),
        ],
        gotos: &[],
    },
    // 22
    StateRow {
        actions: &[
            (T::Done, Reduce(7)), (T::DataType, Reduce(7)), (T::Set, Reduce(7)),
            (T::If, Reduce(7)), (T::While, Reduce(7)),
        ],
        gotos: &[],
    },
    // 23
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::LowLogicExpr, 36), (N::HighLogicExpr, 30), (N::BoolExpr, 31), (N::Expr, 32),
            (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 24
    StateRow {
        actions: &[
            (T::RightParen, Reduce(23)), (T::LowLogicOp, Reduce(23)), (T::HighLogicOp, Reduce(23)),
            (T::BoolOp, Reduce(23)), (T::ExprOp, Reduce(23)), (T::TermOp, Reduce(23)),
            (T::Semicolon, Reduce(23)),
        ],
        gotos: &[],
    },
    // 25
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::LowLogicExpr, 37), (N::HighLogicExpr, 30), (N::BoolExpr, 31), (N::Expr, 32),
            (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 26
    StateRow {
        actions: &[
            (T::RightParen, Reduce(24)), (T::LowLogicOp, Reduce(24)), (T::HighLogicOp, Reduce(24)),
            (T::BoolOp, Reduce(24)), (T::ExprOp, Reduce(24)), (T::TermOp, Reduce(24)),
            (T::Semicolon, Reduce(24)),
        ],
        gotos: &[],
    },
    // 27
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::Factor, 38),
        ],
    },
    // 28
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::Factor, 39),
        ],
    },
    // 29
    StateRow {
        actions: &[
            (T::RightParen, Shift(40)), (T::LowLogicOp, Shift(41)),
        ],
        gotos: &[],
    },
    // 30
    StateRow {
        actions: &[
            (T::RightParen, Reduce(14)), (T::LowLogicOp, Reduce(14)), (T::HighLogicOp, Shift(42)),
            (T::Semicolon, Reduce(14)),
        ],
        gotos: &[],
    },
    // 31
    StateRow {
        actions: &[
            (T::RightParen, Reduce(16)), (T::LowLogicOp, Reduce(16)), (T::HighLogicOp, Reduce(16)),
            (T::BoolOp, Shift(43)), (T::Semicolon, Reduce(16)),
        ],
        gotos: &[],
    },
    // 32
    StateRow {
        actions: &[
            (T::RightParen, Reduce(18)), (T::LowLogicOp, Reduce(18)), (T::HighLogicOp, Reduce(18)),
            (T::BoolOp, Reduce(18)), (T::ExprOp, Shift(44)), (T::Semicolon, Reduce(18)),
        ],
        gotos: &[],
    },
    // 33
    StateRow {
        actions: &[
            (T::RightParen, Reduce(20)), (T::LowLogicOp, Reduce(20)), (T::HighLogicOp, Reduce(20)),
            (T::BoolOp, Reduce(20)), (T::ExprOp, Reduce(20)), (T::TermOp, Shift(45)),
            (T::Semicolon, Reduce(20)),
        ],
        gotos: &[],
    },
    // 34
    StateRow {
        actions: &[
            (T::RightParen, Reduce(22)), (T::LowLogicOp, Reduce(22)), (T::HighLogicOp, Reduce(22)),
            (T::BoolOp, Reduce(22)), (T::ExprOp, Reduce(22)), (T::TermOp, Reduce(22)),
            (T::Semicolon, Reduce(22)),
        ],
        gotos: &[],
    },
    // 35
    StateRow {
        actions: &[
            (T::RightParen, Shift(46)), (T::LowLogicOp, Shift(41)),
        ],
        gotos: &[],
    },
    // 36
    StateRow {
        actions: &[
            (T::LowLogicOp, Shift(41)), (T::Semicolon, Shift(47)),
        ],
        gotos: &[],
    },
    // 37
    StateRow {
        actions: &[
            (T::RightParen, Shift(48)), (T::LowLogicOp, Shift(41)),
        ],
        gotos: &[],
    },
    // 38
    StateRow {
        actions: &[
            (T::RightParen, Reduce(26)), (T::LowLogicOp, Reduce(26)), (T::HighLogicOp, Reduce(26)),
            (T::BoolOp, Reduce(26)), (T::ExprOp, Reduce(26)), (T::TermOp, Reduce(26)),
            (T::Semicolon, Reduce(26)),
        ],
        gotos: &[],
    },
    // 39
    StateRow {
        actions: &[
            (T::RightParen, Reduce(27)), (T::LowLogicOp, Reduce(27)), (T::HighLogicOp, Reduce(27)),
            (T::BoolOp, Reduce(27)), (T::ExprOp, Reduce(27)), (T::TermOp, Reduce(27)),
            (T::Semicolon, Reduce(27)),
        ],
        gotos: &[],
    },
    // 40
    StateRow {
        actions: &[
            (T::Colon, Shift(49)),
        ],
        gotos: &[],
    },
    // 41
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::HighLogicExpr, 50), (N::BoolExpr, 31), (N::Expr, 32), (N::Term, 33),
            (N::Factor, 34),
        ],
    },
    // 42
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::BoolExpr, 51), (N::Expr, 32), (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 43
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::Expr, 52), (N::Term, 33), (N::Factor, 34),
        ],
    },
    // 44
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::Term, 53), (N::Factor, 34),
        ],
    },
    // 45
    StateRow {
        actions: &[
            (T::Id, Shift(24)), (T::LeftParen, Shift(25)), (T::Literal, Shift(26)),
            (T::Not, Shift(27)), (T::Minus, Shift(28)),
        ],
        gotos: &[
            (N::Factor, 54),
        ],
    },
    // 46
    StateRow {
        actions: &[
            (T::Colon, Shift(55)),
        ],
        gotos: &[],
    },
    // 47
    StateRow {
        actions: &[
            (T::Done, Reduce(8)), (T::DataType, Reduce(8)), (T::Set, Reduce(8)),
            (T::If, Reduce(8)), (T::While, Reduce(8)),
        ],
        gotos: &[],
    },
    // 48
    StateRow {
        actions: &[
            (T::RightParen, Reduce(25)), (T::LowLogicOp, Reduce(25)), (T::HighLogicOp, Reduce(25)),
            (T::BoolOp, Reduce(25)), (T::ExprOp, Reduce(25)), (T::TermOp, Reduce(25)),
            (T::Semicolon, Reduce(25)),
        ],
        gotos: &[],
    },
    // 49
    StateRow {
        actions: &[
            (T::Done, Shift(5)), (T::DataType, Shift(6)), (T::Set, Shift(7)), (T::If, Shift(8)),
            (T::While, Shift(9)),
        ],
        gotos: &[
            (N::Block, 56), (N::Stmt, 11), (N::Decl, 12), (N::Assign, 13), (N::IfElse, 14),
            (N::While, 15),
        ],
    },
    // 50
    StateRow {
        actions: &[
            (T::RightParen, Reduce(13)), (T::LowLogicOp, Reduce(13)), (T::HighLogicOp, Shift(42)),
            (T::Semicolon, Reduce(13)),
        ],
        gotos: &[],
    },
    // 51
    StateRow {
        actions: &[
            (T::RightParen, Reduce(15)), (T::LowLogicOp, Reduce(15)), (T::HighLogicOp, Reduce(15)),
            (T::BoolOp, Shift(43)), (T::Semicolon, Reduce(15)),
        ],
        gotos: &[],
    },
    // 52
    StateRow {
        actions: &[
            (T::RightParen, Reduce(17)), (T::LowLogicOp, Reduce(17)), (T::HighLogicOp, Reduce(17)),
            (T::BoolOp, Reduce(17)), (T::ExprOp, Shift(44)), (T::Semicolon, Reduce(17)),
        ],
        gotos: &[],
    },
    // 53
    StateRow {
        actions: &[
            (T::RightParen, Reduce(19)), (T::LowLogicOp, Reduce(19)), (T::HighLogicOp, Reduce(19)),
            (T::BoolOp, Reduce(19)), (T::ExprOp, Reduce(19)), (T::TermOp, Shift(45)),
            (T::Semicolon, Reduce(19)),
        ],
        gotos: &[],
    },
    // 54
    StateRow {
        actions: &[
            (T::RightParen, Reduce(21)), (T::LowLogicOp, Reduce(21)), (T::HighLogicOp, Reduce(21)),
            (T::BoolOp, Reduce(21)), (T::ExprOp, Reduce(21)), (T::TermOp, Reduce(21)),
            (T::Semicolon, Reduce(21)),
        ],
        gotos: &[],
    },
    // 55
    StateRow {
        actions: &[
            (T::Done, Shift(5)), (T::DataType, Shift(6)), (T::Set, Shift(7)), (T::If, Shift(8)),
            (T::While, Shift(9)),
        ],
        gotos: &[
            (N::Block, 57), (N::Stmt, 11), (N::Decl, 12), (N::Assign, 13), (N::IfElse, 14),
            (N::While, 15),
        ],
    },
    // 56
    StateRow {
        actions: &[
            (T::Done, Reduce(11)), (T::DataType, Reduce(11)), (T::Set, Reduce(11)),
            (T::If, Reduce(11)), (T::Else, Shift(58)), (T::While, Reduce(11)),
        ],
        gotos: &[
            (N::Else, 59),
        ],
    },
    // 57
    StateRow {
        actions: &[
            (T::Done, Reduce(12)), (T::DataType, Reduce(12)), (T::Set, Reduce(12)),
            (T::If, Reduce(12)), (T::While, Reduce(12)),
        ],
        gotos: &[],
    },
    // 58
    StateRow {
        actions: &[
            (T::Colon, Shift(60)),
        ],
        gotos: &[],
    },
    // 59
    StateRow {
        actions: &[
            (T::Done, Reduce(9)), (T::DataType, Reduce(9)), (T::Set, Reduce(9)),
            (T::If, Reduce(9)), (T::While, Reduce(9)),
        ],
        gotos: &[],
    },
    // 60
    StateRow {
        actions: &[
            (T::Done, Shift(5)), (T::DataType, Shift(6)), (T::Set, Shift(7)), (T::If, Shift(8)),
            (T::While, Shift(9)),
        ],
        gotos: &[
            (N::Block, 61), (N::Stmt, 11), (N::Decl, 12), (N::Assign, 13), (N::IfElse, 14),
            (N::While, 15),
        ],
    },
    // 61
    StateRow {
        actions: &[
            (T::Done, Reduce(10)), (T::DataType, Reduce(10)), (T::Set, Reduce(10)),
            (T::If, Reduce(10)), (T::While, Reduce(10)),
        ],
        gotos: &[],
    },
];
