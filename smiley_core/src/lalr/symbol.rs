use std::fmt;

/// Token kinds of the language, in parse table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Terminal {
    Prog,
    Id,
    Colon,
    Smiley,
    Done,
    DataType,
    Set,
    Assign,
    If,
    Else,
    While,
    LeftParen,
    RightParen,
    LowLogicOp,
    HighLogicOp,
    BoolOp,
    ExprOp,
    TermOp,
    Literal,
    Not,
    Minus,
    Semicolon,
    End,
    Error,
}

impl Terminal {
    pub const ALL: [Terminal; 24] = [
        Terminal::Prog,
        Terminal::Id,
        Terminal::Colon,
        Terminal::Smiley,
        Terminal::Done,
        Terminal::DataType,
        Terminal::Set,
        Terminal::Assign,
        Terminal::If,
        Terminal::Else,
        Terminal::While,
        Terminal::LeftParen,
        Terminal::RightParen,
        Terminal::LowLogicOp,
        Terminal::HighLogicOp,
        Terminal::BoolOp,
        Terminal::ExprOp,
        Terminal::TermOp,
        Terminal::Literal,
        Terminal::Not,
        Terminal::Minus,
        Terminal::Semicolon,
        Terminal::End,
        Terminal::Error,
    ];

    /// Whether tokens of this kind keep their source text
    ///
    /// Kinds with exactly one spelling (keywords, punctuation) don't need it.
    pub fn carries_text(self) -> bool {
        match self {
            Terminal::Id
            | Terminal::DataType
            | Terminal::BoolOp
            | Terminal::ExprOp
            | Terminal::TermOp
            | Terminal::Literal
            | Terminal::Error => true,
            _ => false,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Terminal::Prog => "prog",
            Terminal::Id => "id",
            Terminal::Colon => ":",
            Terminal::Smiley => ":)",
            Terminal::Done => "done",
            Terminal::DataType => "data_type",
            Terminal::Set => "set",
            Terminal::Assign => "=",
            Terminal::If => "if",
            Terminal::Else => "else",
            Terminal::While => "while",
            Terminal::LeftParen => "(",
            Terminal::RightParen => ")",
            Terminal::LowLogicOp => "l_log_op",
            Terminal::HighLogicOp => "h_log_op",
            Terminal::BoolOp => "bool_op",
            Terminal::ExprOp => "expr_op",
            Terminal::TermOp => "term_op",
            Terminal::Literal => "literal",
            Terminal::Not => "!",
            Terminal::Minus => "-",
            Terminal::Semicolon => ";",
            Terminal::End => "EOF",
            Terminal::Error => "error",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Grammar categories, in goto table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nonterminal {
    Prog,
    Block,
    Stmt,
    Decl,
    Assign,
    IfElse,
    Else,
    While,
    LowLogicExpr,
    HighLogicExpr,
    BoolExpr,
    Expr,
    Term,
    Factor,
}

impl Nonterminal {
    pub const ALL: [Nonterminal; 14] = [
        Nonterminal::Prog,
        Nonterminal::Block,
        Nonterminal::Stmt,
        Nonterminal::Decl,
        Nonterminal::Assign,
        Nonterminal::IfElse,
        Nonterminal::Else,
        Nonterminal::While,
        Nonterminal::LowLogicExpr,
        Nonterminal::HighLogicExpr,
        Nonterminal::BoolExpr,
        Nonterminal::Expr,
        Nonterminal::Term,
        Nonterminal::Factor,
    ];

    fn name(self) -> &'static str {
        match self {
            Nonterminal::Prog => "PROG",
            Nonterminal::Block => "BLOCK",
            Nonterminal::Stmt => "STMT",
            Nonterminal::Decl => "DECL",
            Nonterminal::Assign => "ASSIGN",
            Nonterminal::IfElse => "IF_ELSE",
            Nonterminal::Else => "ELSE",
            Nonterminal::While => "WHILE",
            Nonterminal::LowLogicExpr => "L_LOG_E",
            Nonterminal::HighLogicExpr => "H_LOG_E",
            Nonterminal::BoolExpr => "BOOL_E",
            Nonterminal::Expr => "E",
            Nonterminal::Term => "T",
            Nonterminal::Factor => "F",
        }
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl From<Terminal> for Symbol {
    fn from(t: Terminal) -> Self {
        Symbol::Terminal(t)
    }
}

impl From<Nonterminal> for Symbol {
    fn from(n: Nonterminal) -> Self {
        Symbol::Nonterminal(n)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::Nonterminal(n) => write!(f, "{}", n),
        }
    }
}
