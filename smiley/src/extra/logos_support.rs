use logos::Logos;

use smiley_core::{Terminal, Token, TokenSource};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+|#[^\n]*")]
enum RawToken {
    #[token("\n")]
    Newline,
    #[token("prog")]
    Prog,
    #[token("done")]
    Done,
    #[token("set")]
    Set,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("int")]
    #[token("float")]
    #[token("bool")]
    #[token("string")]
    DataType,
    #[token("true")]
    #[token("false")]
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r#""[^"\n]*""#)]
    Literal,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,
    #[token(":)")]
    Smiley,
    #[token(":")]
    Colon,
    #[token("=")]
    Assign,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("||")]
    LowLogicOp,
    #[token("&&")]
    HighLogicOp,
    #[token("==")]
    #[token("!=")]
    #[token("<")]
    #[token("<=")]
    #[token(">")]
    #[token(">=")]
    BoolOp,
    #[token("+")]
    Plus,
    #[token("-")]
    Dash,
    #[token("*")]
    #[token("/")]
    #[token("%")]
    TermOp,
    #[token("!")]
    Not,
    #[token(";")]
    Semicolon,
}

impl RawToken {
    /// Terminal for this token, given the terminal lexed before it
    ///
    /// Newlines are layout only and have no terminal.
    fn terminal(self, previous: Option<Terminal>) -> Option<Terminal> {
        let terminal = match self {
            RawToken::Newline => return None,
            RawToken::Prog => Terminal::Prog,
            RawToken::Done => Terminal::Done,
            RawToken::Set => Terminal::Set,
            RawToken::If => Terminal::If,
            RawToken::Else => Terminal::Else,
            RawToken::While => Terminal::While,
            RawToken::DataType => Terminal::DataType,
            RawToken::Literal => Terminal::Literal,
            RawToken::Id => Terminal::Id,
            RawToken::Smiley => Terminal::Smiley,
            RawToken::Colon => Terminal::Colon,
            RawToken::Assign => Terminal::Assign,
            RawToken::LeftParen => Terminal::LeftParen,
            RawToken::RightParen => Terminal::RightParen,
            RawToken::LowLogicOp => Terminal::LowLogicOp,
            RawToken::HighLogicOp => Terminal::HighLogicOp,
            RawToken::BoolOp => Terminal::BoolOp,
            RawToken::Plus => Terminal::ExprOp,
            // A dash right after an operand is a subtraction, anywhere else a negation
            RawToken::Dash => match previous {
                Some(Terminal::Id) | Some(Terminal::Literal) | Some(Terminal::RightParen) => {
                    Terminal::ExprOp
                }
                _ => Terminal::Minus,
            },
            RawToken::TermOp => Terminal::TermOp,
            RawToken::Not => Terminal::Not,
            RawToken::Semicolon => Terminal::Semicolon,
        };
        Some(terminal)
    }
}

/// Token source for program text, backed by a logos lexer
///
/// Lines are counted from 1. After the input is exhausted the lexer keeps returning `End`.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
    line: usize,
    previous: Option<Terminal>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            line: 1,
            previous: None,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'source> TokenSource for Lexer<'source> {
    fn next_token(&mut self) -> Token {
        loop {
            let kind = match self.inner.next() {
                None => return Token::end(self.line),
                Some(Ok(raw)) => match raw.terminal(self.previous) {
                    Some(kind) => kind,
                    None => {
                        self.line += 1;
                        continue;
                    }
                },
                Some(Err(())) => {
                    smiley_trace!(
                        "unexpected characters {:?} on line {}",
                        self.inner.slice(),
                        self.line
                    );
                    Terminal::Error
                }
            };
            self.previous = Some(kind);
            let text = if kind.carries_text() {
                Some(self.inner.slice().to_owned())
            } else {
                None
            };
            return Token::new(kind, text, self.line);
        }
    }
}
