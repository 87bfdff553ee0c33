use smiley::{Terminal, Token, TokenSource};

/// Token source that replays a fixed list of tokens
///
/// Once the list is used up it keeps returning `End` on the line of the last token. Every call
/// to `next_token` is counted, so tests can check how many tokens the parser consumed.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    tokens: Vec<Token>,
    pos: usize,
    pulled: usize,
}

impl ScriptedSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            pulled: 0,
        }
    }

    /// Bare tokens, all on line 1
    pub fn from_kinds(kinds: &[Terminal]) -> Self {
        Self::new(kinds.iter().map(|kind| Token::bare(*kind, 1)).collect())
    }

    /// Bare tokens with explicit line numbers
    pub fn from_lines(tokens: &[(Terminal, usize)]) -> Self {
        Self::new(
            tokens
                .iter()
                .map(|(kind, line)| Token::bare(*kind, *line))
                .collect(),
        )
    }

    pub fn pulled(&self) -> usize {
        self.pulled
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |token| token.line)
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self) -> Token {
        self.pulled += 1;
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => Token::end(self.last_line()),
        }
    }
}

/// `prog id :` followed by `body`, then `done :)`
pub fn program(body: &[Terminal]) -> Vec<Terminal> {
    let mut kinds = vec![Terminal::Prog, Terminal::Id, Terminal::Colon];
    kinds.extend_from_slice(body);
    kinds.push(Terminal::Done);
    kinds.push(Terminal::Smiley);
    kinds
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_end_after_script() {
        let mut source = ScriptedSource::from_lines(&[(Terminal::Prog, 1), (Terminal::Id, 4)]);
        assert_eq!(source.next_token().kind, Terminal::Prog);
        assert_eq!(source.next_token().kind, Terminal::Id);
        assert_eq!(source.next_token(), Token::end(4));
        assert_eq!(source.next_token(), Token::end(4));
        assert_eq!(source.pulled(), 4);
    }

    #[test]
    fn test_program_frame() {
        assert_eq!(
            program(&[]),
            vec![
                Terminal::Prog,
                Terminal::Id,
                Terminal::Colon,
                Terminal::Done,
                Terminal::Smiley
            ]
        );
    }
}
