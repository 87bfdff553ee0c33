use smiley_core::{
    Action, ErrorSink, InternalError, ParseError, ParseTable, Token, TokenSource, GRAMMAR_TABLE,
};

use crate::{ParseStack, ParseTree};

/// Outcome of a single automaton transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Shifted { state: usize },
    Reduced { rule: usize, state: usize },
    Accepted(ParseTree),
}

/// One run of the LR automaton over one token source
///
/// The session owns its stack and lookahead; the table is only borrowed, so any number of
/// sessions can share one table. A session that accepted or failed stays finished.
pub struct ParserSession<'t, S> {
    table: &'t ParseTable,
    stack: ParseStack,
    source: S,
    lookahead: Option<Token>,
    line: usize,
    finished: bool,
}

impl<'t, S> ParserSession<'t, S>
where
    S: TokenSource,
{
    pub fn new(table: &'t ParseTable, source: S) -> Self {
        ParserSession {
            table,
            stack: ParseStack::new(),
            source,
            lookahead: None,
            line: 1,
            finished: false,
        }
    }

    pub fn stack(&self) -> &ParseStack {
        &self.stack
    }

    /// Line of the most recently pulled token
    pub fn line(&self) -> usize {
        self.line
    }

    /// The buffered lookahead, if it has been pulled and not shifted yet
    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Run the automaton until it accepts or fails
    pub fn run(&mut self) -> Result<ParseTree, ParseError> {
        loop {
            if let Step::Accepted(tree) = self.step()? {
                return Ok(tree);
            }
        }
    }

    /// Perform exactly one shift, reduce, accept or error transition
    pub fn step(&mut self) -> Result<Step, ParseError> {
        if self.finished {
            return Err(ParseError::Finished);
        }
        let result = self.transition();
        match result {
            Ok(Step::Shifted { .. }) | Ok(Step::Reduced { .. }) => {}
            _ => self.finished = true,
        }
        result
    }

    fn transition(&mut self) -> Result<Step, ParseError> {
        let state = self.stack.top_state();
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull(),
        };

        match self.table.action(state, token.kind) {
            Action::Shift(next) => {
                smiley_trace!("shift {} -> state {}", token, next);
                self.stack.push(next, Some(ParseTree::new_terminal(token)));
                Ok(Step::Shifted { state: next })
            }
            Action::Reduce(rule_idx) => {
                self.lookahead = Some(token);
                self.reduce(rule_idx)
            }
            Action::Accept => {
                smiley_trace!("accept");
                self.lookahead = Some(token);
                Ok(Step::Accepted(self.stack.take_result()?))
            }
            Action::Error => {
                smiley_trace!("unexpected {} in state {}", token, state);
                Err(ParseError::Unexpected {
                    token,
                    expected: self.table.expected_terminals(state),
                })
            }
        }
    }

    fn reduce(&mut self, rule_idx: usize) -> Result<Step, ParseError> {
        let table = self.table;
        let rule = table
            .production_rule(rule_idx)
            .ok_or(InternalError::UnknownRule { rule: rule_idx })?;
        smiley_trace!("reduce {} (depth {})", rule, self.stack.depth());

        let children = self.stack.pop_many(rule.arity)?;
        debug_assert_eq!(children.len(), rule.arity);
        let exposed = self.stack.top_state();
        let state = table
            .goto(exposed, rule.produces)
            .ok_or(InternalError::MissingGoto {
                state: exposed,
                nonterminal: rule.produces,
            })?;

        self.stack.push(
            state,
            Some(ParseTree::new_nonterminal(rule.produces, children)),
        );
        Ok(Step::Reduced {
            rule: rule_idx,
            state,
        })
    }

    fn pull(&mut self) -> Token {
        let token = self.source.next_token();
        self.line = token.line;
        token
    }
}

/// Parse a complete program from `source` with the language's parse table
pub fn parse<S>(source: S) -> Result<ParseTree, ParseError>
where
    S: TokenSource,
{
    ParserSession::new(&GRAMMAR_TABLE, source).run()
}

/// Like `parse`, but a failure is also handed to `sink`, exactly once
pub fn parse_reporting<S, E>(source: S, sink: &mut E) -> Result<ParseTree, ParseError>
where
    S: TokenSource,
    E: ErrorSink + ?Sized,
{
    let mut session = ParserSession::new(&GRAMMAR_TABLE, source);
    session.run().map_err(|err| {
        let line = err.line().unwrap_or_else(|| session.line());
        sink.report(line, err.category(), &err.message());
        err
    })
}
