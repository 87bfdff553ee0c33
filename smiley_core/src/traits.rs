use crate::{ErrorCategory, Token};

/// A source of lexical tokens
///
/// This trait should be implemented by lexers that can be plugged into a parser session.
/// Once the input is exhausted, every further call must return a `Terminal::End` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl<S> TokenSource for &mut S
where
    S: TokenSource + ?Sized,
{
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

/// Receiver of parse failures
///
/// The parser reports at most once per session and then stops. Whether that ends the process
/// is up to the implementation.
pub trait ErrorSink {
    fn report(&mut self, line: usize, category: ErrorCategory, message: &str);
}

impl<F> ErrorSink for F
where
    F: FnMut(usize, ErrorCategory, &str),
{
    fn report(&mut self, line: usize, category: ErrorCategory, message: &str) {
        (*self)(line, category, message)
    }
}
