mod error;
mod lalr;
mod token;
mod traits;

pub use crate::error::{ErrorCategory, InternalError, ParseError};
pub use crate::lalr::*;
pub use crate::token::Token;
pub use crate::traits::{ErrorSink, TokenSource};
