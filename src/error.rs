use crate::lexer::LexError;
use crate::parser::ParseError;
use crate::validator::Census;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures of the conversion pipeline.
///
/// Code generation has no error type: it is only defined over validated postfix
/// input and panics on a malformed one.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("invalid expression: {0}")]
    InvalidExpression(Census),
    #[error("expression is neither prefix, infix nor postfix")]
    AmbiguousNotation,
    #[error("conversion failed: {0}")]
    ConversionFailed(#[from] ParseError),
}
