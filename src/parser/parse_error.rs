use crate::ast::Operator;
use crate::lexer::Token;
use crate::notation::Notation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("operator {operator} at position {position} is missing an operand")]
    StackUnderflow { operator: Operator, position: usize },
    #[error("{0} operands left without an operator")]
    LeftoverOperands(usize),
    #[error("empty expression")]
    Empty,
    #[error("unexpected token {token} in {notation} expression")]
    UnexpectedToken { token: Token, notation: Notation },
    #[error("unmatched closing parenthesis at position {0}")]
    UnmatchedCloseParanth(usize),
    #[error("unclosed opening parenthesis")]
    UnclosedParanth,
}
