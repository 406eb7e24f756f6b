use super::lexer_error::InnerLexError;
use crate::ast::Operator;
use std::fmt;

/// Basic token type
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Token {
    /// single uppercase operand name (A-Z)
    Operand(char),
    /// + - * /
    Operator(Operator),
    /// (
    OpenParanth,
    /// )
    CloseParanth,
}

impl Token {
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    #[inline]
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Operand(_))
    }

    pub fn is_paranth(&self) -> bool {
        matches!(self, Self::OpenParanth | Self::CloseParanth)
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl TryFrom<char> for Token {
    type Error = InnerLexError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '(' => Ok(Self::OpenParanth),
            ')' => Ok(Self::CloseParanth),
            'A'..='Z' => Ok(Self::Operand(c)),
            'a'..='z' => Err(InnerLexError::LowercaseOperand(c)),
            _ => Operator::from_symbol(c)
                .map(Self::Operator)
                .ok_or(InnerLexError::UnexpectedChar(c)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Operand(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParanth => write!(f, "("),
            Self::CloseParanth => write!(f, ")"),
        }
    }
}
