use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum InnerLexError {
    #[error("unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("lowercase operand {0}, operands are A-Z")]
    LowercaseOperand(char),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("{inner} at column {position}")]
pub struct LexError {
    inner: InnerLexError,
    position: usize,
}

impl LexError {
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn inner(&self) -> InnerLexError {
        self.inner
    }
}

impl InnerLexError {
    pub(super) fn set_position(self, position: usize) -> LexError {
        LexError {
            inner: self,
            position,
        }
    }
}
