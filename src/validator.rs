use crate::lexer::Token;
use crate::notation::Notation;
use crate::{Error, Result};
use std::fmt;

/// Operator, operand and parenthesis-balance counts of a token sequence.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Census {
    pub operators: usize,
    pub operands: usize,
    pub balance: isize,
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} operators, {} operands, parenthesis balance {}",
            self.operators, self.operands, self.balance
        )
    }
}

pub fn census(tokens: &[Token]) -> Census {
    tokens.iter().fold(Census::default(), |mut c, token| {
        match token {
            Token::Operator(_) => c.operators += 1,
            Token::Operand(_) => c.operands += 1,
            Token::OpenParanth => c.balance += 1,
            Token::CloseParanth => c.balance -= 1,
        }
        c
    })
}

/// Coarse well-formedness check: `operators == operands - 1` and balanced parentheses.
///
/// Parenthesis placement is not checked here, the parser rejects misplaced ones.
pub fn is_valid(tokens: &[Token]) -> bool {
    if tokens.len() < 3 {
        return false;
    }
    let Census {
        operators,
        operands,
        balance,
    } = census(tokens);
    operators + 1 == operands && balance == 0
}

/// True when every operator sits strictly inside the sequence between two non-operators.
pub fn is_infix(tokens: &[Token]) -> bool {
    let in_bound_n_operands = |i: usize| {
        (1..tokens.len().saturating_sub(1)).contains(&i)
            && !tokens[i - 1].is_operator()
            && !tokens[i + 1].is_operator()
    };

    let mut operators = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_operator())
        .map(|(i, _)| i)
        .peekable();

    operators.peek().is_some() && operators.all(in_bound_n_operands)
}

pub fn detect_notation(tokens: &[Token]) -> Result<Notation> {
    if !is_valid(tokens) {
        return Err(Error::InvalidExpression(census(tokens)));
    }

    let notation = if is_infix(tokens) {
        Notation::Infix
    } else if tokens.first().is_some_and(Token::is_operator) {
        Notation::Prefix
    } else if tokens.last().is_some_and(Token::is_operator) {
        Notation::Postfix
    } else {
        return Err(Error::AmbiguousNotation);
    };

    Ok(notation)
}
