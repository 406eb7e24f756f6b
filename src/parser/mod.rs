mod parse_error;
#[cfg(test)]
mod parser_tests;

use crate::ast::{Node, Operator};
use crate::lexer::{Token, Tokens};
use crate::notation::Notation;
pub use parse_error::{ParseError, Result};

pub fn parse(tokens: &[Token], notation: Notation) -> Result<Node> {
    match notation {
        Notation::Prefix => parse_prefix(tokens),
        Notation::Infix => parse_infix(tokens),
        Notation::Postfix => parse_postfix(tokens),
    }
}

fn pop_two(stack: &mut Vec<Node>, operator: Operator, position: usize) -> Result<(Node, Node)> {
    match (stack.pop(), stack.pop()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(ParseError::StackUnderflow { operator, position }),
    }
}

fn into_single(mut stack: Vec<Node>) -> Result<Node> {
    match stack.len() {
        0 | 1 => stack.pop().ok_or(ParseError::Empty),
        n => Err(ParseError::LeftoverOperands(n)),
    }
}

fn unexpected(token: Token, notation: Notation) -> ParseError {
    ParseError::UnexpectedToken { token, notation }
}

/// Scans the tokens right to left. On an operator the first item popped is its left
/// operand, the second its right one.
pub fn parse_prefix(tokens: &[Token]) -> Result<Node> {
    let mut stack = Vec::new();

    for (position, &token) in tokens.iter().enumerate().rev() {
        match token {
            Token::Operand(name) => stack.push(Node::Operand(name)),
            Token::Operator(op) => {
                let (left, right) = pop_two(&mut stack, op, position)?;
                stack.push(Node::binary(op, left, right));
            }
            _ => return Err(unexpected(token, Notation::Prefix)),
        }
    }

    into_single(stack)
}

/// Scans the tokens left to right. On an operator the first item popped is its right
/// operand, the second its left one.
pub fn parse_postfix(tokens: &[Token]) -> Result<Node> {
    let mut stack = Vec::new();

    for (position, &token) in tokens.iter().enumerate() {
        match token {
            Token::Operand(name) => stack.push(Node::Operand(name)),
            Token::Operator(op) => {
                let (right, left) = pop_two(&mut stack, op, position)?;
                stack.push(Node::binary(op, left, right));
            }
            _ => return Err(unexpected(token, Notation::Postfix)),
        }
    }

    into_single(stack)
}

/// Builds the tree by shunting to postfix first, so precedence and left
/// associativity come from [infix_to_postfix] alone.
///
/// Positions in a [ParseError::StackUnderflow] refer to the shunted sequence.
pub fn parse_infix(tokens: &[Token]) -> Result<Node> {
    let postfix = infix_to_postfix(tokens)?;
    parse_postfix(&postfix)
}

/// Operator-precedence shunting.
///
/// Operands go straight to the output and `(` onto the operator stack. `)` pops to the
/// output up to its matching `(`. An operator first pops every stacked operator of
/// greater or equal precedence (stopping at `(`), then is pushed itself.
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Tokens> {
    let mut stack = Tokens::new();
    let mut postfix = Tokens::new();

    for (position, &token) in tokens.iter().enumerate() {
        match token {
            Token::Operand(_) => postfix.push(token),
            Token::OpenParanth => stack.push(token),
            Token::CloseParanth => loop {
                match stack.pop() {
                    Some(Token::OpenParanth) => break,
                    Some(op) => postfix.push(op),
                    None => return Err(ParseError::UnmatchedCloseParanth(position)),
                }
            },
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    postfix.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::OpenParanth {
            return Err(ParseError::UnclosedParanth);
        }
        postfix.push(token);
    }

    Ok(postfix)
}
