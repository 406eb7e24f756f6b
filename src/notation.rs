//! Notations and their token serialisations.
//!
//! An [Expression] is a token sequence tagged with the [Notation] it is written in.
//! [Expression::from_tree] is the only way the converter produces one, so every
//! converted expression is a faithful serialisation of a single [Node].

use crate::ast::Node;
use crate::lexer::{Token, Tokens};
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Notation {
    Prefix,
    Infix,
    Postfix,
}

impl Notation {
    pub const ALL: [Self; 3] = [Self::Prefix, Self::Infix, Self::Postfix];
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Infix => write!(f, "infix"),
            Self::Postfix => write!(f, "postfix"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expression {
    notation: Notation,
    tokens: Tokens,
}

impl Expression {
    pub fn new(notation: Notation, tokens: Tokens) -> Self {
        Self { notation, tokens }
    }

    pub fn from_tree(tree: &Node, notation: Notation) -> Self {
        Self::new(notation, serialize(tree, notation))
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn operand_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_operand()).count()
    }

    pub fn operator_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_operator()).count()
    }
}

/// Tokens concatenated without separators, e.g. `AB+CD-*`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.tokens.iter().try_for_each(|t| write!(f, "{t}"))
    }
}

pub fn serialize(tree: &Node, notation: Notation) -> Tokens {
    let mut tokens = Tokens::new();
    match notation {
        Notation::Prefix => emit_prefix(tree, &mut tokens),
        Notation::Infix => emit_infix(tree, &mut tokens),
        Notation::Postfix => emit_postfix(tree, &mut tokens),
    }
    tokens
}

fn emit_prefix(tree: &Node, tokens: &mut Tokens) {
    match tree {
        Node::Operand(name) => tokens.push(Token::Operand(*name)),
        Node::Binary(op, left, right) => {
            tokens.push(Token::Operator(*op));
            emit_prefix(left, tokens);
            emit_prefix(right, tokens);
        }
    }
}

// Always parenthesised, so the output never depends on precedence.
fn emit_infix(tree: &Node, tokens: &mut Tokens) {
    match tree {
        Node::Operand(name) => tokens.push(Token::Operand(*name)),
        Node::Binary(op, left, right) => {
            tokens.push(Token::OpenParanth);
            emit_infix(left, tokens);
            tokens.push(Token::Operator(*op));
            emit_infix(right, tokens);
            tokens.push(Token::CloseParanth);
        }
    }
}

fn emit_postfix(tree: &Node, tokens: &mut Tokens) {
    match tree {
        Node::Operand(name) => tokens.push(Token::Operand(*name)),
        Node::Binary(op, left, right) => {
            emit_postfix(left, tokens);
            emit_postfix(right, tokens);
            tokens.push(Token::Operator(*op));
        }
    }
}
