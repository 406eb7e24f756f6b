//! Conversions between prefix, infix and postfix.
//!
//! Every conversion parses its input into a [Node] and serialises the tree again, so
//! the three renderings of a [Conversion] always describe the same expression.

use crate::ast::Node;
use crate::lexer::{self, Token};
use crate::notation::{Expression, Notation};
use crate::parser::{self, ParseError};
use crate::validator::detect_notation;
use crate::Result;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversion {
    /// Notation the input was written in.
    pub source: Notation,
    pub tree: Node,
    pub prefix: Expression,
    pub infix: Expression,
    pub postfix: Expression,
}

impl Conversion {
    pub fn from_tree(source: Notation, tree: Node) -> Self {
        let prefix = Expression::from_tree(&tree, Notation::Prefix);
        let infix = Expression::from_tree(&tree, Notation::Infix);
        let postfix = Expression::from_tree(&tree, Notation::Postfix);
        Self {
            source,
            tree,
            prefix,
            infix,
            postfix,
        }
    }

    pub fn get(&self, notation: Notation) -> &Expression {
        match notation {
            Notation::Prefix => &self.prefix,
            Notation::Infix => &self.infix,
            Notation::Postfix => &self.postfix,
        }
    }
}

/// Reads `expr` as prefix and renders it in `target`.
pub fn prefix_to(
    expr: &Expression,
    target: Notation,
) -> std::result::Result<Expression, ParseError> {
    let tree = parser::parse_prefix(expr.tokens())?;
    Ok(Expression::from_tree(&tree, target))
}

/// Shunts `expr` from infix to postfix.
///
/// Unlike the other conversions this does not go through the tree, so misplaced
/// parentheses that survive the shunting yield a sequence [parser::parse_postfix]
/// will reject.
pub fn infix_to_postfix(expr: &Expression) -> std::result::Result<Expression, ParseError> {
    let postfix = parser::infix_to_postfix(expr.tokens())?;
    Ok(Expression::new(Notation::Postfix, postfix))
}

/// # Panics
///
/// When `expr` is not a well-formed postfix sequence. Callers must validate first.
pub fn postfix_to_prefix(expr: &Expression) -> Expression {
    let tree = parser::parse_postfix(expr.tokens())
        .unwrap_or_else(|err| panic!("malformed postfix expression {expr}: {err}"));
    Expression::from_tree(&tree, Notation::Prefix)
}

pub fn convert(source: &str) -> Result<Conversion> {
    let tokens = lexer::lex(source)?;
    convert_tokens(&tokens)
}

pub fn convert_tokens(tokens: &[Token]) -> Result<Conversion> {
    let notation = detect_notation(tokens)?;
    debug!(%notation, "detected notation");

    let tree = parser::parse(tokens, notation)?;
    let conversion = Conversion::from_tree(notation, tree);
    debug_assert_eq!(
        conversion.postfix.operand_count(),
        conversion.postfix.operator_count() + 1
    );
    debug!(
        prefix = %conversion.prefix,
        infix = %conversion.infix,
        postfix = %conversion.postfix,
        "converted expression"
    );

    Ok(conversion)
}
