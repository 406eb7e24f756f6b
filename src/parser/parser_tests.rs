use super::*;
use crate::lexer;

fn lex(s: &str) -> Tokens {
    lexer::lex(s).unwrap()
}

fn var(name: char) -> Node {
    Node::Operand(name)
}

fn postfix_string(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

#[test]
fn test_prefix_first_pop_is_left() {
    let parsed = parse_prefix(&lex("-AB"));
    let expected = Node::binary(Operator::Subtract, var('A'), var('B'));
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_prefix_nested() {
    let parsed = parse_prefix(&lex("*+AB-CD"));
    let expected = Node::binary(
        Operator::Multiply,
        Node::binary(Operator::Add, var('A'), var('B')),
        Node::binary(Operator::Subtract, var('C'), var('D')),
    );
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_prefix_underflow() {
    let parsed = parse_prefix(&lex("AB+"));
    let expected = ParseError::StackUnderflow {
        operator: Operator::Add,
        position: 2,
    };
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_prefix_leftover() {
    // counts match, structure does not
    assert_eq!(
        Err(ParseError::LeftoverOperands(2)),
        parse_prefix(&lex("A+BC"))
    );
}

#[test]
fn test_prefix_rejects_parens() {
    let expected = ParseError::UnexpectedToken {
        token: Token::CloseParanth,
        notation: Notation::Prefix,
    };
    assert_eq!(Err(expected), parse_prefix(&lex("(+AB)")));
}

#[test]
fn test_postfix_order() {
    let parsed = parse_postfix(&lex("AB/"));
    let expected = Node::binary(Operator::Divide, var('A'), var('B'));
    assert_eq!(Ok(expected), parsed);
}

#[test]
fn test_postfix_empty() {
    assert_eq!(Err(ParseError::Empty), parse_postfix(&[]));
}

#[test]
fn test_shunting_precedence() {
    let postfix = infix_to_postfix(&lex("A+B*C")).unwrap();
    assert_eq!(postfix_string(&postfix), "ABC*+");
    let postfix = infix_to_postfix(&lex("A*B+C")).unwrap();
    assert_eq!(postfix_string(&postfix), "AB*C+");
}

#[test]
fn test_shunting_left_associative() {
    let postfix = infix_to_postfix(&lex("A-B-C")).unwrap();
    assert_eq!(postfix_string(&postfix), "AB-C-");
    let postfix = infix_to_postfix(&lex("A/B*C")).unwrap();
    assert_eq!(postfix_string(&postfix), "AB/C*");
}

#[test]
fn test_shunting_parens() {
    let postfix = infix_to_postfix(&lex("(A+B)*(C-D)")).unwrap();
    assert_eq!(postfix_string(&postfix), "AB+CD-*");
    let postfix = infix_to_postfix(&lex("A*(B+C)/D")).unwrap();
    assert_eq!(postfix_string(&postfix), "ABC+*D/");
}

#[test]
fn test_shunting_paren_errors() {
    assert_eq!(
        Err(ParseError::UnmatchedCloseParanth(0)),
        infix_to_postfix(&lex(")A+B("))
    );
    assert_eq!(
        Err(ParseError::UnclosedParanth),
        infix_to_postfix(&lex("(A+B"))
    );
}

#[test]
fn test_infix_misplaced_parens() {
    // shunts to "A+B", which is not a postfix sequence
    let parsed = parse_infix(&lex("A(+)B"));
    let expected = ParseError::StackUnderflow {
        operator: Operator::Add,
        position: 1,
    };
    assert_eq!(Err(expected), parsed);
}

#[test]
fn test_parse_dispatch() {
    let tree = Node::binary(
        Operator::Add,
        var('A'),
        Node::binary(Operator::Multiply, var('B'), var('C')),
    );
    assert_eq!(Ok(tree.clone()), parse(&lex("+A*BC"), Notation::Prefix));
    assert_eq!(Ok(tree.clone()), parse(&lex("A+B*C"), Notation::Infix));
    assert_eq!(Ok(tree), parse(&lex("ABC*+"), Notation::Postfix));
}
