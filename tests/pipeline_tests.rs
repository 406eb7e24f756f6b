//! Property tests for the whole pipeline.
//!
//! Random expression trees are rendered in every notation and pushed through
//! detection, conversion and all four code generators.

use addrgen::ast::{Node, Operator};
use addrgen::codegen::{generate, generate_all, AddressMode, Opcode, OUTPUT};
use addrgen::converter::{self, convert};
use addrgen::notation::{Expression, Notation};
use addrgen::validator::detect_notation;
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

fn operand() -> impl Strategy<Value = Node> {
    prop::char::range('A', 'Z').prop_map(Node::Operand)
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Trees with at least one operator.
fn expression_tree() -> impl Strategy<Value = Node> {
    let subtree = operand().prop_recursive(4, 24, 2, |inner| {
        (operator(), inner.clone(), inner).prop_map(|(op, l, r)| Node::binary(op, l, r))
    });
    (operator(), subtree.clone(), subtree).prop_map(|(op, l, r)| Node::binary(op, l, r))
}

fn token_soup() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z+\-*/()]{0,20}").unwrap()
}

fn render(tree: &Node, notation: Notation) -> String {
    Expression::from_tree(tree, notation).to_string()
}

// =============================================================================
// CONVERSION
// =============================================================================

proptest! {
    #[test]
    fn detects_every_rendered_notation(tree in expression_tree()) {
        for notation in Notation::ALL {
            let tokens = addrgen::lexer::lex(&render(&tree, notation)).unwrap();
            prop_assert_eq!(detect_notation(&tokens), Ok(notation));
        }
    }

    #[test]
    fn every_notation_converts_to_the_same_tree(tree in expression_tree()) {
        for notation in Notation::ALL {
            let conversion = convert(&render(&tree, notation)).unwrap();
            prop_assert_eq!(conversion.source, notation);
            prop_assert_eq!(&conversion.tree, &tree);
            prop_assert_eq!(conversion.postfix.to_string(), render(&tree, Notation::Postfix));
        }
    }

    #[test]
    fn postfix_survives_prefix_and_infix(tree in expression_tree()) {
        let postfix = Expression::from_tree(&tree, Notation::Postfix);
        let prefix = converter::postfix_to_prefix(&postfix);
        let infix = converter::prefix_to(&prefix, Notation::Infix).unwrap();
        prop_assert_eq!(converter::infix_to_postfix(&infix).unwrap(), postfix);
    }

    #[test]
    fn conversion_keeps_counts(tree in expression_tree()) {
        let conversion = convert(&render(&tree, Notation::Infix)).unwrap();
        for notation in Notation::ALL {
            let expr = conversion.get(notation);
            prop_assert_eq!(expr.operand_count(), tree.operand_count());
            prop_assert_eq!(expr.operator_count(), tree.operator_count());
        }
    }

    #[test]
    fn convert_never_panics(source in token_soup()) {
        let _ = convert(&source);
    }
}

// =============================================================================
// CODE GENERATION
// =============================================================================

proptest! {
    #[test]
    fn three_address_emits_one_instruction_per_operator(tree in expression_tree()) {
        let seq = generate(&Expression::from_tree(&tree, Notation::Postfix), AddressMode::Three);
        prop_assert_eq!(seq.len(), tree.operator_count());
        let last = seq.instructions.last().unwrap();
        prop_assert_eq!(last.operands[0], OUTPUT);
    }

    #[test]
    fn zero_address_pushes_every_operand(tree in expression_tree()) {
        let seq = generate(&Expression::from_tree(&tree, Notation::Postfix), AddressMode::Zero);
        prop_assert_eq!(seq.len(), tree.operand_count() + tree.operator_count() + 1);
        prop_assert_eq!(seq.fast_path_count(), tree.operator_count());
        let last = seq.instructions.last().unwrap();
        prop_assert_eq!(last.opcode, Opcode::Pop);
        prop_assert_eq!(&last.comment, &format!("R = {}", tree.unwrapped()));
    }

    #[test]
    fn register_machines_store_the_result(tree in expression_tree()) {
        let postfix = Expression::from_tree(&tree, Notation::Postfix);

        let two = generate(&postfix, AddressMode::Two);
        let last = two.instructions.last().unwrap();
        prop_assert_eq!(last.opcode, Opcode::Move);
        prop_assert_eq!(last.operands[0], OUTPUT);

        let one = generate(&postfix, AddressMode::One);
        let last = one.instructions.last().unwrap();
        prop_assert_eq!(last.opcode, Opcode::Store);
        prop_assert_eq!(one.fast_path_count(), 0);
    }

    #[test]
    fn generation_is_repeatable(tree in expression_tree()) {
        let postfix = Expression::from_tree(&tree, Notation::Postfix);
        let first = generate_all(&postfix);
        let second = generate_all(&postfix);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn memory_accesses_add_up(tree in expression_tree()) {
        let postfix = Expression::from_tree(&tree, Notation::Postfix);
        for seq in generate_all(&postfix) {
            let accesses = seq.memory_accesses();
            prop_assert_eq!(accesses.ops, seq.len());
            prop_assert_eq!(accesses.data, seq.len() - seq.fast_path_count());
        }
    }
}

#[test]
fn readme_example_end_to_end() {
    let conversion = convert("(A+B)*(C-D)").unwrap();
    assert_eq!(conversion.prefix.to_string(), "*+AB-CD");
    assert_eq!(conversion.postfix.to_string(), "AB+CD-*");

    let [three, two, one, zero] = generate_all(&conversion.postfix);
    assert_eq!(three.len(), 3);
    assert_eq!(two.len(), 6);
    assert_eq!(one.len(), 7);
    assert_eq!(zero.len(), 8);
}
