use super::asm_ast::*;
use super::loaded::{LoadedSet, StackEntry};
use super::stack::EvalStack;
use crate::lexer::Token;

/// `OP dst, op1, op2`: the destination reuses a loaded operand's register when there
/// is one, else the lowest free register starting at `R`.
pub(super) fn gen_three_address(tokens: &[Token]) -> Instructions {
    let mut stack = EvalStack::new();
    let mut loaded = LoadedSet::default();
    let mut instructions = Instructions::new();

    for &token in tokens {
        match token {
            Token::Operand(name) => stack.push(StackEntry::Memory(name)),
            Token::Operator(op) => {
                let (op1, op2) = stack.pop_operands(op);
                let both_loaded = loaded.is_loaded(op1) && loaded.is_loaded(op2);

                let dst = if loaded.is_loaded(op1) {
                    op1
                } else if loaded.is_loaded(op2) {
                    op2
                } else {
                    StackEntry::Slot(loaded.load(loaded.free_register(0)))
                };

                let (d, a, b) = (loaded.operand(dst), loaded.operand(op1), loaded.operand(op2));
                // only one of the two registers is needed as destination
                if both_loaded {
                    loaded.retire(op2);
                }
                stack.push(dst);

                let opcode = opcode_for(op, both_loaded);
                let comment = format!("{d} = {a} {op} {b}");
                instructions.push(Instruction::new(opcode, vec![d, a, b], comment));
            }
            _ => unreachable!("parenthesis in postfix expression"),
        }
    }

    instructions
}
