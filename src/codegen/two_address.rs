use super::asm_ast::*;
use super::loaded::{LoadedSet, StackEntry};
use super::stack::EvalStack;
use crate::lexer::Token;

/// Every arithmetic instruction overwrites one of its two operands. Values not yet
/// in a register are moved into the lowest free one starting at `R1`, and the result
/// finally lands in `R`.
pub(super) fn gen_two_address(tokens: &[Token]) -> Instructions {
    let mut stack = EvalStack::new();
    let mut loaded = LoadedSet::default();
    let mut instructions = Instructions::new();

    for &token in tokens {
        match token {
            Token::Operand(name) => stack.push(StackEntry::Memory(name)),
            Token::Operator(op) => {
                let (op1, op2) = stack.pop_operands(op);
                let (a, b) = (loaded.operand(op1), loaded.operand(op2));

                match (loaded.is_loaded(op1), loaded.is_loaded(op2)) {
                    (true, true) => {
                        loaded.retire(op2);
                        let comment = format!("{a} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, true),
                            vec![a, b],
                            comment,
                        ));
                        stack.push(op1);
                    }
                    (false, false) => {
                        let register = loaded.free_register(1);
                        let dst = StackEntry::Slot(loaded.load(register));
                        let r = Operand::from(register);
                        let comment = format!("{r} = {a}");
                        instructions.push(Instruction::new(Opcode::Move, vec![r, a], comment));
                        let comment = format!("{r} = {r} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![r, b],
                            comment,
                        ));
                        stack.push(dst);
                    }
                    (false, true) => {
                        let comment = format!("{b} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![b, a],
                            comment,
                        ));
                        stack.push(op2);
                    }
                    (true, false) => {
                        let comment = format!("{a} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![a, b],
                            comment,
                        ));
                        stack.push(op1);
                    }
                }
            }
            _ => unreachable!("parenthesis in postfix expression"),
        }
    }

    let result = loaded.operand(stack.into_top());
    let output = OUTPUT;
    let comment = format!("{output} = {result}");
    instructions.push(Instruction::new(Opcode::Move, vec![output, result], comment));

    instructions
}
