use super::asm_ast::*;
use super::loaded::{LoadedSet, Location, StackEntry};
use super::stack::EvalStack;
use crate::lexer::Token;

/// Accumulator machine. A result still needed while a new subexpression is loaded
/// gets spilled to the lowest free temporary `T{n}`, and temporaries count as loaded.
///
/// The newest value is always on top of the evaluation stack, so whenever a single
/// operand is loaded it is the one in `AC`.
pub(super) fn gen_one_address(tokens: &[Token]) -> Instructions {
    let mut stack = EvalStack::new();
    let mut loaded = LoadedSet::default();
    let mut instructions = Instructions::new();
    let acc = Operand::Acc;

    for &token in tokens {
        match token {
            Token::Operand(name) => stack.push(StackEntry::Memory(name)),
            Token::Operator(op) => {
                let (op1, op2) = stack.pop_operands(op);
                let (a, b) = (loaded.operand(op1), loaded.operand(op2));

                match (loaded.is_loaded(op1), loaded.is_loaded(op2)) {
                    (true, true) => {
                        // keep the slot living in AC, the other one is consumed
                        let (kept, consumed, fetched) = if a == acc {
                            (op1, op2, b)
                        } else {
                            (op2, op1, a)
                        };
                        loaded.retire(consumed);
                        let comment = format!("{acc} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![fetched],
                            comment,
                        ));
                        stack.push(kept);
                    }
                    (false, false) => {
                        if let Some(holder) = loaded.holder(Location::Accumulator) {
                            let temp = loaded.free_temporary();
                            loaded.spill(holder, temp);
                            let t = Operand::from(temp);
                            instructions.push(Instruction::new(
                                Opcode::Store,
                                vec![t],
                                format!("{t} = {acc}"),
                            ));
                        }
                        let dst = loaded.load(Location::Accumulator);
                        instructions.push(Instruction::new(
                            Opcode::Load,
                            vec![a],
                            format!("{acc} = {a}"),
                        ));
                        let comment = format!("{acc} = {acc} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![b],
                            comment,
                        ));
                        stack.push(StackEntry::Slot(dst));
                    }
                    (false, true) => {
                        debug_assert_eq!(b, acc);
                        let comment = format!("{b} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![a],
                            comment,
                        ));
                        stack.push(op2);
                    }
                    (true, false) => {
                        debug_assert_eq!(a, acc);
                        let comment = format!("{a} = {a} {op} {b}");
                        instructions.push(Instruction::new(
                            opcode_for(op, false),
                            vec![b],
                            comment,
                        ));
                        stack.push(op1);
                    }
                }
            }
            _ => unreachable!("parenthesis in postfix expression"),
        }
    }

    let output = OUTPUT;
    instructions.push(Instruction::new(Opcode::Store, vec![output], format!("{output} = {acc}")));

    instructions
}
