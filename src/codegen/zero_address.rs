use super::asm_ast::*;
use super::stack::EvalStack;
use crate::ast::Node;
use crate::lexer::Token;

/// Stack machine: operands are pushed, operators combine the two topmost values.
/// There is no memory operand to fetch, so every arithmetic instruction is fast-path.
pub(super) fn gen_zero_address(tokens: &[Token]) -> Instructions {
    let mut stack = EvalStack::new();
    let mut instructions = Instructions::new();

    for &token in tokens {
        match token {
            Token::Operand(name) => {
                stack.push(Node::Operand(name));
                let comment = format!("TOS = {name}");
                instructions.push(Instruction::new(
                    Opcode::Push,
                    vec![Operand::Var(name)],
                    comment,
                ));
            }
            Token::Operator(op) => {
                let (op1, op2) = stack.pop_operands(op);
                let value = Node::binary(op, op1, op2);
                let comment = format!("TOS = {}", value.unwrapped());
                instructions.push(Instruction::new(
                    opcode_for(op, true),
                    vec![Operand::Implicit],
                    comment,
                ));
                stack.push(value);
            }
            _ => unreachable!("parenthesis in postfix expression"),
        }
    }

    let output = OUTPUT;
    let comment = format!("{output} = {}", stack.into_top().unwrapped());
    instructions.push(Instruction::new(Opcode::Pop, vec![output], comment));

    instructions
}
