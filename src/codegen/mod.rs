pub mod asm_ast;
mod loaded;
mod one_address;
mod stack;
mod three_address;
mod two_address;
mod zero_address;

use crate::notation::{Expression, Notation};
use tracing::debug;

pub use asm_ast::*;

use one_address::gen_one_address;
use three_address::gen_three_address;
use two_address::gen_two_address;
use zero_address::gen_zero_address;

/// Generates the instruction sequence computing `postfix` on an `mode` machine.
///
/// Each call starts from an empty evaluation stack and loaded set.
///
/// # Panics
///
/// When `postfix` is not a well-formed postfix expression. Run it through
/// [crate::converter::convert] first.
pub fn generate(postfix: &Expression, mode: AddressMode) -> InstructionSequence {
    assert_eq!(
        postfix.notation(),
        Notation::Postfix,
        "code generation needs a postfix expression"
    );
    let tokens = postfix.tokens();
    let instructions = match mode {
        AddressMode::Three => gen_three_address(tokens),
        AddressMode::Two => gen_two_address(tokens),
        AddressMode::One => gen_one_address(tokens),
        AddressMode::Zero => gen_zero_address(tokens),
    };

    let sequence = InstructionSequence { mode, instructions };
    debug!(
        %mode,
        instructions = sequence.len(),
        accesses = %sequence.memory_accesses(),
        "generated code"
    );
    sequence
}

/// All four sequences, in [AddressMode::ALL] order.
pub fn generate_all(postfix: &Expression) -> [InstructionSequence; 4] {
    AddressMode::ALL.map(|mode| generate(postfix, mode))
}
