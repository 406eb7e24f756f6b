use crate::ast::Operator;
use std::fmt;

pub type Instructions = Vec<Instruction>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AddressMode {
    Three,
    Two,
    One,
    Zero,
}

impl AddressMode {
    pub const ALL: [Self; 4] = [Self::Three, Self::Two, Self::One, Self::Zero];

    /// Explicit operand/destination fields one arithmetic instruction encodes.
    pub fn address_count(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Two => 2,
            Self::One => 1,
            Self::Zero => 0,
        }
    }
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Three => write!(f, "three address"),
            Self::Two => write!(f, "two address"),
            Self::One => write!(f, "one address"),
            Self::Zero => write!(f, "zero address"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Opcode {
    /// `fast_path` is set when both operands were already resident.
    Arith { op: Operator, fast_path: bool },
    Move,
    Load,
    Store,
    Push,
    Pop,
}

pub fn opcode_for(op: Operator, fast_path: bool) -> Opcode {
    Opcode::Arith { op, fast_path }
}

impl Opcode {
    pub fn is_fast_path(self) -> bool {
        matches!(self, Self::Arith { fast_path: true, .. })
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Arith { op, .. } => match op {
                Operator::Add => "ADD",
                Operator::Subtract => "SUB",
                Operator::Multiply => "MPY",
                Operator::Divide => "DIV",
            },
            Self::Move => "MOVE",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Push => "PUSH",
            Self::Pop => "POP",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operand {
    /// Operand still in memory
    Var(char),
    /// `R` for index 0, `R{n}` otherwise
    Reg(u32),
    /// AC
    Acc,
    /// `T{n}` spill slot
    Temp(u32),
    /// Operand implied by the top of stack
    Implicit,
}

/// Location results are finally written to.
pub const OUTPUT: Operand = Operand::Reg(0);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{name}"),
            Self::Reg(0) => write!(f, "R"),
            Self::Reg(n) => write!(f, "R{n}"),
            Self::Acc => write!(f, "AC"),
            Self::Temp(n) => write!(f, "T{n}"),
            Self::Implicit => write!(f, "-"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Operand>,
    pub comment: String,
}

impl Instruction {
    pub fn new(opcode: Opcode, operands: Vec<Operand>, comment: String) -> Self {
        Self {
            opcode,
            operands,
            comment,
        }
    }

    pub fn is_fast_path(&self) -> bool {
        self.opcode.is_fast_path()
    }

    /// Operands joined as they appear in the operand column, e.g. `R1, A, B`.
    pub fn operand_field(&self) -> String {
        let fields: Vec<String> = self.operands.iter().map(ToString::to_string).collect();
        fields.join(", ")
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand_field())
    }
}

/// `ops` instruction fetches plus `data` accesses to memory operands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MemoryAccesses {
    pub ops: usize,
    pub data: usize,
}

impl fmt::Display for MemoryAccesses {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} op + {} d", self.ops, self.data)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstructionSequence {
    pub mode: AddressMode,
    pub instructions: Instructions,
}

impl InstructionSequence {
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn fast_path_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_fast_path()).count()
    }

    pub fn memory_accesses(&self) -> MemoryAccesses {
        let ops = self.len();
        MemoryAccesses {
            ops,
            data: ops - self.fast_path_count(),
        }
    }
}
