use addrgen::codegen::AddressMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Convert an expression between prefix, infix and postfix and generate N-address code"
)]
pub struct Args {
    /// Expression to compile, e.g. "(A+B)*C" or "* + A B C".
    /// Read line by line from stdin when neither this nor --file is given
    #[arg(conflicts_with = "file")]
    pub expression: Option<String>,

    /// Read expressions from FILE, one per line (last word of each line)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Stop after lexing
    #[arg(long)]
    pub lex: bool,

    /// Stop after building the expression tree
    #[arg(long)]
    pub parse: bool,

    /// Stop after printing the notation table
    #[arg(long)]
    pub convert: bool,

    /// Addressing modes to generate [default: all]
    #[arg(short, long = "mode", value_enum)]
    pub modes: Vec<Mode>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    Three,
    Two,
    One,
    Zero,
}

impl From<Mode> for AddressMode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Three => Self::Three,
            Mode::Two => Self::Two,
            Mode::One => Self::One,
            Mode::Zero => Self::Zero,
        }
    }
}

impl Args {
    pub fn address_modes(&self) -> Vec<AddressMode> {
        if self.modes.is_empty() {
            AddressMode::ALL.to_vec()
        } else {
            self.modes.iter().copied().map(AddressMode::from).collect()
        }
    }
}
