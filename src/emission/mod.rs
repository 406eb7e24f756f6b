//! Plain-text presentation using [Display]
//!
//! Implements [Display] for [Conversion] and [InstructionSequence], rendering them as
//! bordered tables the driver prints as is. Fast-path instructions are marked with a
//! trailing `*` on their opcode.
//!
//! [Display]: https://doc.rust-lang.org/std/fmt/trait.Display.html

use crate::codegen::{Instruction, InstructionSequence};
use crate::converter::Conversion;
use crate::notation::Notation;

use std::fmt;

fn border(f: &mut fmt::Formatter, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for w in widths {
        write!(f, "{}+", "-".repeat(w + 2))?;
    }
    writeln!(f)
}

fn row<S: AsRef<str>>(f: &mut fmt::Formatter, cells: &[S], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &w) in cells.iter().zip(widths) {
        write!(f, " {:<w$} |", cell.as_ref())?;
    }
    writeln!(f)
}

fn table<const N: usize>(
    f: &mut fmt::Formatter,
    header: [&str; N],
    rows: &[[String; N]],
) -> fmt::Result {
    let mut widths = header.map(str::len);
    for cells in rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    border(f, &widths)?;
    row(f, &header, &widths)?;
    border(f, &widths)?;
    for cells in rows {
        row(f, cells, &widths)?;
    }
    border(f, &widths)
}

fn opcode_cell(instruction: &Instruction) -> String {
    let mark = if instruction.is_fast_path() { "*" } else { "" };
    format!("{}{mark}", instruction.opcode)
}

impl fmt::Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows: Vec<[String; 3]> = self
            .instructions
            .iter()
            .map(|i| [opcode_cell(i), i.operand_field(), i.comment.clone()])
            .collect();

        writeln!(f, "{} INSTRUCTIONS:", self.mode.to_string().to_uppercase())?;
        table(f, ["Operation", "Operands", "Comment"], &rows)?;
        writeln!(f, "Number of instructions: {}", self.len())?;
        write!(f, "Memory accesses: {}", self.memory_accesses())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = Notation::ALL.map(|notation| {
            let mut name = notation.to_string();
            name[..1].make_ascii_uppercase();
            [name, self.get(notation).to_string()]
        });
        table(f, ["Type", "Expression"], &rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::codegen::{generate, AddressMode};
    use crate::converter::convert;

    #[test]
    fn test_instruction_table() {
        let conversion = convert("A+B").unwrap();
        let rendered = generate(&conversion.postfix, AddressMode::Three).to_string();
        let expected = "\
THREE ADDRESS INSTRUCTIONS:
+-----------+----------+-----------+
| Operation | Operands | Comment   |
+-----------+----------+-----------+
| ADD       | R, A, B  | R = A + B |
+-----------+----------+-----------+
Number of instructions: 1
Memory accesses: 1 op + 1 d";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_fast_path_marker() {
        let conversion = convert("AB+").unwrap();
        let rendered = generate(&conversion.postfix, AddressMode::Zero).to_string();
        assert!(rendered.contains("| ADD*      | -        | TOS = A+B |"));
        assert!(rendered.ends_with("Memory accesses: 4 op + 3 d"));
    }

    #[test]
    fn test_conversion_table() {
        let rendered = convert("+AB").unwrap().to_string();
        let expected = "\
+---------+------------+
| Type    | Expression |
+---------+------------+
| Prefix  | +AB        |
| Infix   | (A+B)      |
| Postfix | AB+        |
+---------+------------+
";
        assert_eq!(rendered, expected);
    }
}
