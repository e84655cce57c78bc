//! Human-readable program dump for debugging.
//!
//! Layout:
//! ```text
//! [program]
//! size = 4
//!
//! [code]
//! L0:
//!   0  01 01  CONST 1
//!   2  06 00  JMP   L0
//! ```
//!
//! Jump targets that land on an instruction boundary get a synthesized
//! `L<addr>` label. Targets inside an instruction are shown as raw numbers.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::Colors;

use super::format::width_for_count;
use super::instruction::{DecodeError, Instruction};
use super::opcode::OperandKind;
use super::program::Program;

/// Generate a human-readable dump of the program.
pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();
    let ctx = DumpContext::new(program, colors);

    dump_summary(&mut out, program, &ctx);
    dump_code(&mut out, program, &ctx);

    out
}

/// Precomputed lookups for dump formatting.
struct DumpContext {
    /// Addresses where a decoded instruction starts.
    boundaries: BTreeSet<usize>,
    /// Boundaries that some JMP/BNZ targets.
    labels: BTreeSet<usize>,
    /// Width for the address column.
    addr_width: usize,
    colors: Colors,
}

impl DumpContext {
    fn new(program: &Program, colors: Colors) -> Self {
        let boundaries: BTreeSet<usize> = program
            .instructions()
            .filter(|(_, decoded)| decoded.is_ok())
            .map(|(pc, _)| pc)
            .collect();

        let labels = program
            .jump_targets()
            .into_iter()
            .map(usize::from)
            .filter(|target| boundaries.contains(target))
            .collect();

        Self {
            boundaries,
            labels,
            addr_width: width_for_count(program.len()),
            colors,
        }
    }

    fn format_operand(&self, instr: &Instruction) -> Option<String> {
        let c = &self.colors;
        let operand = instr.operand?;
        let text = match instr.opcode.operand() {
            OperandKind::Address if self.boundaries.contains(&usize::from(operand)) => {
                format!("{}L{}{}", c.label, operand, c.reset)
            }
            OperandKind::Immediate if operand.is_ascii_graphic() => {
                format!(
                    "{}{}{} {}'{}'{}",
                    c.literal, operand, c.reset, c.muted, operand as char, c.reset
                )
            }
            OperandKind::Immediate => format!("{}{}{}", c.literal, operand, c.reset),
            _ => operand.to_string(),
        };
        Some(text)
    }
}

fn dump_summary(out: &mut String, program: &Program, ctx: &DumpContext) {
    let c = &ctx.colors;
    writeln!(out, "{}[program]{}", c.label, c.reset).unwrap();
    writeln!(out, "size = {}", program.len()).unwrap();
    out.push('\n');
}

fn dump_code(out: &mut String, program: &Program, ctx: &DumpContext) {
    let c = &ctx.colors;
    let bytes = program.as_bytes();
    let w = ctx.addr_width;

    writeln!(out, "{}[code]{}", c.label, c.reset).unwrap();
    for (pc, decoded) in program.instructions() {
        if ctx.labels.contains(&pc) {
            writeln!(out, "{}L{}{}:", c.label, pc, c.reset).unwrap();
        }

        match decoded {
            Ok(instr) => {
                let raw = &bytes[pc..pc + instr.size()];
                let text = match ctx.format_operand(&instr) {
                    Some(operand) => format!("{:<5} {}", instr.opcode.mnemonic(), operand),
                    None => instr.opcode.mnemonic().to_string(),
                };
                writeln!(
                    out,
                    "  {pc:>w$}  {}{:<5}{}  {text}",
                    c.muted,
                    hex(raw),
                    c.reset
                )
                .unwrap();
            }
            Err(DecodeError::IllegalInstruction { byte, .. }) => {
                writeln!(
                    out,
                    "  {pc:>w$}  {}{:<5}{}  {}.byte {byte:#04x}{}",
                    c.muted,
                    hex(&[byte]),
                    c.reset,
                    c.fault,
                    c.reset
                )
                .unwrap();
            }
            Err(DecodeError::MissingOperand { opcode, .. }) => {
                writeln!(
                    out,
                    "  {pc:>w$}  {}{:<5}{}  {opcode} {}<truncated>{}",
                    c.muted,
                    hex(&bytes[pc..=pc]),
                    c.reset,
                    c.fault,
                    c.reset
                )
                .unwrap();
            }
            Err(DecodeError::EndOfProgram { .. }) => break,
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
