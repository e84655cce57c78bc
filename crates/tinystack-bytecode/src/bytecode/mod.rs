//! Bytecode for tinystack programs.
//!
//! A program is a flat byte sequence with no header: every position is either
//! an opcode or the single operand byte of the opcode before it. Addresses are
//! byte offsets and must fit in one byte.

mod dump;
mod format;
mod instruction;
mod opcode;
mod program;

#[cfg(test)]
mod opcode_tests;

pub use dump::dump;
pub use format::{escape_byte, format_stack, width_for_count};
pub use instruction::{DecodeError, Instruction};
pub use opcode::{Flow, Opcode, OpcodeInfo, OperandKind};
pub use program::{Instructions, MAX_PROGRAM_SIZE, Program, ProgramError};
