//! Bytecode format and shared runtime types for tinystack.
//!
//! This crate contains:
//! - The opcode table shared by the assembler, the VM and the disassembler
//! - Instruction decoding and program loading
//! - Human-readable dumps and the formatting helpers used by execution traces

pub mod bytecode;
pub mod colors;

// Re-export commonly used items at crate root
pub use bytecode::{
    DecodeError, Flow, Instruction, Instructions, MAX_PROGRAM_SIZE, Opcode, OpcodeInfo,
    OperandKind, Program, ProgramError, dump, escape_byte, format_stack, width_for_count,
};
pub use colors::Colors;
