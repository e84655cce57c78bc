//! Loaded programs.
//!
//! The [`Program`] struct owns the raw bytes of an assembled program and
//! decodes instructions lazily as the VM or the disassembler steps into them.

use super::instruction::{DecodeError, Instruction};

/// Largest program addressable with single-byte operands.
pub const MAX_PROGRAM_SIZE: usize = 256;

/// Program load error.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("program too large: {0} bytes (maximum {MAX_PROGRAM_SIZE})")]
    TooLarge(usize),
}

/// An assembled program, validated to fit the single-byte address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Load a program from owned bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ProgramError> {
        if bytes.len() > MAX_PROGRAM_SIZE {
            return Err(ProgramError::TooLarge(bytes.len()));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the instruction at `pc`.
    #[inline]
    pub fn decode(&self, pc: usize) -> Result<Instruction, DecodeError> {
        Instruction::decode(&self.bytes, pc)
    }

    /// Linear sweep over the program from address 0.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            bytes: &self.bytes,
            pc: 0,
        }
    }

    /// Addresses referenced by JMP/BNZ operands, in ascending order.
    pub fn jump_targets(&self) -> Vec<u8> {
        let mut targets: Vec<u8> = self
            .instructions()
            .filter_map(|(_, decoded)| decoded.ok()?.target())
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }
}

/// Iterator over `(address, decoded instruction)` pairs.
///
/// An illegal byte is reported and skipped so the sweep can continue past
/// it; a truncated operand ends the sweep.
pub struct Instructions<'a> {
    bytes: &'a [u8],
    pc: usize,
}

impl Iterator for Instructions<'_> {
    type Item = (usize, Result<Instruction, DecodeError>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pc >= self.bytes.len() {
            return None;
        }

        let pc = self.pc;
        let decoded = Instruction::decode(self.bytes, pc);
        self.pc = match &decoded {
            Ok(instr) => pc + instr.size(),
            Err(DecodeError::IllegalInstruction { .. }) => pc + 1,
            Err(_) => self.bytes.len(),
        };
        Some((pc, decoded))
    }
}
