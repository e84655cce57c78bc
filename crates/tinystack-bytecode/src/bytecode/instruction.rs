//! Decoded instructions.

use std::fmt;

use super::opcode::{Opcode, OperandKind};

/// Failure to decode an instruction at a given program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("illegal instruction {byte:#04x} at address {pc}")]
    IllegalInstruction { pc: usize, byte: u8 },

    #[error("program ended at address {pc} without HALT")]
    EndOfProgram { pc: usize },

    #[error("{opcode} at address {pc} is missing its operand")]
    MissingOperand { pc: usize, opcode: Opcode },
}

impl DecodeError {
    /// Address at which decoding failed.
    pub fn pc(&self) -> usize {
        match *self {
            Self::IllegalInstruction { pc, .. }
            | Self::EndOfProgram { pc }
            | Self::MissingOperand { pc, .. } => pc,
        }
    }
}

/// One decoded instruction: an opcode and, for CONST/JMP/BNZ, its operand byte.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: Option<u8>,
}

impl Instruction {
    /// Zero-operand instruction.
    pub fn new(opcode: Opcode) -> Self {
        debug_assert!(!opcode.has_operand(), "{opcode} requires an operand");
        Self {
            opcode,
            operand: None,
        }
    }

    /// Instruction with its operand byte.
    pub fn with_operand(opcode: Opcode, operand: u8) -> Self {
        debug_assert!(opcode.has_operand(), "{opcode} takes no operand");
        Self {
            opcode,
            operand: Some(operand),
        }
    }

    /// Decode the instruction starting at `pc`.
    pub fn decode(bytes: &[u8], pc: usize) -> Result<Self, DecodeError> {
        let Some(&byte) = bytes.get(pc) else {
            return Err(DecodeError::EndOfProgram { pc });
        };
        let opcode =
            Opcode::from_byte(byte).ok_or(DecodeError::IllegalInstruction { pc, byte })?;

        if !opcode.has_operand() {
            return Ok(Self::new(opcode));
        }

        let operand = bytes
            .get(pc + 1)
            .copied()
            .ok_or(DecodeError::MissingOperand { pc, opcode })?;
        Ok(Self::with_operand(opcode, operand))
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.opcode.size()
    }

    /// Jump target for JMP/BNZ.
    pub fn target(&self) -> Option<u8> {
        match self.opcode.operand() {
            OperandKind::Address => self.operand,
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Some(operand) => write!(f, "{} {}", self.opcode, operand),
            None => write!(f, "{}", self.opcode),
        }
    }
}
