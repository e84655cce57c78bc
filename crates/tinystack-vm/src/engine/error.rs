//! Faults that stop execution.

use tinystack_bytecode::{DecodeError, Opcode};

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// An instruction needed more values than the stack holds.
    #[error("stack underflow: {opcode} at address {pc} needs {needed} value(s), found {depth}")]
    StackUnderflow {
        pc: usize,
        opcode: Opcode,
        needed: usize,
        depth: usize,
    },

    #[error("illegal instruction {byte:#04x} at address {pc}")]
    IllegalInstruction { pc: usize, byte: u8 },

    /// Control ran past the last byte, or an operand is cut off.
    #[error("unexpected end of program at address {pc}")]
    UnexpectedTermination { pc: usize },

    /// Configured stack limit exceeded.
    #[error("stack overflow at address {pc} (limit {limit})")]
    StackOverflow { pc: usize, limit: usize },

    /// Execution fuel exhausted (too many instructions).
    #[error("runtime execution limit exceeded ({0} steps)")]
    ExecFuelExhausted(u64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Address of the faulting instruction, when there is one.
    pub fn pc(&self) -> Option<usize> {
        match *self {
            Self::StackUnderflow { pc, .. }
            | Self::IllegalInstruction { pc, .. }
            | Self::UnexpectedTermination { pc }
            | Self::StackOverflow { pc, .. } => Some(pc),
            Self::ExecFuelExhausted(_) | Self::Io(_) => None,
        }
    }
}

impl From<DecodeError> for RuntimeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::IllegalInstruction { pc, byte } => Self::IllegalInstruction { pc, byte },
            DecodeError::EndOfProgram { pc } | DecodeError::MissingOperand { pc, .. } => {
                Self::UnexpectedTermination { pc }
            }
        }
    }
}
