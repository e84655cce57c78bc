//! Stack virtual machine for tinystack bytecode.
//!
//! The VM runs a fully loaded [`Program`](tinystack_bytecode::Program)
//! against a growable operand stack, reading and writing single bytes.

pub mod engine;

pub use engine::{
    EOF_BYTE, Limits, NoopTracer, OperandStack, Outcome, PrintTracer, RuntimeError, Tracer, VM,
    VMBuilder,
};
