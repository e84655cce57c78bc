//! Execution engine: operand stack, dispatch loop and tracing hooks.

mod error;
mod stack;
mod trace;
mod vm;

#[cfg(test)]
mod trace_tests;

pub use error::RuntimeError;
pub use stack::OperandStack;
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use vm::{EOF_BYTE, Limits, Outcome, VM, VMBuilder};
