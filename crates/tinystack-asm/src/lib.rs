//! tinystack assembler: source text to bytecode in a single pass.
//!
//! Pipeline:
//! - `scanner` - character stream with one-character lookahead
//! - `reader` - identifiers, numeric and character literals
//! - `symbols` - label table and the end-of-input patch pass
//! - `code_buffer` - growable output bytes
//! - `assembler` - driver tying the above together
//! - `diagnostics` - errors and their rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod assembler;
pub mod code_buffer;
pub mod diagnostics;
pub mod reader;
pub mod scanner;
pub mod symbols;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod code_buffer_tests;
#[cfg(test)]
mod reader_tests;
#[cfg(test)]
mod symbols_tests;

pub use assembler::{Assembler, Assembly, assemble};
pub use code_buffer::CodeBuffer;
pub use diagnostics::{AsmError, DiagnosticPrinter, ErrorCategory, ErrorKind, Span};
pub use symbols::SymbolTable;
