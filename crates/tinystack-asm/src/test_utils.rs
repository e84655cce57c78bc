//! Test helpers.

use crate::{AsmError, ErrorKind, assemble};

/// Assemble `source`, panicking with the rendered diagnostic on failure.
pub fn bytes(source: &str) -> Vec<u8> {
    match assemble(source) {
        Ok(assembly) => assembly.bytes,
        Err(err) => panic!("expected success, got:\n{}", err.render(source)),
    }
}

/// Assemble `source`, expecting it to fail.
pub fn error(source: &str) -> AsmError {
    match assemble(source) {
        Ok(assembly) => panic!("expected an error, got bytes {:?}", assembly.bytes),
        Err(err) => err,
    }
}

pub fn error_kind(source: &str) -> ErrorKind {
    error(source).kind
}
