//! Shared formatting helpers for the dump and the execution trace.

use std::fmt::Write as _;

/// Minimum width needed to display numbers up to `count - 1`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}

/// Render a byte as a quoted ASCII character, escaping non-printables.
///
/// `b'H'` renders as `'H'`, `b'\n'` as `'\n'`, `0x80` as `'\x80'`.
pub fn escape_byte(byte: u8) -> String {
    format!("'{}'", byte.escape_ascii())
}

/// Render stack contents bottom to top, one bracketed value per slot.
pub fn format_stack(stack: &[u8]) -> String {
    let mut out = String::with_capacity(stack.len() * 4);
    for value in stack {
        write!(out, "[{value}]").expect("String write never fails");
    }
    out
}
