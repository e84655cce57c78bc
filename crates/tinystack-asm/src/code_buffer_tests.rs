use tinystack_bytecode::MAX_PROGRAM_SIZE;

use crate::code_buffer::{CodeBuffer, Overflow};

#[test]
fn append_returns_offsets() {
    let mut code = CodeBuffer::new();
    assert_eq!(code.current_offset(), 0);
    assert_eq!(code.append(1), Ok(0));
    assert_eq!(code.append(7), Ok(1));
    assert_eq!(code.current_offset(), 2);
    assert_eq!(code.as_bytes(), [1, 7]);
}

#[test]
fn capacity_doubles() {
    let mut code = CodeBuffer::new();
    assert_eq!(code.capacity(), 0);

    let mut seen = Vec::new();
    for i in 0..9 {
        code.append(i).unwrap();
        if seen.last() != Some(&code.capacity()) {
            seen.push(code.capacity());
        }
    }

    // reserve_exact may round up, but each step at least doubles
    for pair in seen.windows(2) {
        assert!(pair[1] >= pair[0] * 2, "{seen:?}");
    }
    assert!(code.capacity() >= 9);
}

#[test]
fn patch_overwrites() {
    let mut code = CodeBuffer::new();
    code.append(6).unwrap();
    let site = code.append(0).unwrap();
    code.patch(site, 42);
    assert_eq!(code.into_bytes(), [6, 42]);
}

#[test]
#[should_panic(expected = "patch offset 3 past end of buffer")]
fn patch_past_end_panics() {
    let mut code = CodeBuffer::new();
    code.append(0).unwrap();
    code.patch(3, 1);
}

#[test]
fn append_stops_at_ceiling() {
    let mut code = CodeBuffer::new();
    for _ in 0..MAX_PROGRAM_SIZE {
        code.append(0).unwrap();
    }
    assert_eq!(code.append(0), Err(Overflow));
    assert_eq!(code.len(), MAX_PROGRAM_SIZE);
}
