use std::io::{self, Write};

use tinystack_asm::assemble;
use tinystack_bytecode::{Colors, dump};

use super::CommandError;
use super::dump::write_listing;

/// Writer whose reader has gone away, like stdout piped into `head`.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn listing_matches_dump() {
    let program = assemble("CONST 1\nPRINT\nHALT")
        .unwrap()
        .into_program()
        .unwrap();
    let mut out = Vec::new();

    write_listing(&program, Colors::OFF, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), dump(&program, Colors::OFF));
}

#[test]
fn closed_stdout_is_write_error() {
    let program = assemble("HALT").unwrap().into_program().unwrap();

    let err = write_listing(&program, Colors::OFF, ClosedPipe).unwrap_err();
    let CommandError::Write { path, source } = err else {
        panic!("expected write error, got {err:?}");
    };
    assert_eq!(path.to_str(), Some("<stdout>"));
    assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
}
