use std::io::{self, Write};
use std::path::PathBuf;

use tinystack_bytecode::{Colors, Program, dump};

use super::CommandError;
use super::program_loader::load_program;

pub struct DumpArgs {
    pub program_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) -> Result<(), CommandError> {
    let program = load_program(&args.program_path)?;
    write_listing(&program, Colors::new(args.color), io::stdout().lock())
}

/// Write the disassembly of `program` to `out`.
pub fn write_listing(
    program: &Program,
    colors: Colors,
    mut out: impl Write,
) -> Result<(), CommandError> {
    out.write_all(dump(program, colors).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| CommandError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
