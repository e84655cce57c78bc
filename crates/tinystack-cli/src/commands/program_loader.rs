//! Load bytecode files for `run` and `dump`.

use std::path::Path;

use tinystack_bytecode::Program;

use super::CommandError;

pub fn load_program(path: &Path) -> Result<Program, CommandError> {
    let bytes = std::fs::read(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), size = bytes.len(), "loaded program");

    Program::from_bytes(bytes).map_err(|source| CommandError::Program {
        path: path.to_path_buf(),
        source,
    })
}
