//! Errors surfaced by CLI commands.

use std::io;
use std::path::PathBuf;

use tinystack_bytecode::ProgramError;
use tinystack_vm::RuntimeError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Assembly failed; holds the rendered diagnostic.
    #[error("{0}")]
    Assemble(String),

    #[error("`{}`: {source}", path.display())]
    Program {
        path: PathBuf,
        source: ProgramError,
    },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CommandError {
    /// Print to stderr the way the user should see it.
    pub fn report(&self) {
        match self {
            Self::Assemble(rendered) => eprintln!("{rendered}"),
            other => eprintln!("error: {other}"),
        }
    }
}
