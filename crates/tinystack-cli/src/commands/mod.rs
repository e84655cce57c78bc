pub mod assemble;
pub mod dump;
pub mod error;
pub mod program_loader;
pub mod run;

#[cfg(test)]
mod dump_tests;

pub use error::CommandError;
