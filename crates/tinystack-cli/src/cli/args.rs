//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg`; `run` and `dump` share the program
//! path and color flags, only `run` takes the runtime limits.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Assembly source file (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("INFILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Assembly source file")
}

/// Bytecode output file (positional).
pub fn output_path_arg() -> Arg {
    Arg::new("output_path")
        .value_name("OUTFILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Where to write the bytecode")
}

/// Bytecode input file (positional).
pub fn program_path_arg() -> Arg {
    Arg::new("program_path")
        .value_name("BYTEFILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Bytecode file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u64))
        .help("Stop after executing N instructions")
}

/// Stack depth limit (--stack-limit).
pub fn stack_limit_arg() -> Arg {
    Arg::new("stack_limit")
        .long("stack-limit")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Fault when the stack would grow past N values")
}
