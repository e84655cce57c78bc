//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tinystack")
        .about("Assembler and virtual machine for a tiny stack machine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(assemble_command())
        .subcommand(run_command())
        .subcommand(dump_command())
}

/// Translate assembly source into bytecode.
pub fn assemble_command() -> Command {
    Command::new("assemble")
        .about("Assemble a source file into bytecode")
        .after_help(
            r#"EXAMPLES:
  tinystack assemble hello.tsa hello.bin
  tinystack assemble hello.tsa hello.bin --color never"#,
        )
        .arg(source_path_arg())
        .arg(output_path_arg())
        .arg(color_arg())
}

/// Execute bytecode.
pub fn run_command() -> Command {
    Command::new("run")
        .about("Execute a bytecode file")
        .after_help(
            r#"EXAMPLES:
  tinystack run hello.bin
  tinystack run loop.bin --fuel 1000   # stop runaway loops
  DEBUG=1 tinystack run hello.bin      # per-instruction trace on stderr

ENVIRONMENT:
  DEBUG     integer; values above 0 enable the execution trace
  RUST_LOG  log filter (default: warn)"#,
        )
        .arg(program_path_arg())
        .arg(fuel_arg())
        .arg(stack_limit_arg())
        .arg(color_arg())
}

/// Show a disassembly listing.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Disassemble a bytecode file")
        .after_help(
            r#"EXAMPLES:
  tinystack dump hello.bin
  tinystack dump hello.bin --color always | less -R"#,
        )
        .arg(program_path_arg())
        .arg(color_arg())
}
