use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use tinystack_bytecode::{Colors, Program};
use tinystack_vm::{Outcome, PrintTracer, VM};

use super::CommandError;
use super::program_loader::load_program;

pub struct RunArgs {
    pub program_path: PathBuf,
    pub fuel: Option<u64>,
    pub stack_limit: Option<usize>,
    /// Write the per-instruction trace to stderr.
    pub debug: bool,
    pub color: bool,
}

pub fn run(args: RunArgs) -> Result<(), CommandError> {
    let program = load_program(&args.program_path)?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let stderr = io::stderr().lock();

    execute(&program, &args, stdin, stdout, stderr)?;
    Ok(())
}

/// Run `program` with the limits and tracing from `args`.
pub fn execute<R: Read, W: Write, E: Write>(
    program: &Program,
    args: &RunArgs,
    input: R,
    output: W,
    trace_out: E,
) -> Result<Outcome, CommandError> {
    let mut builder = VM::builder(program);
    if let Some(fuel) = args.fuel {
        builder = builder.exec_fuel(fuel);
    }
    if let Some(limit) = args.stack_limit {
        builder = builder.stack_limit(limit);
    }
    let vm = builder.build();

    if !args.debug {
        return Ok(vm.execute(input, output)?);
    }

    let mut tracer = PrintTracer::new(trace_out, Colors::new(args.color));
    let result = vm.execute_with(input, output, &mut tracer);
    if let Err(err) = tracer.finish() {
        tracing::warn!(%err, "trace output failed");
    }
    Ok(result?)
}
