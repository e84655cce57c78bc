mod cli;
mod commands;

use cli::{AssembleParams, DumpParams, RunParams, build_cli};
use tracing_subscriber::{EnvFilter, fmt};

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("assemble", m)) => {
            let params = AssembleParams::from_matches(m);
            commands::assemble::run(params.into())
        }
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params.into())
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        err.report();
        std::process::exit(1);
    }
}
