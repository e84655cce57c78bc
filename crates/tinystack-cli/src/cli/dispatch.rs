//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields each command declares
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::assemble::AssembleArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::run::RunArgs;

pub struct AssembleParams {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub color: ColorChoice,
}

impl AssembleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: required_path(m, "source_path"),
            output_path: required_path(m, "output_path"),
            color: parse_color(m),
        }
    }
}

impl From<AssembleParams> for AssembleArgs {
    fn from(p: AssembleParams) -> Self {
        Self {
            source_path: p.source_path,
            output_path: p.output_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RunParams {
    pub program_path: PathBuf,
    pub fuel: Option<u64>,
    pub stack_limit: Option<usize>,
    pub debug: bool,
    pub color: ColorChoice,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let debug = std::env::var("DEBUG").ok();
        Self {
            program_path: required_path(m, "program_path"),
            fuel: m.get_one::<u64>("fuel").copied(),
            stack_limit: m.get_one::<usize>("stack_limit").copied(),
            debug: debug_enabled(debug.as_deref()),
            color: parse_color(m),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        Self {
            program_path: p.program_path,
            fuel: p.fuel,
            stack_limit: p.stack_limit,
            debug: p.debug,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub program_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: required_path(m, "program_path"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            program_path: p.program_path,
            color: p.color.should_colorize(),
        }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap requires <{id}>"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Interpret the `DEBUG` environment variable: an integer, enabled above 0.
pub(super) fn debug_enabled(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match value.trim().parse::<i64>() {
        Ok(level) => level > 0,
        Err(_) => {
            tracing::warn!(value, "ignoring non-integer DEBUG value");
            false
        }
    }
}
