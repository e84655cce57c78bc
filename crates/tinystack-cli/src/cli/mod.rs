mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{AssembleParams, DumpParams, RunParams};

/// `--color` setting shared by every subcommand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve `Auto` against the terminals the VM and diagnostics write to.
    pub fn should_colorize(self) -> bool {
        use std::io::IsTerminal;

        match self {
            Self::Always => true,
            Self::Never => false,
            // Plain text as soon as either stream is redirected.
            Self::Auto => std::io::stdout().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}
