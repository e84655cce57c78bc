//! Terminal styling for listings and execution traces.
//!
//! Each field names what it highlights rather than the hue:
//! - `label`: section headers and jump targets in a listing
//! - `literal`: CONST operands and bytes moved by READ/PRINT
//! - `fault`: undecodable bytes and the trace line that stopped the VM
//! - `muted`: addresses and raw bytes

/// ANSI escape sequences keyed by role.
///
/// With [`Colors::OFF`] every field is empty, so formatting code can
/// interpolate them unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub label: &'static str,
    pub literal: &'static str,
    pub fault: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        label: "\x1b[34m",
        literal: "\x1b[32m",
        fault: "\x1b[31m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        label: "",
        literal: "",
        fault: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
