//! Tracing hooks for observing VM execution.
//!
//! The VM is generic over [`Tracer`]. With [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function and disappears after monomorphization,
//! so untraced runs pay nothing. [`PrintTracer`] renders one line per
//! executed instruction:
//!
//! ```text
//! pc   instr      io       stack
//! 0    CONST 72            [72]
//! 2    PRINT      >'H'
//! 3    HALT
//! ```

use std::io::{self, Write};

use tinystack_bytecode::{Colors, Instruction, escape_byte, format_stack};

use super::error::RuntimeError;

/// Hooks called by the VM during execution.
///
/// For each instruction the VM calls `trace_instruction`, then at most one
/// of `trace_input`/`trace_output`, then `trace_step`. A fault ends the run
/// with `trace_fault` instead of `trace_step`.
pub trait Tracer {
    /// Called before executing an instruction.
    fn trace_instruction(&mut self, pc: usize, instr: &Instruction);

    /// Called after READ consumed a byte ([`EOF_BYTE`](super::EOF_BYTE) at end of input).
    fn trace_input(&mut self, byte: u8);

    /// Called after PRINT wrote a byte.
    fn trace_output(&mut self, byte: u8);

    /// Called after an instruction completed, with the resulting stack.
    fn trace_step(&mut self, stack: &[u8]);

    /// Called once when execution stops on a fault.
    fn trace_fault(&mut self, error: &RuntimeError);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _pc: usize, _instr: &Instruction) {}

    #[inline(always)]
    fn trace_input(&mut self, _byte: u8) {}

    #[inline(always)]
    fn trace_output(&mut self, _byte: u8) {}

    #[inline(always)]
    fn trace_step(&mut self, _stack: &[u8]) {}

    #[inline(always)]
    fn trace_fault(&mut self, _error: &RuntimeError) {}
}

const PC_WIDTH: usize = 3;
const INSTR_WIDTH: usize = 9;
const IO_WIDTH: usize = 7;

#[derive(Clone, Copy, Debug)]
enum Io {
    In(u8),
    Out(u8),
}

/// Tracer that writes a line per instruction as it executes.
///
/// Lines are written immediately so a program that never halts still
/// produces a trace. Write failures do not disturb execution; the first one
/// is kept and returned by [`finish`](Self::finish).
pub struct PrintTracer<W: Write> {
    out: W,
    colors: Colors,
    header_written: bool,
    /// Instruction being executed.
    current: Option<(usize, Instruction)>,
    io: Option<Io>,
    error: Option<io::Error>,
}

impl<W: Write> PrintTracer<W> {
    pub fn new(out: W, colors: Colors) -> Self {
        Self {
            out,
            colors,
            header_written: false,
            current: None,
            io: None,
            error: None,
        }
    }

    /// Return the writer, or the first write error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", line.trim_end()) {
            self.error = Some(err);
        }
    }

    fn write_header(&mut self) {
        if self.header_written {
            return;
        }
        self.header_written = true;
        let header = format!(
            "{:<PC_WIDTH$}  {:<INSTR_WIDTH$}  {:<IO_WIDTH$}  stack",
            "pc", "instr", "io"
        );
        self.write_line(&header);
    }

    fn format_io(&self) -> String {
        let c = &self.colors;
        let text = match self.io {
            Some(Io::In(byte)) => format!("<{}", escape_byte(byte)),
            Some(Io::Out(byte)) => format!(">{}", escape_byte(byte)),
            None => String::new(),
        };
        format!("{}{:<IO_WIDTH$}{}", c.literal, text, c.reset)
    }

    fn format_prefix(&self) -> String {
        let c = &self.colors;
        let (pc, instr) = match &self.current {
            Some((pc, instr)) => (pc.to_string(), instr.to_string()),
            None => (String::new(), String::new()),
        };
        format!("{}{pc:<PC_WIDTH$}{}  {instr:<INSTR_WIDTH$}", c.muted, c.reset)
    }
}

impl<W: Write> Tracer for PrintTracer<W> {
    fn trace_instruction(&mut self, pc: usize, instr: &Instruction) {
        self.write_header();
        self.current = Some((pc, *instr));
        self.io = None;
    }

    fn trace_input(&mut self, byte: u8) {
        self.io = Some(Io::In(byte));
    }

    fn trace_output(&mut self, byte: u8) {
        self.io = Some(Io::Out(byte));
    }

    fn trace_step(&mut self, stack: &[u8]) {
        let line = format!(
            "{}  {}  {}",
            self.format_prefix(),
            self.format_io(),
            format_stack(stack)
        );
        self.write_line(&line);
        self.current = None;
    }

    fn trace_fault(&mut self, error: &RuntimeError) {
        self.write_header();
        let c = self.colors;
        let line = match (&self.current, error.pc()) {
            (Some(_), _) => format!("{}  {}{error}{}", self.format_prefix(), c.fault, c.reset),
            (None, Some(pc)) => {
                format!("{}{pc:<PC_WIDTH$}{}  {}{error}{}", c.muted, c.reset, c.fault, c.reset)
            }
            (None, None) => format!("{}{error}{}", c.fault, c.reset),
        };
        self.write_line(&line);
        self.current = None;
    }
}
