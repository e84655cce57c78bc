//! Single-pass assembler driver.
//!
//! Lexing and code generation are interleaved: each instruction is emitted
//! as soon as its mnemonic and operand are read. Jump operands are emitted
//! as placeholders and patched by the symbol table once the whole source
//! has been consumed.

use indexmap::IndexMap;
use tinystack_bytecode::{Opcode, OperandKind, Program, ProgramError};

use crate::code_buffer::CodeBuffer;
use crate::diagnostics::{AsmError, ErrorKind, Span};
use crate::reader::{read_char, read_label, read_number, read_word};
use crate::scanner::Scanner;
use crate::symbols::SymbolTable;

/// Output of a successful assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    pub bytes: Vec<u8>,
    /// Every label, in first-mention order, with its address.
    pub labels: IndexMap<String, u8>,
}

impl Assembly {
    pub fn into_program(self) -> Result<Program, ProgramError> {
        Program::from_bytes(self.bytes)
    }
}

/// Assembler state for one source text.
pub struct Assembler<'s> {
    scanner: Scanner<'s>,
    symbols: SymbolTable,
    code: CodeBuffer,
}

impl<'s> Assembler<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            scanner: Scanner::new(source),
            symbols: SymbolTable::new(),
            code: CodeBuffer::new(),
        }
    }

    /// Assemble the whole source, stopping at the first error.
    pub fn assemble(mut self) -> Result<Assembly, AsmError> {
        self.scanner.advance();

        while let Some(c) = self.scanner.current() {
            match c {
                c if c.is_ascii_whitespace() => {
                    self.scanner.advance();
                }
                '#' => self.scanner.skip_line(),
                '.' => self.label_definition()?,
                c if c.is_ascii_alphabetic() => self.instruction()?,
                _ => return Err(self.unexpected_char()),
            }
        }

        tracing::debug!(
            bytes = self.code.len(),
            labels = self.symbols.len(),
            "end of input, resolving labels"
        );

        let Self {
            symbols, mut code, ..
        } = self;
        let labels = symbols.resolve_all(&mut code)?;

        Ok(Assembly {
            bytes: code.into_bytes(),
            labels,
        })
    }

    fn unexpected_char(&self) -> AsmError {
        let c = self.scanner.current_raw().unwrap_or_default();
        AsmError::new(ErrorKind::UnexpectedChar(c), self.scanner.span())
    }

    /// `.NAME` binds `NAME` to the offset of the next emitted byte.
    fn label_definition(&mut self) -> Result<(), AsmError> {
        let dot = self.scanner.span();
        self.scanner.advance();

        let word = read_label(&mut self.scanner)?;
        let span = dot.to(word.span.end);
        let address = u8::try_from(self.code.current_offset())
            .map_err(|_| AsmError::new(ErrorKind::ProgramTooLarge, span))?;

        tracing::debug!(label = %word.text, address, "label defined");
        self.symbols.define_label(&word.text, address, span)
    }

    fn instruction(&mut self) -> Result<(), AsmError> {
        let word = read_word(&mut self.scanner)?;
        let opcode = Opcode::from_mnemonic(&word.text).ok_or_else(|| {
            AsmError::new(ErrorKind::UnknownInstruction(word.text.clone()), word.span)
        })?;

        self.emit(opcode.byte(), word.span)?;

        match opcode.operand() {
            OperandKind::None => Ok(()),
            OperandKind::Immediate => {
                self.separator(opcode)?;
                let value = match self.scanner.current() {
                    Some(c) if c.is_ascii_digit() => read_number(&mut self.scanner)?,
                    Some('\'') => read_char(&mut self.scanner)?,
                    _ => {
                        return Err(AsmError::new(
                            ErrorKind::ExpectedOperand(opcode),
                            self.scanner.span(),
                        ));
                    }
                };
                self.emit(value, word.span)?;
                Ok(())
            }
            OperandKind::Address => {
                self.separator(opcode)?;
                let label = read_label(&mut self.scanner)?;
                let offset = self.emit(0, label.span)?;
                self.symbols.reference_label(&label.text, offset, label.span);
                Ok(())
            }
        }
    }

    /// Require at least one space or tab between a mnemonic and its operand.
    fn separator(&mut self, opcode: Opcode) -> Result<(), AsmError> {
        if self.scanner.skip_blanks() > 0 {
            return Ok(());
        }
        let kind = match self.scanner.current() {
            None | Some('\n' | '\r' | '#') => ErrorKind::ExpectedOperand(opcode),
            Some(_) => ErrorKind::ExpectedSeparator(opcode),
        };
        Err(AsmError::new(kind, self.scanner.span()))
    }

    fn emit(&mut self, byte: u8, span: Span) -> Result<usize, AsmError> {
        self.code
            .append(byte)
            .map_err(|_| AsmError::new(ErrorKind::ProgramTooLarge, span))
    }
}

/// Assemble `source` into bytecode.
pub fn assemble(source: &str) -> Result<Assembly, AsmError> {
    Assembler::new(source).assemble()
}
