//! Assembler errors and their rendering.
//!
//! Assembly stops at the first error, so there is exactly one [`AsmError`]
//! per failed run. Each error carries the source position it was detected
//! at and, for duplicate labels, the position of the earlier definition.

mod printer;


use std::fmt;

use tinystack_bytecode::{MAX_PROGRAM_SIZE, Opcode};

pub use printer::DiagnosticPrinter;

use crate::reader::MAX_LABEL_LEN;

/// Source location: byte range plus the line/column of its first character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Extend this span to cover everything up to `end`.
    pub fn to(self, end: usize) -> Self {
        Self {
            end: end.max(self.start),
            ..self
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Error taxonomy class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed characters or literals.
    Lexical,
    /// Well-formed tokens in the wrong shape.
    Syntax,
    /// Valid syntax referring to things that do not exist or clash.
    Semantic,
    /// Limits of the output format.
    Resource,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical error"),
            Self::Syntax => write!(f, "syntax error"),
            Self::Semantic => write!(f, "semantic error"),
            Self::Resource => write!(f, "resource error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    // Lexical
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unsupported escape sequence `\\{0}`")]
    UnsupportedEscape(char),
    #[error("empty character literal")]
    EmptyCharLiteral,
    #[error("character {0:?} is not ASCII")]
    NonAsciiChar(char),

    // Syntax
    #[error("{0} expects an operand")]
    ExpectedOperand(Opcode),
    #[error("expected space or tab after {0}")]
    ExpectedSeparator(Opcode),
    #[error("label is {0} characters long (maximum {MAX_LABEL_LEN})")]
    LabelTooLong(usize),
    #[error("expected a label name")]
    EmptyLabel,
    #[error("label `{0}` starts with a digit")]
    InvalidLabelStart(String),
    #[error("number `{0}` does not fit in a byte")]
    NumberTooLarge(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    // Semantic
    #[error("label `{0}` is already defined")]
    DuplicateLabel(String),
    #[error("label `{0}` is not defined")]
    UndefinedLabel(String),
    #[error("unknown instruction `{0}`")]
    UnknownInstruction(String),

    // Resource
    #[error("program exceeds {MAX_PROGRAM_SIZE} bytes")]
    ProgramTooLarge,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedChar(_)
            | Self::UnterminatedChar
            | Self::UnsupportedEscape(_)
            | Self::EmptyCharLiteral
            | Self::NonAsciiChar(_) => ErrorCategory::Lexical,

            Self::ExpectedOperand(_)
            | Self::ExpectedSeparator(_)
            | Self::LabelTooLong(_)
            | Self::EmptyLabel
            | Self::InvalidLabelStart(_)
            | Self::NumberTooLarge(_)
            | Self::InvalidNumber(_) => ErrorCategory::Syntax,

            Self::DuplicateLabel(_) | Self::UndefinedLabel(_) | Self::UnknownInstruction(_) => {
                ErrorCategory::Semantic
            }

            Self::ProgramTooLarge => ErrorCategory::Resource,
        }
    }
}

/// Secondary location attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Related {
    pub span: Span,
    pub message: String,
}

/// A fatal assembly error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}:{}: {}", .span.line, .span.column, .kind)]
pub struct AsmError {
    pub kind: ErrorKind,
    pub span: Span,
    pub related: Option<Related>,
}

impl AsmError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            related: None,
        }
    }

    pub fn related_to(mut self, message: impl Into<String>, span: Span) -> Self {
        self.related = Some(Related {
            span,
            message: message.into(),
        });
        self
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn line(&self) -> u32 {
        self.span.line
    }

    pub fn column(&self) -> u32 {
        self.span.column
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> DiagnosticPrinter<'e, 's> {
        DiagnosticPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}
