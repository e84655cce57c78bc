//! Word and literal readers.
//!
//! Every reader starts at the scanner's current character (already consumed
//! by the caller) and leaves the scanner on the first character after the
//! token.

use crate::diagnostics::{AsmError, ErrorKind, Span};
use crate::scanner::Scanner;

/// Longest label or mnemonic, in characters.
pub const MAX_LABEL_LEN: usize = 31;

/// Longest decimal literal, in digits.
pub const MAX_NUMBER_DIGITS: usize = 3;

/// An identifier with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub span: Span,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Read a maximal run of `A-Z`, `0-9` and `_`.
pub fn read_word(scanner: &mut Scanner<'_>) -> Result<Word, AsmError> {
    let start = scanner.span();
    let mut text = String::new();

    while let Some(c) = scanner.current()
        && is_word_char(c)
    {
        text.push(c);
        scanner.advance();
    }

    let span = start.to(scanner.offset());
    if text.is_empty() {
        return Err(AsmError::new(ErrorKind::EmptyLabel, span));
    }
    if text.len() > MAX_LABEL_LEN {
        return Err(AsmError::new(ErrorKind::LabelTooLong(text.len()), span));
    }

    Ok(Word { text, span })
}

/// Read a label name: a word whose first character is not a digit.
pub fn read_label(scanner: &mut Scanner<'_>) -> Result<Word, AsmError> {
    let word = read_word(scanner)?;
    if word.text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(AsmError::new(
            ErrorKind::InvalidLabelStart(word.text),
            word.span,
        ));
    }
    Ok(word)
}

/// Read a decimal literal in `0..=255`.
///
/// The literal runs until whitespace, a comment, or end of input.
pub fn read_number(scanner: &mut Scanner<'_>) -> Result<u8, AsmError> {
    let start = scanner.span();
    let mut text = String::new();

    while let Some(c) = scanner.current()
        && !c.is_ascii_whitespace()
        && c != '#'
    {
        text.push(c);
        scanner.advance();
    }

    let span = start.to(scanner.offset());
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(AsmError::new(ErrorKind::InvalidNumber(text), span));
    }
    if text.len() > MAX_NUMBER_DIGITS {
        return Err(AsmError::new(ErrorKind::NumberTooLarge(text), span));
    }

    match text.parse::<u16>() {
        Ok(value) => u8::try_from(value)
            .map_err(|_| AsmError::new(ErrorKind::NumberTooLarge(text), span)),
        Err(_) => Err(AsmError::new(ErrorKind::InvalidNumber(text), span)),
    }
}

/// Byte value of the escape `\c`.
fn escape_value(c: char) -> Option<u8> {
    let value = match c {
        '\\' => b'\\',
        '\'' => b'\'',
        'n' => b'\n',
        't' => b'\t',
        'r' => b'\r',
        'b' => 0x08,
        'f' => 0x0c,
        'v' => 0x0b,
        '0' => 0,
        _ => return None,
    };
    Some(value)
}

/// Read a character literal: `'x'` or `'\x'`.
///
/// Reads the raw source characters, so `'a'` is 97 even though the scanner
/// normalizes letters elsewhere. Like a number, the literal must be followed
/// by whitespace, a comment, or end of input.
pub fn read_char(scanner: &mut Scanner<'_>) -> Result<u8, AsmError> {
    let start = scanner.span();
    let unterminated = |scanner: &Scanner<'_>| {
        AsmError::new(ErrorKind::UnterminatedChar, start.to(scanner.offset()))
    };

    scanner.advance();
    let value = match scanner.current_raw() {
        None | Some('\n') => return Err(unterminated(scanner)),
        Some('\'') => {
            let span = start.to(scanner.offset() + 1);
            return Err(AsmError::new(ErrorKind::EmptyCharLiteral, span));
        }
        Some('\\') => {
            scanner.advance();
            match scanner.current_raw() {
                None | Some('\n') => return Err(unterminated(scanner)),
                Some(c) => escape_value(c).ok_or_else(|| {
                    let span = start.to(scanner.offset() + c.len_utf8());
                    AsmError::new(ErrorKind::UnsupportedEscape(c), span)
                })?,
            }
        }
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => return Err(AsmError::new(ErrorKind::NonAsciiChar(c), scanner.span())),
    };

    scanner.advance();
    if scanner.current_raw() != Some('\'') {
        return Err(unterminated(scanner));
    }
    scanner.advance();

    match scanner.current_raw() {
        None | Some('#') => Ok(value),
        Some(c) if c.is_ascii_whitespace() => Ok(value),
        Some(c) => Err(AsmError::new(ErrorKind::UnexpectedChar(c), scanner.span())),
    }
}
