//! Character scanner with one-character lookahead.
//!
//! The scanner hands out one character per [`Scanner::advance`] call and
//! never re-reads the source. ASCII letters are uppercased on read, so
//! mnemonics and labels are case-insensitive; the raw character stays
//! available for character literals.

use std::str::CharIndices;

use crate::diagnostics::Span;

pub struct Scanner<'s> {
    source: &'s str,
    chars: CharIndices<'s>,
    /// Current character as read, before normalization.
    raw: Option<char>,
    /// Lookahead, as read.
    next: Option<(usize, char)>,
    /// Byte offset of the current character (source length at end of input).
    offset: usize,
    line: u32,
    column: u32,
}

impl<'s> Scanner<'s> {
    /// Create a scanner positioned before the first character.
    ///
    /// Call [`advance`](Self::advance) once to load it.
    pub fn new(source: &'s str) -> Self {
        let mut chars = source.char_indices();
        let next = chars.next();
        Self {
            source,
            chars,
            raw: None,
            next,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Move to the next character and return it normalized.
    ///
    /// Returns `None` once the input is exhausted; further calls keep
    /// returning `None`.
    pub fn advance(&mut self) -> Option<char> {
        match self.next.take() {
            Some((offset, ch)) => {
                self.offset = offset;
                self.raw = Some(ch);
                if ch == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                self.next = self.chars.next();
            }
            None => {
                self.offset = self.source.len();
                self.raw = None;
            }
        }
        self.current()
    }

    /// Current character, uppercased.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.raw.map(|c| c.to_ascii_uppercase())
    }

    /// Current character exactly as it appears in the source.
    #[inline]
    pub fn current_raw(&self) -> Option<char> {
        self.raw
    }

    /// Next character, uppercased, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.next.map(|(_, c)| c.to_ascii_uppercase())
    }

    pub fn is_at_end(&self) -> bool {
        self.raw.is_none()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the current character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Span covering just the current character (empty at end of input).
    pub fn span(&self) -> Span {
        let len = self.raw.map_or(0, char::len_utf8);
        Span::new(self.offset, self.offset + len, self.line, self.column)
    }

    /// Consume characters up to, but not including, the next newline.
    pub fn skip_line(&mut self) {
        while let Some(c) = self.current()
            && c != '\n'
        {
            self.advance();
        }
    }

    /// Consume spaces and tabs. Returns how many were skipped.
    pub fn skip_blanks(&mut self) -> usize {
        let mut skipped = 0;
        while matches!(self.current(), Some(' ' | '\t')) {
            self.advance();
            skipped += 1;
        }
        skipped
    }
}
