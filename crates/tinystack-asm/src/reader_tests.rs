use crate::diagnostics::ErrorKind;
use crate::reader::{MAX_LABEL_LEN, read_char, read_label, read_number, read_word};
use crate::scanner::Scanner;

fn scanner(source: &str) -> Scanner<'_> {
    let mut scanner = Scanner::new(source);
    scanner.advance();
    scanner
}

#[test]
fn word_reads_maximal_run() {
    let mut s = scanner("loop_2 rest");
    let word = read_word(&mut s).unwrap();
    assert_eq!(word.text, "LOOP_2");
    assert_eq!(word.span.range(), 0..6);
    assert_eq!(s.current(), Some(' '));
}

#[test]
fn word_empty() {
    let mut s = scanner("-");
    let err = read_word(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyLabel);
}

#[test]
fn word_at_limit() {
    let name = "A".repeat(MAX_LABEL_LEN);
    let mut s = scanner(&name);
    assert_eq!(read_word(&mut s).unwrap().text, name);
}

#[test]
fn word_too_long() {
    let name = "A".repeat(MAX_LABEL_LEN + 1);
    let mut s = scanner(&name);
    let err = read_word(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::LabelTooLong(32));
    assert_eq!(
        err.kind.to_string(),
        "label is 32 characters long (maximum 31)"
    );
}

#[test]
fn label_rejects_leading_digit() {
    let mut s = scanner("1abc");
    let err = read_label(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidLabelStart("1ABC".into()));
}

#[test]
fn number_values() {
    for (source, expected) in [("0", 0), ("7 ", 7), ("042", 42), ("255\n", 255)] {
        let mut s = scanner(source);
        assert_eq!(read_number(&mut s).unwrap(), expected, "{source:?}");
    }
}

#[test]
fn number_stops_at_comment() {
    let mut s = scanner("12#note");
    assert_eq!(read_number(&mut s).unwrap(), 12);
    assert_eq!(s.current(), Some('#'));
}

#[test]
fn number_out_of_range() {
    let mut s = scanner("256");
    assert_eq!(
        read_number(&mut s).unwrap_err().kind,
        ErrorKind::NumberTooLarge("256".into())
    );

    let mut s = scanner("0001");
    assert_eq!(
        read_number(&mut s).unwrap_err().kind,
        ErrorKind::NumberTooLarge("0001".into())
    );
}

#[test]
fn number_with_garbage() {
    let mut s = scanner("12x");
    let err = read_number(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidNumber("12X".into()));
    assert_eq!(err.span.range(), 0..3);
}

#[test]
fn char_plain() {
    let mut s = scanner("'A' ");
    assert_eq!(read_char(&mut s).unwrap(), b'A');
    assert_eq!(s.current(), Some(' '));
}

#[test]
fn char_needs_delimiter_after_quote() {
    let mut s = scanner("'A'HALT");
    let err = read_char(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedChar('H'));
    assert_eq!(err.span.range(), 3..4);

    let mut s = scanner("'A'# comment");
    assert_eq!(read_char(&mut s).unwrap(), b'A');
}

#[test]
fn char_keeps_lowercase() {
    let mut s = scanner("'a'");
    assert_eq!(read_char(&mut s).unwrap(), b'a');
}

#[test]
fn char_escapes() {
    let cases = [
        (r"'\\'", b'\\'),
        (r"'\''", b'\''),
        (r"'\n'", b'\n'),
        (r"'\t'", b'\t'),
        (r"'\r'", b'\r'),
        (r"'\b'", 0x08),
        (r"'\f'", 0x0c),
        (r"'\v'", 0x0b),
        (r"'\0'", 0),
    ];
    for (source, expected) in cases {
        let mut s = scanner(source);
        assert_eq!(read_char(&mut s).unwrap(), expected, "{source}");
    }
}

#[test]
fn char_unsupported_escape() {
    let mut s = scanner(r"'\q'");
    let err = read_char(&mut s).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedEscape('q'));
    assert_eq!(err.kind.to_string(), r"unsupported escape sequence `\q`");
}

#[test]
fn char_escape_letters_are_case_sensitive() {
    let mut s = scanner(r"'\N'");
    assert_eq!(
        read_char(&mut s).unwrap_err().kind,
        ErrorKind::UnsupportedEscape('N')
    );
}

#[test]
fn char_unterminated() {
    for source in ["'A", "'AB'", "'", "'\n'", r"'\"] {
        let mut s = scanner(source);
        assert_eq!(
            read_char(&mut s).unwrap_err().kind,
            ErrorKind::UnterminatedChar,
            "{source:?}"
        );
    }
}

#[test]
fn char_empty() {
    let mut s = scanner("''");
    assert_eq!(read_char(&mut s).unwrap_err().kind, ErrorKind::EmptyCharLiteral);
}

#[test]
fn char_non_ascii() {
    let mut s = scanner("'é'");
    assert_eq!(
        read_char(&mut s).unwrap_err().kind,
        ErrorKind::NonAsciiChar('é')
    );
}
