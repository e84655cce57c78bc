use crate::code_buffer::CodeBuffer;
use crate::diagnostics::{ErrorKind, Span};
use crate::symbols::SymbolTable;

fn at(start: usize) -> Span {
    Span::new(start, start + 1, 1, start as u32 + 1)
}

fn placeholders(n: usize) -> CodeBuffer {
    let mut code = CodeBuffer::new();
    for _ in 0..n {
        code.append(0).unwrap();
    }
    code
}

#[test]
fn define_then_reference() {
    let mut table = SymbolTable::new();
    let mut code = placeholders(4);
    table.define_label("LOOP", 0, at(0)).unwrap();
    table.reference_label("LOOP", 3, at(10));

    let labels = table.resolve_all(&mut code).unwrap();
    assert_eq!(labels["LOOP"], 0);
    assert_eq!(code.as_bytes(), [0, 0, 0, 0]);
}

#[test]
fn forward_reference_is_patched() {
    let mut table = SymbolTable::new();
    let mut code = placeholders(4);
    table.reference_label("END", 1, at(0));
    table.reference_label("END", 2, at(5));
    assert!(!table.get("END").unwrap().is_defined());

    table.define_label("END", 3, at(9)).unwrap();
    assert_eq!(table.get("END").unwrap().references.len(), 2);

    table.resolve_all(&mut code).unwrap();
    assert_eq!(code.as_bytes(), [0, 3, 3, 0]);
}

#[test]
fn duplicate_points_at_first_definition() {
    let mut table = SymbolTable::new();
    table.define_label("A", 0, at(0)).unwrap();
    let err = table.define_label("A", 2, at(7)).unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateLabel("A".into()));
    assert_eq!(err.span, at(7));
    let related = err.related.unwrap();
    assert_eq!(related.span, at(0));
    assert_eq!(related.message, "first defined here");
}

#[test]
fn undefined_reported_at_first_use() {
    let mut table = SymbolTable::new();
    let mut code = placeholders(4);
    table.define_label("OK", 0, at(0)).unwrap();
    table.reference_label("MISSING", 1, at(4));
    table.reference_label("MISSING", 3, at(8));

    let err = table.resolve_all(&mut code).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UndefinedLabel("MISSING".into()));
    assert_eq!(err.span, at(4));
}

#[test]
fn insertion_order() {
    let mut table = SymbolTable::new();
    table.reference_label("B", 0, at(0));
    table.define_label("A", 0, at(1)).unwrap();
    table.define_label("B", 1, at(2)).unwrap();

    let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);

    let mut code = placeholders(1);
    let labels = table.resolve_all(&mut code).unwrap();
    assert_eq!(labels.keys().collect::<Vec<_>>(), ["B", "A"]);
}

#[test]
fn unused_definition_resolves() {
    let mut table = SymbolTable::new();
    let mut code = CodeBuffer::new();
    table.define_label("IDLE", 0, at(0)).unwrap();
    assert_eq!(table.resolve_all(&mut code).unwrap()["IDLE"], 0);
}
