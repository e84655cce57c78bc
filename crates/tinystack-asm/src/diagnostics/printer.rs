//! Builder-pattern printer for rendering assembler errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::{AsmError, Span};

/// Builder for rendering an error against its source text.
pub struct DiagnosticPrinter<'e, 's> {
    error: &'e AsmError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticPrinter<'e, 's> {
    pub fn new(error: &'e AsmError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let error = self.error;
        let message = error.kind.to_string();
        let title = format!("{}: {}", error.category(), message);

        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(error.span, self.source.len()))
                .label(&message),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        if let Some(related) = &error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.span, self.source.len()))
                    .label(&related.message),
            );
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];

        write!(w, "{}", renderer.render(&report))
    }
}

/// Widen empty spans to one character so the caret has something to point at.
fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let start = span.start.min(limit);
    let end = span.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
