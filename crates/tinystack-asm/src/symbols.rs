//! Label definitions, pending references and the final patch pass.
//!
//! Every label gets one [`Symbol`] regardless of whether it was seen first
//! as a definition or as a jump operand. References are recorded as the
//! byte offset of the operand placeholder; [`SymbolTable::resolve_all`]
//! writes the definition address into each of them once the whole source
//! has been read.

use indexmap::IndexMap;

use crate::code_buffer::CodeBuffer;
use crate::diagnostics::{AsmError, ErrorKind, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Definition {
    pub address: u8,
    pub span: Span,
}

/// An operand byte waiting for a label address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseSite {
    pub offset: usize,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub definition: Option<Definition>,
    pub references: Vec<UseSite>,
}

impl Symbol {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            definition: None,
            references: Vec::new(),
        }
    }

    pub fn is_defined(&self) -> bool {
        self.definition.is_some()
    }
}

/// Labels in first-mention order.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut Symbol {
        self.symbols
            .entry(name.to_owned())
            .or_insert_with(|| Symbol::new(name))
    }

    /// Bind `name` to `address`.
    ///
    /// A second definition is an error pointing back at the first one.
    pub fn define_label(&mut self, name: &str, address: u8, span: Span) -> Result<(), AsmError> {
        let symbol = self.entry(name);
        if let Some(previous) = symbol.definition {
            return Err(AsmError::new(ErrorKind::DuplicateLabel(name.to_owned()), span)
                .related_to("first defined here", previous.span));
        }
        symbol.definition = Some(Definition { address, span });
        Ok(())
    }

    /// Record that the operand byte at `offset` must hold the address of `name`.
    pub fn reference_label(&mut self, name: &str, offset: usize, span: Span) {
        self.entry(name).references.push(UseSite { offset, span });
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    /// Patch every recorded reference with its label's address.
    ///
    /// Consumes the table, so resolution happens exactly once. Fails on the
    /// first label (in first-mention order) that was referenced but never
    /// defined, reporting it at its first use. Returns the defined labels
    /// and their addresses.
    pub fn resolve_all(self, code: &mut CodeBuffer) -> Result<IndexMap<String, u8>, AsmError> {
        let mut labels = IndexMap::with_capacity(self.symbols.len());

        for (name, symbol) in self.symbols {
            let Some(definition) = symbol.definition else {
                // A symbol only exists because it was defined or referenced.
                let span = symbol.references.first().map(|r| r.span).unwrap_or_default();
                return Err(AsmError::new(ErrorKind::UndefinedLabel(name), span));
            };

            for site in &symbol.references {
                code.patch(site.offset, definition.address);
            }
            tracing::trace!(
                label = %name,
                address = definition.address,
                patched = symbol.references.len(),
                "resolved label"
            );
            labels.insert(name, definition.address);
        }

        Ok(labels)
    }
}
