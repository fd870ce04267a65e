use std::fmt::Display;

use crate::{ast::ast::NodePath, Span};

/// A non-fatal semantic problem found by the checker, bound to the node it
/// was reported on.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    path: NodePath,
    span: Span,
    message: String,
}

impl Diagnostic {
    pub fn new(path: NodePath, span: Span, message: impl Into<String>) -> Self {
        Diagnostic {
            path,
            span,
            message: message.into(),
        }
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERROR: {}", self.message)
    }
}

/// Accumulates diagnostics while a pass walks the tree.
///
/// Reports may arrive in any order; `into_sorted` returns them in pre-order
/// of the nodes they are attached to, keeping report order for diagnostics
/// on the same node.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn report(&mut self, path: &NodePath, span: &Span, message: impl Into<String>) {
        self.entries
            .push(Diagnostic::new(path.clone(), span.clone(), message));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut entries = self.entries;
        // sort_by is stable
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }
}
