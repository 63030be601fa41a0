//! Lowering: tree-sitter concrete syntax tree into the native Go syntax tree.
//!
//! Each tree-sitter-go node kind maps onto the `go/ast` node Go's own parser
//! would build for the same text. Forms with no counterpart in the syntax
//! model become `Unsupported` leaves. Recursion is bounded by `max_depth`.

mod decl;
mod expr;
mod stmt;

use goviz_core::errors::ParseError;
use goviz_core::types::Diagnostic;
use goviz_core::Span;
use tree_sitter::Node;

use crate::syntax::ast::{BasicLit, File, Ident, Names, Unsupported};
use crate::syntax::LitKind;

pub(crate) struct Lowerer<'s> {
    source: &'s [u8],
    file_name: &'s str,
    depth: usize,
    max_depth: usize,
}

impl<'s> Lowerer<'s> {
    pub(crate) fn new(source: &'s str, file_name: &'s str, max_depth: usize) -> Self {
        Self {
            source: source.as_bytes(),
            file_name,
            depth: 0,
            max_depth,
        }
    }

    /// Lower a `source_file` root.
    pub(crate) fn file(&mut self, root: Node) -> Result<File, ParseError> {
        let mut name = None;
        let mut package_span = None;
        let mut decls = Vec::new();

        for child in named_children(root) {
            if child.kind() == "package_clause" {
                package_span = Some(span_of(child));
                name = named_children(child).into_iter().next().map(|n| self.ident(n));
            } else {
                decls.push(self.top_level(child)?);
            }
        }

        let start = package_span.map(|s| s.pos).or_else(|| decls.first().map(|d| d.span().pos));
        let end = decls
            .last()
            .map(|d| d.span().end)
            .or_else(|| name.as_ref().map(|n: &Ident| n.span.end));
        let span = match (start, end) {
            (Some(pos), Some(end)) => Span::new(pos, end),
            _ => span_of(root),
        };

        Ok(File { span, name, decls })
    }

    // ---- Depth guard ----

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ---- Leaves ----

    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source).unwrap_or("")
    }

    fn ident(&self, node: Node) -> Ident {
        Ident {
            span: span_of(node),
            name: self.text(node).to_string(),
        }
    }

    fn idents(&self, nodes: Vec<Node>) -> Names {
        nodes.into_iter().map(|n| self.ident(n)).collect()
    }

    fn basic_lit(&self, node: Node, kind: LitKind) -> BasicLit {
        BasicLit {
            span: span_of(node),
            kind,
            value: self.text(node).to_string(),
        }
    }

    fn unsupported(&self, node: Node) -> Unsupported {
        tracing::debug!(kind = node.kind(), "lowering unmodelled syntax as unsupported");
        Unsupported {
            span: span_of(node),
            kind: node.kind().to_string(),
        }
    }

    /// A field the grammar guarantees on error-free trees.
    fn required<'t>(&self, node: Node<'t>, field: &str) -> Result<Node<'t>, ParseError> {
        node.child_by_field_name(field).ok_or_else(|| {
            let point = node.start_position();
            ParseError::Syntax {
                file: self.file_name.to_string(),
                diagnostics: vec![Diagnostic::new(
                    u32::try_from(point.row + 1).unwrap_or(u32::MAX),
                    u32::try_from(point.column + 1).unwrap_or(u32::MAX),
                    format!("syntax error: {} without {field}", node.kind()),
                )],
            }
        })
    }
}

// ---- Tree-sitter helpers ----

pub(super) fn span_of(node: Node) -> Span {
    Span::from_byte_range(node.start_byte(), node.end_byte())
}

/// Named children, comments excluded.
pub(super) fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect()
}

/// Named children not attached to any grammar field, comments excluded.
pub(super) fn unfielded_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let mut out = Vec::new();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named() && !child.is_extra() && cursor.field_name().is_none() {
                out.push(child);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    out
}

pub(super) fn field_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children_by_field_name(field, &mut cursor).collect()
}

/// First anonymous token child with the given text.
pub(super) fn token<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let count = node.child_count();
    (0..count)
        .filter_map(|i| node.child(i))
        .find(|c| !c.is_named() && c.kind() == kind)
}

/// Last anonymous token child with the given text.
pub(super) fn last_token<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let count = node.child_count();
    (0..count)
        .rev()
        .filter_map(|i| node.child(i))
        .find(|c| !c.is_named() && c.kind() == kind)
}

/// Span from the start of `open` to the end of `close`, or the node's own
/// span when either delimiter is absent.
pub(super) fn delimited_span(node: Node, open: &str, close: &str) -> Span {
    match (token(node, open), last_token(node, close)) {
        (Some(o), Some(c)) => Span::from_byte_range(o.start_byte(), c.end_byte()),
        _ => span_of(node),
    }
}
