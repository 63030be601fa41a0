//! Syntax diagnostics from ERROR and MISSING nodes.

use goviz_core::types::Diagnostic;
use tree_sitter::Node;

use crate::stack::guarded;

/// Longest snippet of offending source quoted in a message.
const SNIPPET_CHARS: usize = 24;

/// Collect one diagnostic per error region, in document order.
///
/// Descends only into subtrees that contain errors and stops at the first
/// ERROR or MISSING node on each path, so a region is reported once.
pub fn collect_diagnostics(root: Node, source: &[u8]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    collect(root, source, &mut diagnostics);
    diagnostics.dedup_by(|a, b| a.line == b.line && a.column == b.column);
    diagnostics
}

fn collect(node: Node, source: &[u8], out: &mut Vec<Diagnostic>) {
    if node.is_missing() {
        out.push(diagnostic_at(node, format!("syntax error: missing {}", node.kind())));
        return;
    }
    if node.is_error() {
        let snippet = snippet(node, source);
        let message = if snippet.is_empty() {
            "syntax error: unexpected end of input".to_string()
        } else {
            format!("syntax error: unexpected {snippet}")
        };
        out.push(diagnostic_at(node, message));
        return;
    }
    if !node.has_error() {
        return;
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            guarded(|| collect(child, source, out));
        }
    }
}

fn diagnostic_at(node: Node, message: String) -> Diagnostic {
    let point = node.start_position();
    Diagnostic::new(to_one_based(point.row), to_one_based(point.column), message)
}

fn to_one_based(n: usize) -> u32 {
    u32::try_from(n).map_or(u32::MAX, |n| n.saturating_add(1))
}

/// First line of the node's text, trimmed and shortened.
fn snippet(node: Node, source: &[u8]) -> String {
    let text = node.utf8_text(source).unwrap_or("");
    let line = text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    if line.chars().count() > SNIPPET_CHARS {
        let cut: String = line.chars().take(SNIPPET_CHARS).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}
