//! Offset and line/column conversion, and hit-testing against a visual tree.

use serde::Serialize;

use crate::engine::visual::VisualNode;
use crate::stack::guarded;

/// 1-based line and column, with the 0-based byte offset they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

/// Line table over one source text. Lines split on `\n`; columns count bytes.
#[derive(Debug, Clone)]
pub struct PositionMapper {
    line_offsets: Vec<usize>,
}

impl PositionMapper {
    pub fn new(source: &str) -> Self {
        let mut line_offsets = vec![0];
        line_offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_offsets }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        let line = self
            .line_offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        Position {
            line: line + 1,
            column: offset - self.line_offsets[line] + 1,
            offset,
        }
    }

    /// Byte offset of a 1-based position. `None` when the line does not exist.
    pub fn position_to_offset(&self, line: usize, column: usize) -> Option<usize> {
        let start = *self.line_offsets.get(line.checked_sub(1)?)?;
        Some(start + column.saturating_sub(1))
    }

    /// Deepest node whose inclusive `[pos, end]` range holds `pos`.
    ///
    /// `pos` uses the 1-based convention of node spans, so a byte offset `o`
    /// is looked up as `o + 1`. Children are searched in order and the first
    /// match wins.
    pub fn find_node_at_offset<'n>(&self, node: &'n VisualNode, pos: u32) -> Option<&'n VisualNode> {
        if pos < node.span.pos || pos > node.span.end {
            return None;
        }
        node.children
            .iter()
            .find_map(|child| guarded(|| self.find_node_at_offset(child, pos)))
            .or(Some(node))
    }
}
