//! Byte-offset spans in the `go/token` convention.

use serde::{Deserialize, Serialize};

/// Half-open byte range `[pos, end)` into the source text.
///
/// Offsets are 1-based (`pos = byte_offset + 1`), matching `go/token`
/// positions for a single file with base 1. `(0, 0)` marks a synthesized or
/// absent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub pos: u32,
    pub end: u32,
}

impl Span {
    pub const EMPTY: Span = Span { pos: 0, end: 0 };

    pub fn new(pos: u32, end: u32) -> Self {
        debug_assert!(pos <= end, "span start {pos} past end {end}");
        Self { pos, end }
    }

    /// Build a span from 0-based byte offsets, as reported by tree-sitter.
    pub fn from_byte_range(start_byte: usize, end_byte: usize) -> Self {
        Self::new(to_pos(start_byte), to_pos(end_byte))
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::new(self.pos.min(other.pos), self.end.max(other.end))
    }

    /// Replace the end offset, keeping the start.
    pub fn with_end(self, end: u32) -> Self {
        Self::new(self.pos, end)
    }

    /// True for the `(0, 0)` placeholder span.
    pub fn is_empty(&self) -> bool {
        self.pos == 0 && self.end == 0
    }

    /// Weak containment: equal bounds count as contained.
    pub fn contains(&self, other: &Span) -> bool {
        self.pos <= other.pos && other.end <= self.end
    }

    pub fn len(&self) -> u32 {
        self.end - self.pos
    }
}

fn to_pos(offset: usize) -> u32 {
    u32::try_from(offset).map_or(u32::MAX, |o| o.saturating_add(1))
}
