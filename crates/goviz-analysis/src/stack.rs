//! Stack growth for the recursive tree walks.
//!
//! Lowering, transduction, and serialization recurse once per nesting level.
//! A debug-build frame on those paths runs to tens of kilobytes, so a chain
//! of a few hundred operators would overflow a 2 MB thread. Every recursive
//! entry point goes through [`guarded`], which moves onto a fresh heap
//! segment when the remaining stack runs low. The nesting limit stays the
//! only way deep input fails.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 256 * 1024;

/// Size of each newly allocated segment.
const STACK_GROWTH: usize = 4 * 1024 * 1024;

#[inline]
pub(crate) fn guarded<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}
