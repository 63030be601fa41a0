//! Tree-sitter parser subsystem: one thread_local Go parser, syntax
//! diagnostics, and lowering into the native syntax tree.

pub mod error_tolerant;
pub mod go;
mod lower;

pub use go::GoParser;
