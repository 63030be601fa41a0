//! Native Go syntax tree, shaped after `go/ast`.
//!
//! The parser lowers tree-sitter's concrete tree into the owned types in
//! [`ast`]. Consumers walk it through [`SyntaxNode`], a borrowed view with one
//! variant per node kind.

pub mod ast;
pub mod node;
pub mod token;

pub use node::SyntaxNode;
pub use token::{BranchKeyword, ChanDir, DeclKeyword, LitKind};
