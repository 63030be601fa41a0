//! goviz-analysis: Go source in, renderable syntax tree out.
//!
//! - `parsers`: tree-sitter-go parsing, syntax diagnostics, lowering
//! - `syntax`: the native Go syntax tree, shaped after `go/ast`
//! - `engine::visual`: classification and transduction into visual nodes
//! - `bridge`: the single-call entry contract with JSON output
//! - `viewer`: position mapping and tree navigation for interactive viewers

pub mod bridge;
pub mod engine;
pub mod parsers;
mod stack;
pub mod syntax;
pub mod viewer;

pub use bridge::{parse_go_code, parse_go_code_with, parse_go_tree, ParseOutput};
pub use engine::visual::{NodeTag, Role, Transducer, VisualNode};
pub use parsers::GoParser;
