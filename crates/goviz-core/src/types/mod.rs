//! Value types shared across goviz crates.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{render_error_list, Diagnostic};
pub use span::Span;
