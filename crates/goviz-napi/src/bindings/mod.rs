//! Functions exported to JavaScript.

pub mod lifecycle;
pub mod parse;
