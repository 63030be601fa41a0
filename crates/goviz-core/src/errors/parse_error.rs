//! Parser errors.

use super::error_code::{self, GovizErrorCode};
use crate::types::{render_error_list, Diagnostic};

/// Errors raised at the parse boundary, before any visual tree exists.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Source code argument is required")]
    MissingSource,

    #[error("Source is {size} bytes, exceeding the limit of {limit} bytes")]
    SourceTooLarge { size: u64, limit: u64 },

    /// Rendered verbatim in the `go/scanner` list format.
    #[error("{}", render_error_list(.file, .diagnostics))]
    Syntax {
        file: String,
        diagnostics: Vec<Diagnostic>,
    },

    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("Tree-sitter error: {message}")]
    TreeSitter { message: String },
}

impl ParseError {
    /// Structured diagnostics, empty unless this is a syntax error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Syntax { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }
}

impl GovizErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSource | Self::SourceTooLarge { .. } => error_code::INPUT_ERROR,
            Self::DepthExceeded { .. } => error_code::DEPTH_EXCEEDED,
            Self::Syntax { .. } | Self::TreeSitter { .. } => error_code::PARSE_ERROR,
        }
    }
}
