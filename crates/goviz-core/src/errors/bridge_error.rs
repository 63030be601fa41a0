//! Entry-point errors.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, GovizErrorCode};
use super::{ParseError, TransduceError};

/// Everything a single `parse_go_code` invocation can fail with.
/// All variants are terminal: no partial tree accompanies them.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transduce(#[from] TransduceError),

    #[error("Failed to serialize AST: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

impl GovizErrorCode for BridgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Transduce(e) => e.error_code(),
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}
