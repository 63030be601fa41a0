//! Transducer errors.

use super::error_code::{self, GovizErrorCode};

/// The transducer is total over well-formed trees; the only way out is the
/// nesting guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransduceError {
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },
}

impl GovizErrorCode for TransduceError {
    fn error_code(&self) -> &'static str {
        error_code::DEPTH_EXCEEDED
    }
}
