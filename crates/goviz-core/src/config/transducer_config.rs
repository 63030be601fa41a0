//! Transducer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DEPTH;

/// Configuration for lowering and transduction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransducerConfig {
    /// Maximum syntax nesting depth. Default: 2000.
    pub max_depth: Option<usize>,
}

impl TransducerConfig {
    /// Returns the effective nesting limit, defaulting to 2000.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
