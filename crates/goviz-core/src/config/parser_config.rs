//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FILE_NAME, DEFAULT_MAX_SOURCE_BYTES};

/// Configuration for the parse boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// File name shown in syntax diagnostics. Default: `input.go`.
    pub file_name: Option<String>,
    /// Largest source accepted, in bytes. Default: 4MB.
    pub max_source_bytes: Option<u64>,
}

impl ParserConfig {
    /// Returns the effective diagnostic file name, defaulting to `input.go`.
    pub fn effective_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Returns the effective source size limit, defaulting to 4MB.
    pub fn effective_max_source_bytes(&self) -> u64 {
        self.max_source_bytes.unwrap_or(DEFAULT_MAX_SOURCE_BYTES)
    }
}
