//! Shared constants for goviz.

/// File name used when rendering syntax diagnostics (`input.go:1:9: ...`).
pub const DEFAULT_FILE_NAME: &str = "input.go";

/// Maximum accepted source size in bytes (default: 4MB).
pub const DEFAULT_MAX_SOURCE_BYTES: u64 = 4 * 1_048_576;

/// Maximum visual tree depth before lowering and transduction fail closed.
///
/// Counted in visual nodes from the `File` root. The recursive passes grow
/// their stack on demand, so the limit is independent of the thread's stack
/// size; input nested this deep is rejected with `DEPTH_EXCEEDED`.
pub const DEFAULT_MAX_DEPTH: usize = 2000;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "GOVIZ_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "goviz.toml";
