//! Structured span field names.
//!
//! Every entry-point span records these fields so log queries can be built
//! on stable names.

/// Parser: tree-sitter parse plus lowering time in microseconds.
pub const PARSE_TIME_US: &str = "parse_time_us";

/// Transducer: visual tree construction time in microseconds.
pub const TRANSDUCE_TIME_US: &str = "transduce_time_us";

/// Bridge: JSON serialization time in microseconds.
pub const SERIALIZATION_TIME_US: &str = "serialization_time_us";

/// Input size in bytes.
pub const SOURCE_BYTES: &str = "source_bytes";

/// Number of nodes in the emitted visual tree.
pub const NODE_COUNT: &str = "node_count";

/// Number of syntax diagnostics reported by the parser.
pub const DIAGNOSTIC_COUNT: &str = "diagnostic_count";
