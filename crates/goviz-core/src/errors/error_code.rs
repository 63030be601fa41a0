//! GovizErrorCode trait for the embedding boundary.

/// Trait for converting goviz errors to stable error code strings.
/// Every error enum implements this so hosts can branch on the code
/// without parsing messages.
pub trait GovizErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn napi_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the embedding boundary.
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const DEPTH_EXCEEDED: &str = "DEPTH_EXCEEDED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
