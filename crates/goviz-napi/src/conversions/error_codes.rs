//! Error codes surfaced to JavaScript as `[CODE] message` strings.

use goviz_core::errors::GovizErrorCode;

pub use goviz_core::errors::error_code::{
    CONFIG_ERROR, DEPTH_EXCEEDED, INPUT_ERROR, PARSE_ERROR, SERIALIZATION_ERROR,
};

pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";

/// Convert a goviz error into a `napi::Error` carrying its code.
pub fn to_napi_error<E>(err: E) -> napi::Error
where
    E: GovizErrorCode + std::fmt::Display,
{
    napi::Error::from_reason(err.napi_string())
}

/// Build a `napi::Error` for a boundary failure with no typed source.
pub fn with_code(code: &str, message: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(format!("[{code}] {message}"))
}
