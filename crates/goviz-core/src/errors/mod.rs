//! Error handling for goviz.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bridge_error;
pub mod config_error;
pub mod error_code;
pub mod parse_error;
pub mod transduce_error;

pub use bridge_error::BridgeError;
pub use config_error::ConfigError;
pub use error_code::GovizErrorCode;
pub use parse_error::ParseError;
pub use transduce_error::TransduceError;
