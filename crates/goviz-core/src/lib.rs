//! goviz-core: shared foundation for the Go syntax tree projector.
//!
//! - `types`: byte-offset spans shared by the native syntax tree and the visual tree
//! - `errors`: one `thiserror` enum per subsystem, each with a stable error code
//! - `config`: TOML-based layered configuration
//! - `tracing`: subscriber setup and span field names
//! - `constants`: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::GovizConfig;
pub use types::Span;
