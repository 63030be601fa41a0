//! Configuration system for goviz.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod goviz_config;
pub mod parser_config;
pub mod transducer_config;

pub use goviz_config::{ConfigOverrides, GovizConfig};
pub use parser_config::ParserConfig;
pub use transducer_config::TransducerConfig;
