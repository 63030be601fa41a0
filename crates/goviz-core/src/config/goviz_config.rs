//! Top-level goviz configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ParserConfig, TransducerConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`GOVIZ_*`)
/// 3. Project config (`goviz.toml` in project root)
/// 4. User config (`~/.goviz/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GovizConfig {
    pub parser: ParserConfig,
    pub transducer: TransducerConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub file_name: Option<String>,
    pub max_source_bytes: Option<u64>,
    pub max_depth: Option<usize>,
}

impl GovizConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GovizConfig) -> Result<(), ConfigError> {
        if config.transducer.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "transducer.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.parser.max_source_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "parser.max_source_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref name) = config.parser.file_name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "parser.file_name".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.goviz/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".goviz").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GovizConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GovizConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GovizConfig, other: &GovizConfig) {
        if other.parser.file_name.is_some() {
            base.parser.file_name = other.parser.file_name.clone();
        }
        if other.parser.max_source_bytes.is_some() {
            base.parser.max_source_bytes = other.parser.max_source_bytes;
        }
        if other.transducer.max_depth.is_some() {
            base.transducer.max_depth = other.transducer.max_depth;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GOVIZ_FILE_NAME`, `GOVIZ_MAX_SOURCE_BYTES`, `GOVIZ_MAX_DEPTH`.
    fn apply_env_overrides(config: &mut GovizConfig) {
        if let Ok(val) = std::env::var("GOVIZ_FILE_NAME") {
            config.parser.file_name = Some(val);
        }
        if let Ok(val) = std::env::var("GOVIZ_MAX_SOURCE_BYTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.parser.max_source_bytes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOVIZ_MAX_DEPTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.transducer.max_depth = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut GovizConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.file_name {
            config.parser.file_name = Some(v.clone());
        }
        if let Some(v) = overrides.max_source_bytes {
            config.parser.max_source_bytes = Some(v);
        }
        if let Some(v) = overrides.max_depth {
            config.transducer.max_depth = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
