//! GovizRuntime: process-wide configuration, set once via `OnceLock`.
//!
//! Parsing is stateless, so the runtime only holds the resolved config.
//! Calls made before `initialize()` fall back to compiled defaults.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use goviz_core::GovizConfig;

use crate::conversions::error_codes;

static RUNTIME: OnceLock<Arc<GovizRuntime>> = OnceLock::new();

pub struct GovizRuntime {
    pub config: GovizConfig,
}

/// Options for initializing the runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. Takes precedence over `project_root`.
    pub config_toml: Option<String>,
    /// Directory searched for `goviz.toml`.
    pub project_root: Option<PathBuf>,
}

impl GovizRuntime {
    fn new(opts: RuntimeOptions) -> napi::Result<Self> {
        let config = match (&opts.config_toml, &opts.project_root) {
            (Some(toml_str), _) => {
                GovizConfig::from_toml(toml_str).map_err(error_codes::to_napi_error)?
            }
            (None, Some(root)) => {
                GovizConfig::load(root, None).map_err(error_codes::to_napi_error)?
            }
            (None, None) => GovizConfig::default(),
        };
        tracing::info!(
            file_name = config.parser.effective_file_name(),
            max_depth = config.transducer.effective_max_depth(),
            "goviz runtime initialized"
        );
        Ok(Self { config })
    }
}

/// Initialize the global runtime. Errors if already initialized.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    let runtime = GovizRuntime::new(opts)?;
    RUNTIME.set(Arc::new(runtime)).map_err(|_| {
        error_codes::with_code(
            error_codes::ALREADY_INITIALIZED,
            "GovizRuntime already initialized",
        )
    })
}

pub fn get() -> napi::Result<Arc<GovizRuntime>> {
    RUNTIME.get().cloned().ok_or_else(|| {
        error_codes::with_code(
            error_codes::RUNTIME_NOT_INITIALIZED,
            "GovizRuntime not initialized. Call govizInitialize() first.",
        )
    })
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

/// Config for one call: the runtime's if initialized, else defaults.
pub fn config() -> GovizConfig {
    RUNTIME
        .get()
        .map(|rt| rt.config.clone())
        .unwrap_or_default()
}
