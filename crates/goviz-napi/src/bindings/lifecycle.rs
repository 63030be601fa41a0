//! Runtime setup exported to JavaScript.

use std::path::PathBuf;

use napi_derive::napi;

use crate::runtime::{self, RuntimeOptions};

/// Install tracing and resolve configuration. Optional: `parseGoCode` works
/// without it, using compiled defaults.
#[napi]
pub fn goviz_initialize(
    config_toml: Option<String>,
    project_root: Option<String>,
) -> napi::Result<()> {
    goviz_core::tracing::init_tracing();
    runtime::initialize(RuntimeOptions {
        config_toml,
        project_root: project_root.map(PathBuf::from),
    })
}

#[napi]
pub fn goviz_is_initialized() -> bool {
    runtime::is_initialized()
}

/// The active configuration as TOML.
#[napi]
pub fn goviz_config() -> napi::Result<String> {
    let rt = runtime::get()?;
    rt.config
        .to_toml()
        .map_err(crate::conversions::error_codes::to_napi_error)
}
