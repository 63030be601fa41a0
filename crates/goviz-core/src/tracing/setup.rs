//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the goviz tracing/logging system.
///
/// Reads `GOVIZ_LOG` for per-module log levels, e.g.
/// `GOVIZ_LOG=goviz_analysis::parsers=debug,goviz_analysis::engine=info`.
///
/// Falls back to `goviz=info` if `GOVIZ_LOG` is not set or is invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("goviz=info"));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();

        // A host (or test harness) may already own the global subscriber.
        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set; keeping it");
        }
    });
}
