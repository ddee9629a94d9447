//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Lectern tracing/logging system with default settings.
///
/// Reads the `LECTERN_LOG` environment variable for per-target log levels,
/// e.g. `LECTERN_LOG=lectern_context=debug,lectern_tokens=warn`.
/// Falls back to `info` if `LECTERN_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an [`ObservabilityConfig`].
///
/// `LECTERN_LOG` still takes precedence over `config.log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let (plain, structured) = if json {
            (None, Some(fmt::layer().json().with_target(true)))
        } else {
            (
                Some(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                ),
                None,
            )
        };

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(plain)
            .with(structured)
            .try_init();
    });
}
