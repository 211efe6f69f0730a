//! Structured logging infrastructure for sensor list control.
//!
//! This module provides centralized logging initialization with support
//! for structured JSON output and environment-based configuration.

use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging from a loaded [`LoggingConfig`].
///
/// `config.json` selects JSON output for log aggregation. The `RUST_LOG`
/// environment variable overrides `config.level`. Output goes to stderr so
/// command output on stdout stays parseable.
///
/// Returns `false` when a subscriber is already installed.
///
/// # Example
/// ```no_run
/// use slist_core::{logging, LoggingConfig};
///
/// logging::init_with(&LoggingConfig::default());
/// tracing::info!("Classifier started");
/// ```
pub fn init_with(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
            .is_ok()
    }
}
