//! Structured logging initialization
//!
//! Provides consistent logging initialization across all components.

use crate::config::ConfigExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guard that keeps the tracing subscriber active.
/// Drop this at the end of main to flush logs.
pub struct LogGuard;

/// Initialize structured logging for a component.
///
/// Logs are written to stderr; stdout is left to the component's own output.
/// `RUST_LOG` overrides the default `info` level and `LOG_FORMAT=json`
/// switches to JSON records.
///
/// # Example
/// ```ignore
/// let _guard = init_logging("createdb-init");
/// info!("Starting up...");
/// ```
pub fn init_logging(component: &str) -> LogGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if String::env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(component, "Logging initialized");

    LogGuard
}
