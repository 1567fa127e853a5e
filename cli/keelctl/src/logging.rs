//! Tracing setup.
//!
//! Logs go to stderr so stdout stays parseable in JSON mode.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a log filter; wins over flags and config.
pub const LOG_ENV: &str = "KEEL_LOG";

/// Default filter when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the global subscriber (prefer KEEL_LOG, fallback to `level`).
///
/// Called once per process from `Cli::run`.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV).ok().as_deref(), level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// A parseable KEEL_LOG value wins; otherwise `level` is used.
fn build_filter(env_value: Option<&str>, level: &str) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}
