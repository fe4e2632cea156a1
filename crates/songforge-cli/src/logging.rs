//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `songforge=debug`).
pub const LOG_ENV: &str = "SONGFORGE_LOG";

/// Installs the stderr log subscriber.
///
/// `default_directive` applies when [`LOG_ENV`] is unset or unparsable.
/// Calling this twice is harmless; the second call keeps the first subscriber.
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
