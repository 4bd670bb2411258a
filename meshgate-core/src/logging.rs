use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based
/// filtering.
///
/// `default_level` is typically the server's `default_log_level` from the
/// loaded descriptor; it applies when no filter is set in the environment.
/// An empty string falls back to "info".
pub fn init_logging(default_level: &str) {
    let fallback = if default_level.is_empty() {
        "info"
    } else {
        default_level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .init();
}
