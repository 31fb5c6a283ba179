//! Subscriber setup for the binary. Library crates only emit events.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER, LogFormat};

/// Build the event filter, falling back to the default on bad directives.
#[must_use]
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a stderr subscriber. Returns `false` if one was already set.
pub fn init(config: &Config) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}
