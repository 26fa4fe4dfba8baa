use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LogConfig};

/// Install the global subscriber. Logs go to stderr so prompts stay readable.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.with_target(false).json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}
