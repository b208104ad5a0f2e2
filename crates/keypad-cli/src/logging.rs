//! Log subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this twice
/// is harmless; the second call is ignored.
pub fn init(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
