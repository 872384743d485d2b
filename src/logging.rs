use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Logs go to stderr; stdout carries only record output.
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.log_format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
