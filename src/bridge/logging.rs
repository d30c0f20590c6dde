//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr; stdout carries the program's own output.

use super::config::BridgeConfig;
use tracing_subscriber::EnvFilter;

/// Build the filter for a configuration: explicit directive first, then the
/// configured level.
pub fn resolve_filter(config: &BridgeConfig) -> EnvFilter {
    if let Some(directive) = &config.log_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(err) => {
                // No subscriber may be installed yet; stderr is the only sink.
                eprintln!("fpcbridge: ignoring invalid log directive {directive:?}: {err}");
            }
        }
    }
    EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .parse_lossy("")
}

/// Install the process-wide subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_tracing(config: &BridgeConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
