//! Bridge configuration.

use crate::error::{BridgeError, BridgeResult};
use std::env;
use tracing::level_filters::LevelFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "FPCB_LOG";
/// Environment variable overriding [`BridgeConfig::max_handles`].
pub const MAX_HANDLES_ENV: &str = "FPCB_MAX_HANDLES";

/// Configuration for the process-wide bridge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Maximum live accumulator handles (None = unlimited).
    pub max_handles: Option<usize>,
    /// Level used when no filter directive is set.
    pub log_level: LevelFilter,
    /// Explicit filter directive (`EnvFilter` syntax); wins over `log_level`.
    pub log_directive: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_handles: None,
            log_level: LevelFilter::WARN,
            log_directive: None,
        }
    }
}

impl BridgeConfig {
    /// Defaults overridden by `FPCB_LOG` and `FPCB_MAX_HANDLES`.
    pub fn from_env() -> BridgeResult<Self> {
        let mut config = Self::default();
        config.apply_env(env::var(LOG_ENV).ok(), env::var(MAX_HANDLES_ENV).ok())?;
        Ok(config)
    }

    /// Apply raw override values as read from the environment.
    pub fn apply_env(
        &mut self,
        log: Option<String>,
        max_handles: Option<String>,
    ) -> BridgeResult<()> {
        if let Some(directive) = log.filter(|d| !d.trim().is_empty()) {
            self.log_directive = Some(directive);
        }

        if let Some(raw) = max_handles {
            let limit: usize = raw.trim().parse().map_err(|_| {
                BridgeError::InvalidConfig(format!("{MAX_HANDLES_ENV}={raw:?} is not a count"))
            })?;
            self.max_handles = if limit == 0 { None } else { Some(limit) };
        }

        Ok(())
    }
}

/// Map the numeric level used across the C boundary to a filter.
///
/// 0 = off, 1 = error, 2 = warn, 3 = info, 4 = debug, 5 = trace.
pub fn level_from_raw(raw: u32) -> BridgeResult<LevelFilter> {
    match raw {
        0 => Ok(LevelFilter::OFF),
        1 => Ok(LevelFilter::ERROR),
        2 => Ok(LevelFilter::WARN),
        3 => Ok(LevelFilter::INFO),
        4 => Ok(LevelFilter::DEBUG),
        5 => Ok(LevelFilter::TRACE),
        other => Err(BridgeError::InvalidConfig(format!(
            "log level {other} out of range 0..=5"
        ))),
    }
}
