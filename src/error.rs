//! Error type shared by the Rust API; mapped to [`Status`](crate::ffi::types::Status)
//! at the C boundary.

use thiserror::Error;

/// Errors raised by the bridge core.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Handle was never issued or has already been released.
    #[error("stale accumulator handle {0}")]
    StaleHandle(u64),

    /// The registry already holds the configured number of live handles.
    #[error("handle limit of {0} reached")]
    HandleLimit(usize),

    /// No host capability has been installed.
    #[error("no host callback installed")]
    MissingHost,

    /// Configuration value out of range or unparsable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing program output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;
