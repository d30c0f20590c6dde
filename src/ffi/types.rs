//! C-compatible type definitions for FFI.

use crate::bridge::config::{level_from_raw, BridgeConfig};
use crate::error::{BridgeError, BridgeResult};
use std::ffi::c_char;

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation succeeded, or was a no-op on a null argument.
    Ok = 0,
    /// A required output pointer was null.
    NullPointer = 1,
    /// Handle was never issued or already released.
    StaleHandle = 2,
    /// Too many live handles.
    HandleLimit = 3,
    /// No host callback installed.
    MissingHost = 4,
    /// Configuration rejected.
    InvalidConfig = 5,
    /// Writing output failed.
    Io = 6,
}

impl Status {
    /// Decode a raw code as received from C.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Status::Ok),
            1 => Some(Status::NullPointer),
            2 => Some(Status::StaleHandle),
            3 => Some(Status::HandleLimit),
            4 => Some(Status::MissingHost),
            5 => Some(Status::InvalidConfig),
            6 => Some(Status::Io),
            _ => None,
        }
    }

    /// Static NUL-terminated description.
    pub fn message(self) -> &'static [u8] {
        match self {
            Status::Ok => b"ok\0",
            Status::NullPointer => b"null pointer\0",
            Status::StaleHandle => b"stale handle\0",
            Status::HandleLimit => b"handle limit reached\0",
            Status::MissingHost => b"no host callback installed\0",
            Status::InvalidConfig => b"invalid configuration\0",
            Status::Io => b"output error\0",
        }
    }

    pub(crate) fn message_ptr(self) -> *const c_char {
        self.message().as_ptr() as *const c_char
    }
}

impl From<&BridgeError> for Status {
    fn from(err: &BridgeError) -> Self {
        match err {
            BridgeError::StaleHandle(_) => Status::StaleHandle,
            BridgeError::HandleLimit(_) => Status::HandleLimit,
            BridgeError::MissingHost => Status::MissingHost,
            BridgeError::InvalidConfig(_) => Status::InvalidConfig,
            BridgeError::Io(_) => Status::Io,
        }
    }
}

impl<T> From<BridgeResult<T>> for Status {
    fn from(result: BridgeResult<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => Status::from(&err),
        }
    }
}

/// Configuration passed to `fpcb_init`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CBridgeConfig {
    /// Maximum live accumulator handles (0 = unlimited).
    pub max_handles: usize,
    /// 0 = off, 1 = error, 2 = warn, 3 = info, 4 = debug, 5 = trace.
    pub log_level: u32,
}

impl Default for CBridgeConfig {
    fn default() -> Self {
        Self {
            max_handles: 0,
            log_level: 2,
        }
    }
}

impl TryFrom<CBridgeConfig> for BridgeConfig {
    type Error = BridgeError;

    fn try_from(c: CBridgeConfig) -> Result<Self, Self::Error> {
        Ok(BridgeConfig {
            max_handles: if c.max_handles == 0 {
                None
            } else {
                Some(c.max_handles)
            },
            log_level: level_from_raw(c.log_level)?,
            log_directive: None,
        })
    }
}

/// Host callback supplied by the embedder. Must not unwind into Rust.
pub type HostCallback = Option<extern "C" fn()>;
