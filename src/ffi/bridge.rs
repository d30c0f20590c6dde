//! FFI functions for bridge setup and the reverse call.

use super::console::with_stdout;
use super::types::{CBridgeConfig, HostCallback, Status};
use crate::bridge::config::{LOG_ENV, MAX_HANDLES_ENV};
use crate::bridge::{init_tracing, Bridge, BridgeConfig, Host};
use crate::error::{BridgeError, BridgeResult};
use std::ffi::c_char;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

/// ABI version; bumped on any incompatible change to the `fpcb_*` surface.
pub const ABI_VERSION: u32 = 1;

const UNKNOWN_STATUS: &[u8] = b"unknown status\0";

/// Host backed by a C function pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CHost {
    callback: HostCallback,
}

impl CHost {
    pub fn new(callback: HostCallback) -> Self {
        Self { callback }
    }

    /// Check whether a callback is installed.
    pub fn is_installed(&self) -> bool {
        self.callback.is_some()
    }
}

impl Host for CHost {
    fn called_from_c(&self, out: &mut dyn Write) -> io::Result<()> {
        // Our buffered output must land before the callback prints via C stdio.
        out.flush()?;
        if let Some(callback) = self.callback {
            callback();
            // SAFETY: fflush(NULL) flushes all open C output streams.
            unsafe { libc::fflush(std::ptr::null_mut()) };
        }
        Ok(())
    }
}

lazy_static::lazy_static! {
    /// Bridge serving the C entry points.
    pub(crate) static ref BRIDGE: Mutex<Bridge<CHost>> =
        Mutex::new(Bridge::new(CHost::default(), BridgeConfig::default()));
}

/// Lock the process-wide bridge, recovering from a poisoned mutex.
pub(crate) fn lock_bridge() -> MutexGuard<'static, Bridge<CHost>> {
    match BRIDGE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("bridge mutex was poisoned, recovering state");
            poisoned.into_inner()
        }
    }
}

/// Resolve the effective configuration: C values, then environment overrides.
fn resolve_config(config: Option<CBridgeConfig>) -> BridgeResult<BridgeConfig> {
    let mut cfg = match config {
        Some(c) => BridgeConfig::try_from(c)?,
        None => BridgeConfig::default(),
    };
    cfg.apply_env(std::env::var(LOG_ENV).ok(), std::env::var(MAX_HANDLES_ENV).ok())?;
    Ok(cfg)
}

/// Get the ABI version.
#[no_mangle]
pub extern "C" fn fpcb_version() -> u32 {
    ABI_VERSION
}

/// Get a static description of a raw status code. Never null, never freed.
#[no_mangle]
pub extern "C" fn fpcb_status_message(status: u32) -> *const c_char {
    match Status::from_raw(status) {
        Some(status) => status.message_ptr(),
        None => UNKNOWN_STATUS.as_ptr() as *const c_char,
    }
}

/// Initialize the bridge: configuration, logging and the host callback.
///
/// May be called again to replace the configuration and callback; live
/// accumulator handles survive. A null `config` selects defaults. A null
/// `callback` leaves the bridge without a host, so `fpcb_call_host` reports
/// `MissingHost`.
///
/// # Safety
/// `config` must be null or point to a valid `CBridgeConfig`. `callback`, if
/// set, must stay callable until replaced and must not unwind.
#[no_mangle]
pub unsafe extern "C" fn fpcb_init(
    config: *const CBridgeConfig,
    callback: HostCallback,
) -> Status {
    let c_config = if config.is_null() { None } else { Some(*config) };

    let cfg = match resolve_config(c_config) {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(error = %err, "rejected bridge configuration");
            return Status::from(&err);
        }
    };

    init_tracing(&cfg);

    let mut bridge = lock_bridge();
    bridge.reconfigure(cfg);
    bridge.set_host(CHost::new(callback));
    tracing::info!(
        host = callback.is_some(),
        max_handles = ?bridge.config().max_handles,
        "bridge initialized"
    );

    Status::Ok
}

/// Invoke the host callback installed by `fpcb_init`.
#[no_mangle]
pub extern "C" fn fpcb_call_host() -> Status {
    // Copy the host out so the callback may re-enter the bridge.
    let host = *lock_bridge().host();

    if !host.is_installed() {
        tracing::warn!("reverse call requested but no host callback is installed");
        return Status::from(&BridgeError::MissingHost);
    }

    let result = with_stdout(|out| host.called_from_c(out));
    Status::from(result.map_err(BridgeError::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::ffi::CStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn count_call() {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_status_message() {
        let msg = unsafe { CStr::from_ptr(fpcb_status_message(Status::MissingHost as u32)) };
        assert_eq!(msg.to_str().unwrap(), "no host callback installed");

        let msg = unsafe { CStr::from_ptr(fpcb_status_message(99)) };
        assert_eq!(msg.to_str().unwrap(), "unknown status");
    }

    #[test]
    #[serial]
    fn test_missing_host() {
        let status = unsafe { fpcb_init(std::ptr::null(), None) };
        assert_eq!(status, Status::Ok);
        assert_eq!(fpcb_call_host(), Status::MissingHost);
    }

    #[test]
    #[serial]
    fn test_call_host() {
        let before = CALLS.load(Ordering::SeqCst);
        let status = unsafe { fpcb_init(std::ptr::null(), Some(count_call)) };
        assert_eq!(status, Status::Ok);

        assert_eq!(fpcb_call_host(), Status::Ok);
        assert_eq!(fpcb_call_host(), Status::Ok);
        assert_eq!(CALLS.load(Ordering::SeqCst), before + 2);

        unsafe { fpcb_init(std::ptr::null(), None) };
    }

    #[test]
    #[serial]
    fn test_invalid_config_rejected() {
        let bad = CBridgeConfig {
            max_handles: 0,
            log_level: 42,
        };
        assert_eq!(unsafe { fpcb_init(&bad, None) }, Status::InvalidConfig);
    }
}
