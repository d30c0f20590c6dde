//! FFI functions for accumulator handles.
//!
//! Null handles are silent no-ops. Stale handles (never issued, or already
//! freed) report `StaleHandle` instead of touching released memory.

use super::bridge::lock_bridge;
use super::console::with_stdout;
use super::types::Status;
use crate::bridge::{AccumulatorHandle, NULL_HANDLE};
use crate::data::Accumulate;
use crate::error::BridgeError;
use crate::output;
use libc::c_int;

fn reject(err: BridgeError, op: &'static str) -> Status {
    tracing::warn!(op, error = %err, "accumulator call rejected");
    Status::from(&err)
}

/// Create an accumulator at zero.
///
/// # Safety
/// out_handle must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn fpcb_accumulator_create(out_handle: *mut AccumulatorHandle) -> Status {
    if out_handle.is_null() {
        return Status::NullPointer;
    }

    match lock_bridge().registry_mut().create() {
        Ok(handle) => {
            *out_handle = handle;
            Status::Ok
        }
        Err(err) => reject(err, "create"),
    }
}

/// Add `value` to the accumulator and print a trace line.
#[no_mangle]
pub extern "C" fn fpcb_accumulator_add(handle: AccumulatorHandle, value: c_int) -> Status {
    if handle == NULL_HANDLE {
        return Status::Ok;
    }

    let mut bridge = lock_bridge();
    let acc = match bridge.registry_mut().get_mut(handle) {
        Ok(acc) => acc,
        Err(err) => return reject(err, "add"),
    };

    acc.add(value);
    match with_stdout(|out| output::print_accumulate(out, value)) {
        Ok(()) => Status::Ok,
        Err(err) => reject(err.into(), "add"),
    }
}

/// Print the accumulator's current value.
#[no_mangle]
pub extern "C" fn fpcb_accumulator_print(handle: AccumulatorHandle) -> Status {
    if handle == NULL_HANDLE {
        return Status::Ok;
    }

    let value = match lock_bridge().registry().get(handle) {
        Ok(acc) => acc.value(),
        Err(err) => return reject(err, "print"),
    };

    match with_stdout(|out| output::print_accumulator_value(out, value)) {
        Ok(()) => Status::Ok,
        Err(err) => reject(err.into(), "print"),
    }
}

/// Read the accumulator's current value without printing.
///
/// # Safety
/// out_value must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn fpcb_accumulator_value(
    handle: AccumulatorHandle,
    out_value: *mut c_int,
) -> Status {
    if out_value.is_null() {
        return Status::NullPointer;
    }
    if handle == NULL_HANDLE {
        return Status::Ok;
    }

    match lock_bridge().registry().get(handle) {
        Ok(acc) => {
            *out_value = acc.value();
            Status::Ok
        }
        Err(err) => reject(err, "value"),
    }
}

/// Release an accumulator. Freeing the same handle twice reports
/// `StaleHandle`.
#[no_mangle]
pub extern "C" fn fpcb_accumulator_free(handle: AccumulatorHandle) -> Status {
    if handle == NULL_HANDLE {
        return Status::Ok;
    }

    match lock_bridge().registry_mut().release(handle) {
        Ok(()) => Status::Ok,
        Err(err) => reject(err, "free"),
    }
}
