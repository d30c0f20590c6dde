//! FFI functions operating on plain values: integers, byte arrays, records.

use super::console::print_or_log;
use crate::data::Record;
use crate::output;
use libc::c_int;

/// Print the fixed greeting.
#[no_mangle]
pub extern "C" fn fpcb_print_hello_world() {
    print_or_log("greeting", |out| output::greet(out));
}

/// Print `A + B = <a + b>`. Overflow wraps.
#[no_mangle]
pub extern "C" fn fpcb_print_a_plus_b(a: c_int, b: c_int) {
    print_or_log("sum", |out| output::print_sum(out, a, b));
}

/// Return `a + b`. Overflow wraps.
#[no_mangle]
pub extern "C" fn fpcb_calc_a_plus_b(a: c_int, b: c_int) -> c_int {
    output::add(a, b)
}

/// Print `len` bytes space-separated. A null `data` prints nothing.
///
/// # Safety
/// If non-null, `data` must point to at least `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn fpcb_plot_array(data: *const u8, len: usize) {
    let bytes = if data.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(data, len))
    };
    print_or_log("array", |out| output::print_bytes(out, bytes));
}

/// Print one field of a record chosen by a raw selector (0 = a … 3 = d).
///
/// Selectors outside that range print `unknown enum`. A null `record`
/// prints nothing.
///
/// # Safety
/// If non-null, `record` must point to a valid `Record`.
#[no_mangle]
pub unsafe extern "C" fn fpcb_print_record_field(record: *const Record, selector: u32) {
    if record.is_null() {
        return;
    }
    let record = &*record;
    print_or_log("record field", |out| {
        output::print_field(out, record, selector).map(|_| ())
    });
}
