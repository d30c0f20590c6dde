//! Exercises the `fpcb_*` surface the way a C caller would.

use fpcbridge::{
    fpcb_accumulator_add, fpcb_accumulator_create, fpcb_accumulator_free, fpcb_accumulator_print,
    fpcb_accumulator_value, fpcb_calc_a_plus_b, fpcb_call_host, fpcb_init, fpcb_plot_array,
    fpcb_print_record_field, fpcb_version, AccumulatorHandle, CBridgeConfig, Record, Status,
};
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};

static HOST_CALLS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn host() {
    HOST_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn init(max_handles: usize) {
    let config = CBridgeConfig {
        max_handles,
        log_level: 1,
    };
    assert_eq!(unsafe { fpcb_init(&config, Some(host)) }, Status::Ok);
}

fn create() -> Result<AccumulatorHandle, Status> {
    let mut handle = 0;
    match unsafe { fpcb_accumulator_create(&mut handle) } {
        Status::Ok => Ok(handle),
        other => Err(other),
    }
}

fn value(handle: AccumulatorHandle) -> i32 {
    let mut v = 0;
    assert_eq!(unsafe { fpcb_accumulator_value(handle, &mut v) }, Status::Ok);
    v
}

#[test]
fn test_version() {
    assert_eq!(fpcb_version(), 1);
}

#[test]
fn test_sum_matches_wrapping_add() {
    for (a, b) in [(0, 0), (21, 21), (-7, 3), (i32::MAX, 1), (i32::MIN, -1), (123_456, -654_321)] {
        assert_eq!(fpcb_calc_a_plus_b(a, b), a.wrapping_add(b));
    }
}

#[test]
fn test_null_sequence_and_record() {
    unsafe {
        fpcb_plot_array(std::ptr::null(), usize::MAX);
        fpcb_print_record_field(std::ptr::null(), 2);
    }
}

#[test]
fn test_unknown_selector_does_not_fault() {
    let record = Record::new(1, 2, 3, -4);
    unsafe {
        fpcb_print_record_field(&record, 4);
        fpcb_print_record_field(&record, u32::MAX);
    }
}

#[test]
#[serial]
fn test_accumulator_reaches_42() {
    init(0);
    let h = create().unwrap();

    assert_eq!(fpcb_accumulator_add(h, 19), Status::Ok);
    assert_eq!(fpcb_accumulator_add(h, 23), Status::Ok);
    assert_eq!(fpcb_accumulator_print(h), Status::Ok);
    assert_eq!(value(h), 42);

    assert_eq!(fpcb_accumulator_free(h), Status::Ok);
    assert_eq!(fpcb_accumulator_free(h), Status::StaleHandle);
}

#[test]
#[serial]
fn test_handle_limit() {
    init(2);
    let a = create().unwrap();
    let b = create().unwrap();
    assert_eq!(create(), Err(Status::HandleLimit));

    fpcb_accumulator_free(a);
    let c = create().unwrap();
    assert_ne!(c, a);

    fpcb_accumulator_free(b);
    fpcb_accumulator_free(c);
    init(0);
}

#[test]
#[serial]
fn test_reverse_call() {
    init(0);
    let before = HOST_CALLS.load(Ordering::SeqCst);
    assert_eq!(fpcb_call_host(), Status::Ok);
    assert_eq!(HOST_CALLS.load(Ordering::SeqCst), before + 1);

    assert_eq!(unsafe { fpcb_init(std::ptr::null(), None) }, Status::Ok);
    assert_eq!(fpcb_call_host(), Status::MissingHost);
    assert_eq!(HOST_CALLS.load(Ordering::SeqCst), before + 1);
}

#[test]
#[serial]
fn test_reinit_keeps_handles() {
    init(0);
    let h = create().unwrap();
    fpcb_accumulator_add(h, 5);

    init(0);
    assert_eq!(value(h), 5);
    fpcb_accumulator_free(h);
}
