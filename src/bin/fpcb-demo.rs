//! Demo driver: calls every `fpcb_*` entry point the way a C embedder would.

use fpcbridge::{
    fpcb_accumulator_add, fpcb_accumulator_create, fpcb_accumulator_free, fpcb_accumulator_print,
    fpcb_calc_a_plus_b, fpcb_call_host, fpcb_init, fpcb_plot_array, fpcb_print_a_plus_b,
    fpcb_print_hello_world, fpcb_print_record_field, fpcb_status_message, Field, Record, Status,
};
use std::ffi::CStr;
use std::process::ExitCode;

/// Host side of the reverse call.
extern "C" fn called_from_c() {
    println!("Called from C");
}

fn check(what: &str, status: Status) -> Result<(), String> {
    if status == Status::Ok {
        return Ok(());
    }
    // SAFETY: fpcb_status_message never returns null and points at static data.
    let msg = unsafe { CStr::from_ptr(fpcb_status_message(status as u32)) };
    Err(format!("{what} failed: {}", msg.to_string_lossy()))
}

fn run() -> Result<(), String> {
    check("init", unsafe { fpcb_init(std::ptr::null(), Some(called_from_c)) })?;

    println!("This is the fpcbridge demo application.");

    fpcb_print_hello_world();
    fpcb_print_a_plus_b(20, 22);
    println!("C = {}", fpcb_calc_a_plus_b(21, 21));

    let bytes = [1u8, 2, 3, 4];
    let record = Record::new(10, 5000, 20, 100_000);
    unsafe {
        fpcb_plot_array(bytes.as_ptr(), bytes.len());
        for field in Field::ALL {
            fpcb_print_record_field(&record, field as u32);
        }
    }

    check("reverse call", fpcb_call_host())?;

    let mut handle = 0;
    check("create", unsafe { fpcb_accumulator_create(&mut handle) })?;
    check("add", fpcb_accumulator_add(handle, 19))?;
    check("add", fpcb_accumulator_add(handle, 23))?;
    check("print", fpcb_accumulator_print(handle))?;
    check("free", fpcb_accumulator_free(handle))?;

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
