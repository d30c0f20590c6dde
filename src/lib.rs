//! fpcbridge - calling conventions across a C-ABI boundary.
//!
//! This crate exposes, to any caller that speaks the C calling convention
//! (C, C++, Free Pascal, Python cffi, ...):
//!
//! - Flat functions on plain data: integers, a byte array, a `#[repr(C)]`
//!   record with a field selector
//! - An accumulator object behind an opaque handle, with create, add,
//!   print and free as its only operations
//! - A reverse call into a function the embedder supplies at init time
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     FFI Layer (fpcbridge.h)         │
//! │  fpcb_* functions & C types         │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │           Rust core                 │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │  Output   │  │    Bridge     │  │
//! │  │ (printers)│  │ (host, config)│  │
//! │  └───────────┘  └───────────────┘  │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │   Data    │  │    Handle     │  │
//! │  │ (records) │  │   Registry    │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! void called_from_c(void) { printf("Called from C\n"); }
//!
//! fpcb_init(NULL, called_from_c);
//! fpcb_print_a_plus_b(20, 22);
//! fpcb_call_host();
//!
//! FpcbAccumulatorHandle acc;
//! fpcb_accumulator_create(&acc);
//! fpcb_accumulator_add(acc, 19);
//! fpcb_accumulator_add(acc, 23);
//! fpcb_accumulator_print(acc);   // Accumulator.value = 42
//! fpcb_accumulator_free(acc);
//! ```

pub mod bridge;
pub mod data;
pub mod error;
pub mod ffi;
pub mod output;

// Re-export commonly used items
pub use bridge::{AccumulatorHandle, Bridge, BridgeConfig, HandleRegistry, Host, PrintingHost};
pub use data::{Accumulate, Accumulator, Field, Record};
pub use error::{BridgeError, BridgeResult};

// Re-export FFI types for cbindgen
pub use ffi::types::*;
pub use ffi::accumulator::*;
pub use ffi::bridge::*;
pub use ffi::flat::*;
