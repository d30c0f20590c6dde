//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! Every exported symbol carries the `fpcb_` prefix; cbindgen turns this
//! module into `include/fpcbridge.h`.

pub mod accumulator;
pub mod bridge;
mod console;
pub mod flat;
pub mod types;

pub use accumulator::*;
pub use bridge::*;
pub use flat::*;
pub use types::*;
