//! Plain data crossing the C boundary.

pub mod accumulator;
pub mod record;

pub use accumulator::{Accumulate, Accumulator};
pub use record::{Field, Record};
