//! Accumulator object exposed to C callers through an opaque handle.

/// Capability exposed over a handle: mutate and read, nothing else.
///
/// The registry stores `Box<dyn Accumulate>` so callers never depend on the
/// concrete layout.
pub trait Accumulate: Send {
    /// Add `amount` to the running total.
    fn add(&mut self, amount: i32);

    /// Current running total.
    fn value(&self) -> i32;
}

/// Running signed total, starting at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accumulator {
    value: i32,
}

impl Accumulator {
    /// Create an accumulator at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulate for Accumulator {
    /// Wraps on overflow, same policy as [`crate::output::add`].
    #[inline]
    fn add(&mut self, amount: i32) {
        self.value = self.value.wrapping_add(amount);
    }

    #[inline]
    fn value(&self) -> i32 {
        self.value
    }
}
