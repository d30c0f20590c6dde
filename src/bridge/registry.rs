//! Arena of live accumulators addressed by opaque `u64` handles.
//!
//! Handles start at 1 (0 is the null handle) and are never reused, so a
//! released handle stays detectably stale for the life of the process.

use crate::data::{Accumulate, Accumulator};
use crate::error::{BridgeError, BridgeResult};
use std::collections::HashMap;

/// Opaque handle to an accumulator. `0` is null.
pub type AccumulatorHandle = u64;

/// The null handle.
pub const NULL_HANDLE: AccumulatorHandle = 0;

/// Registry of live accumulators.
pub struct HandleRegistry {
    next: AccumulatorHandle,
    slots: HashMap<AccumulatorHandle, Box<dyn Accumulate>>,
    max_handles: Option<usize>,
}

impl HandleRegistry {
    /// Create an empty registry with no handle limit.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty registry holding at most `max_handles` live handles.
    pub fn with_limit(max_handles: Option<usize>) -> Self {
        Self {
            next: 1,
            slots: HashMap::new(),
            max_handles,
        }
    }

    /// Change the limit. Handles already live are kept even above it.
    pub fn set_limit(&mut self, max_handles: Option<usize>) {
        self.max_handles = max_handles;
    }

    /// Allocate a fresh [`Accumulator`] at zero.
    pub fn create(&mut self) -> BridgeResult<AccumulatorHandle> {
        self.insert(Box::new(Accumulator::new()))
    }

    /// Register any [`Accumulate`] implementation.
    pub fn insert(&mut self, object: Box<dyn Accumulate>) -> BridgeResult<AccumulatorHandle> {
        if let Some(limit) = self.max_handles {
            if self.slots.len() >= limit {
                return Err(BridgeError::HandleLimit(limit));
            }
        }

        let handle = self.next;
        self.next += 1;
        self.slots.insert(handle, object);
        tracing::debug!(handle, live = self.slots.len(), "accumulator created");
        Ok(handle)
    }

    /// Borrow the object behind a handle.
    pub fn get(&self, handle: AccumulatorHandle) -> BridgeResult<&(dyn Accumulate + 'static)> {
        self.slots
            .get(&handle)
            .map(|b| &**b)
            .ok_or(BridgeError::StaleHandle(handle))
    }

    /// Mutably borrow the object behind a handle.
    pub fn get_mut(&mut self, handle: AccumulatorHandle) -> BridgeResult<&mut (dyn Accumulate + 'static)> {
        match self.slots.get_mut(&handle) {
            Some(b) => Ok(&mut **b),
            None => Err(BridgeError::StaleHandle(handle)),
        }
    }

    /// Release a handle. Releasing twice is an error, not a no-op.
    pub fn release(&mut self, handle: AccumulatorHandle) -> BridgeResult<()> {
        match self.slots.remove(&handle) {
            Some(_) => {
                tracing::debug!(handle, live = self.slots.len(), "accumulator released");
                Ok(())
            }
            None => Err(BridgeError::StaleHandle(handle)),
        }
    }

    /// Check whether a handle is live.
    pub fn contains(&self, handle: AccumulatorHandle) -> bool {
        self.slots.contains_key(&handle)
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check whether no handle is live.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Release every handle. Issued numbers are still not reused.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for HandleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
