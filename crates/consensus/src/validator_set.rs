//! The ordered validator set shared by all scheduler callers.

use crate::error::{Error, Result};
use parking_lot::RwLock;
use slotchain_core::Address;

/// An ordered, replaceable collection of validator addresses.
///
/// The order must be deterministic and identical across all nodes observing
/// the same epoch; round-robin selection diverges between nodes otherwise.
/// Contents are not validated here: duplicates and roster size are
/// governance-layer invariants. Share across threads with `Arc`; writes are
/// exclusive, reads clone a snapshot for the duration of one lookup.
#[derive(Debug, Default)]
pub struct ValidatorSet {
    candidates: RwLock<Vec<Address>>,
}

impl ValidatorSet {
    /// Create an empty validator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set wholesale. Always succeeds.
    pub fn set_validators(&self, validators: Vec<Address>) {
        *self.candidates.write() = validators;
    }

    /// Ordered snapshot of the current validators, possibly empty.
    pub fn snapshot(&self) -> Vec<Address> {
        self.candidates.read().clone()
    }

    /// Returns an ordered snapshot of the current validators.
    pub fn validators(&self) -> Result<Vec<Address>> {
        let candidates = self.candidates.read();
        if candidates.is_empty() {
            return Err(Error::EmptyValidatorSet);
        }
        Ok(candidates.clone())
    }

    /// Number of validators currently registered.
    pub fn len(&self) -> usize {
        self.candidates.read().len()
    }

    /// True when no validators are registered.
    pub fn is_empty(&self) -> bool {
        self.candidates.read().is_empty()
    }
}
