//! Epoch context: round-robin validator selection within an epoch.

use crate::error::{Error, Result};
use crate::{BLOCK_INTERVAL, EPOCH_INTERVAL};
use slotchain_core::Address;

/// A short-lived view over a validator set snapshot at one timestamp.
///
/// Built fresh for every lookup and never cached across calls: the validator
/// set may change between invocations, and a stale snapshot would select a
/// different validator than other nodes evaluating the same slot.
#[derive(Debug, Clone)]
pub struct EpochContext {
    validators: Vec<Address>,
    timestamp: u64,
}

impl EpochContext {
    /// Build a context from a validator set snapshot and a timestamp.
    pub fn new(validators: Vec<Address>, timestamp: u64) -> Self {
        Self {
            validators,
            timestamp,
        }
    }

    /// The timestamp this context was built for.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Select the validator authorized to produce the block for the slot
    /// containing `now`.
    ///
    /// Indexing is epoch-relative: the slot-of-day determines the rotation
    /// position, so the schedule repeats identically every epoch and every
    /// node can recompute it independently.
    pub fn lookup_validator(&self, now: u64) -> Result<Address> {
        let offset = now % EPOCH_INTERVAL;
        if offset % BLOCK_INTERVAL != 0 {
            return Err(Error::MisalignedSlotTime);
        }
        let slot_index = offset / BLOCK_INTERVAL;

        if self.validators.is_empty() {
            return Err(Error::EmptyValidatorSet);
        }
        let index = slot_index as usize % self.validators.len();
        Ok(self.validators[index])
    }
}
