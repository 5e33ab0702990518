//! The DPoS consensus engine.
//!
//! Composes the deadline check and the epoch lookup to answer one question:
//! is this validator allowed to produce or accept a block right now? The
//! engine is stateless per call; the only shared state is the validator set
//! handle passed in at construction.

use crate::epoch::EpochContext;
use crate::error::{Error, Result};
use crate::slot::{next_slot_start, prev_slot_start};
use crate::validator_set::ValidatorSet;
use slotchain_core::{Address, Block};
use std::sync::Arc;
use tracing::debug;

/// The DPoS scheduling engine.
pub struct Dpos {
    validators: Arc<ValidatorSet>,
}

impl Dpos {
    /// Create an engine over a shared validator set handle.
    pub fn new(validators: Arc<ValidatorSet>) -> Self {
        Self { validators }
    }

    /// Replace the active validator set wholesale.
    pub fn set_validators(&self, validators: Vec<Address>) {
        self.validators.set_validators(validators);
    }

    /// Ordered snapshot of the active validators.
    pub fn validators(&self) -> Result<Vec<Address>> {
        self.validators.validators()
    }

    /// Select the validator authorized for the slot containing `now`.
    ///
    /// Builds a fresh [`EpochContext`] from the current validator set; the
    /// context is never cached across calls.
    pub fn lookup_validator(&self, now: u64) -> Result<Address> {
        EpochContext::new(self.validators.snapshot(), now).lookup_validator(now)
    }

    /// Decide whether minting/accepting a block is currently permitted.
    ///
    /// Succeeds when the predecessor slot's block has landed, or when less
    /// than one second remains before the next slot boundary.
    fn check_deadline(last_block_time: u64, now: u64) -> Result<()> {
        let prev = prev_slot_start(now);
        let next = next_slot_start(now);
        if last_block_time >= next {
            return Err(Error::MintFutureBlock);
        }
        if last_block_time == prev || next - now <= 1 {
            return Ok(());
        }
        Err(Error::WaitForPrevBlock)
    }

    /// Confirm that `validator` is the sole authorized producer for the slot
    /// at `now`, given the last accepted block.
    ///
    /// Retry policy belongs to the caller: [`Error::WaitForPrevBlock`] is the
    /// one retryable outcome, everything else is a hard rejection for this
    /// tick.
    pub fn check_validator(&self, last_block: &Block, validator: Address, now: u64) -> Result<()> {
        Self::check_deadline(last_block.timestamp(), now)?;

        let expected = self.lookup_validator(now)?;
        if expected == Address::ZERO {
            return Err(Error::InvalidBlockValidator);
        }
        if expected != validator {
            debug!(%expected, got = %validator, now, "validator not authorized for slot");
            return Err(Error::ValidatorMismatch {
                expected,
                got: validator,
            });
        }
        debug!(%validator, now, "validator authorized for slot");
        Ok(())
    }
}
