//! Delegated Proof of Stake block scheduling for slotchain.
//!
//! This crate decides, for any wall-clock instant, which registered validator
//! is authorized to produce the block for that time slot, and whether a
//! proposed or observed block arrived within its legal time window:
//! - Slot arithmetic mapping timestamps to slot boundaries
//! - An ordered validator set with round-robin rotation
//! - A deadline check gating when minting/accepting a block is permitted
//!
//! Time is always supplied by the caller as Unix seconds; nothing in this
//! crate reads the system clock, performs I/O, or retries internally.
//!
//! # Example
//!
//! ```rust
//! use slotchain_consensus::{Dpos, ValidatorSet, BLOCK_INTERVAL};
//! use slotchain_core::{Block, Keypair};
//! use std::sync::Arc;
//!
//! let keypair = Keypair::generate();
//! let validators = Arc::new(ValidatorSet::new());
//! validators.set_validators(vec![keypair.address()]);
//!
//! let dpos = Dpos::new(validators);
//! let last = Block::genesis(keypair.address()).signed(&keypair);
//!
//! // The predecessor landed at the previous slot start, so the sole
//! // validator is authorized for the slot opening at BLOCK_INTERVAL.
//! dpos.check_validator(&last, keypair.address(), BLOCK_INTERVAL).unwrap();
//! ```

pub mod dpos;
pub mod epoch;
mod error;
pub mod slot;
pub mod validator_set;

// Re-export commonly used types
pub use dpos::Dpos;
pub use error::{Error, Result};
pub use epoch::EpochContext;
pub use slot::{next_slot_start, prev_slot_start};
pub use validator_set::ValidatorSet;

/// Seconds per block slot.
pub const BLOCK_INTERVAL: u64 = 10;

/// Seconds per epoch (one day). A multiple of [`BLOCK_INTERVAL`].
pub const EPOCH_INTERVAL: u64 = 86_400;

/// Cap on the active validator roster. Published for the governance layer;
/// the scheduler itself does not enforce roster size.
pub const MAX_VALIDATOR_SIZE: usize = 21;

/// Quorum floor for a safe validator set.
pub const SAFE_SIZE: usize = MAX_VALIDATOR_SIZE * 2 / 3 + 1;

/// Votes needed to confirm a block.
pub const CONSENSUS_SIZE: usize = MAX_VALIDATOR_SIZE * 2 / 3 + 1;

// Round-robin selection assumes whole slots per epoch.
const _: () = assert!(EPOCH_INTERVAL % BLOCK_INTERVAL == 0);
