//! Scheduling errors.

use slotchain_core::Address;
use thiserror::Error as ThisError;

/// Errors that can occur during block scheduling.
///
/// A closed set so callers can match exhaustively; "retry later" and "reject
/// permanently" must never be conflated.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The chain head is already at or past the slot following `now`.
    /// Fatal for this call; requires external clock/chain correction.
    #[error("mint the future block")]
    MintFutureBlock,

    /// The predecessor slot's block has not arrived yet. Retryable: callers
    /// re-invoke later, typically on a periodic timer.
    #[error("wait for last block arrived")]
    WaitForPrevBlock,

    /// `now` does not land exactly on a slot boundary. Round-robin selection
    /// is only defined at slot boundaries.
    #[error("invalid time to mint the block")]
    MisalignedSlotTime,

    /// The validator set has zero members.
    #[error("empty validator set")]
    EmptyValidatorSet,

    /// Round-robin selection produced the zero address.
    #[error("invalid block validator")]
    InvalidBlockValidator,

    /// The supplied identity is not the validator authorized for this slot.
    #[error("validator mismatch (expected {expected}, got {got})")]
    ValidatorMismatch { expected: Address, got: Address },
}

/// Result alias for scheduling operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the caller should re-check later rather than reject outright.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::WaitForPrevBlock)
    }
}
