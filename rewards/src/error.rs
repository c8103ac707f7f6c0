//! Error types for the reward engine

use store_core::ActorId;
use thiserror::Error;

/// Result type for reward operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reward errors
///
/// Settlement validates the sender before invoking the reward engine, so
/// anything here signals a defect in the ledger state rather than a bad
/// request.
#[derive(Error, Debug)]
pub enum Error {
    /// Reward evaluation reached for a user missing from the directory
    #[error("reward evaluation for unknown user {0}")]
    UnknownUser(ActorId),

    /// Underlying ledger rejected a mutation
    #[error("ledger error: {0}")]
    Ledger(#[from] store_core::Error),
}
