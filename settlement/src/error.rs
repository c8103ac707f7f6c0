//! Error types for purchase settlement

use rust_decimal::Decimal;
use store_core::{ActorId, AppId, ItemId};
use thiserror::Error;

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
///
/// The first five variants are recoverable request-validation failures
/// local to a single purchase; the rest signal defects in the ledger state.
#[derive(Error, Debug)]
pub enum Error {
    /// App not in the store's directory
    #[error("invalid app {0}")]
    InvalidApp(AppId),

    /// Sender not in the user directory
    #[error("invalid user {0}")]
    InvalidUser(ActorId),

    /// Item not offered by the requested app
    #[error("invalid item {item} for app {app}")]
    InvalidItem {
        /// Requested app
        app: AppId,
        /// Requested item
        item: ItemId,
    },

    /// Sender cannot afford the item
    #[error("user {user} doesn't have enough balance to make this purchase")]
    InsufficientBalance {
        /// Paying user
        user: ActorId,
        /// Balance at request time
        balance: Decimal,
        /// Item price
        price: Decimal,
    },

    /// Store and app revenue shares don't add up to 100%
    #[error("revenue shares of store ({store_share}) and app ({app_share}) don't add up to 100%")]
    CommissionMismatch {
        /// Store's share
        store_share: Decimal,
        /// App's share
        app_share: Decimal,
    },

    /// App's developer is missing from the user directory
    #[error("app {app} references missing developer {dev}")]
    MissingDeveloper {
        /// Purchased app
        app: AppId,
        /// Dangling developer reference
        dev: ActorId,
    },

    /// Reward evaluation failed after the purchase settled
    #[error("reward error: {0}")]
    Reward(#[from] rewards::Error),

    /// Underlying ledger rejected a mutation
    #[error("ledger error: {0}")]
    Ledger(#[from] store_core::Error),
}

impl Error {
    /// Whether this is a recoverable request-validation failure, as opposed
    /// to a ledger-state defect
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidApp(_)
                | Error::InvalidUser(_)
                | Error::InvalidItem { .. }
                | Error::InsufficientBalance { .. }
                | Error::CommissionMismatch { .. }
        )
    }
}
