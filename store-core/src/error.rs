//! Error types for the ledger core

use crate::types::{ActorId, AppId, ItemId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger and snapshot errors
///
/// Everything here indicates broken ledger state or a malformed snapshot,
/// not a bad purchase request; request validation lives in the settlement
/// engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Duplicate app id in the snapshot
    #[error("duplicate app id {0}")]
    DuplicateApp(AppId),

    /// Duplicate user id in the snapshot
    #[error("duplicate user id {0}")]
    DuplicateUser(ActorId),

    /// Duplicate item id within one app
    #[error("duplicate item id {item} in app {app}")]
    DuplicateItem {
        /// Owning app
        app: AppId,
        /// Offending item
        item: ItemId,
    },

    /// Item references an app missing from the catalog
    #[error("item {item} references unknown app {app}")]
    UnknownItemApp {
        /// Referenced app
        app: AppId,
        /// Offending item
        item: ItemId,
    },

    /// App references a developer missing from the user directory
    #[error("app {app} references unknown developer {dev}")]
    UnknownDeveloper {
        /// Offending app
        app: AppId,
        /// Referenced developer
        dev: ActorId,
    },

    /// Negative item price in the snapshot
    #[error("negative price {price} on item {item}")]
    NegativePrice {
        /// Offending item
        item: ItemId,
        /// Declared price
        price: Decimal,
    },

    /// Actor missing from the user directory
    #[error("no user {0} in the directory")]
    UnknownActor(ActorId),

    /// Appended transaction does not continue the sequence
    #[error("transaction sequence gap: expected {expected}, got {got}")]
    SequenceGap {
        /// Next id the log expects
        expected: u64,
        /// Id carried by the rejected transaction
        got: u64,
    },

    /// Snapshot parse error
    #[error("snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
