//! Storefront Ledger Core
//!
//! In-memory ledger for a digital storefront: catalog reference data (apps
//! and the items they sell), user balances with purchase history, and the
//! append-only transaction log mutated by the settlement and reward engines.
//!
//! # Invariants
//!
//! - Transactions are append-only, never edited or deleted
//! - Sequence ids are 1-based and strictly increasing across the whole log
//! - Purchase history is append-only
//! - The aggregate is plain owned data passed by `&mut`; there is no global
//!   state and no interior mutability

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod catalog;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::{App, Item};
pub use error::{Error, Result};
pub use observer::{BalanceChange, NoopObserver, TransactionObserver};
pub use snapshot::Snapshot;
pub use store::{Store, User};
pub use types::{
    ActorId, AppId, Currency, ItemId, PurchaseRecord, Transaction, TransactionKind,
    TransactionLeg,
};
