//! Purchase Settlement Engine
//!
//! Validates purchase requests against the storefront ledger, splits the
//! payment between developer and store, mutates balances, records the
//! receipt and hands the purchase to the reward engine.
//!
//! # Flow
//!
//! 1. **Validation**: app, sender, item, affordability, commission split —
//!    all before any mutation, so a rejected request leaves the ledger
//!    untouched
//! 2. **Split**: developer and store shares rounded to cents independently
//! 3. **Mutation**: sender debited, store and developer credited
//! 4. **Recording**: PURCHASE transaction appended, sender history extended
//! 5. **Rewards**: loyalty evaluation as a side effect of the settled
//!    purchase

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod engine;
pub mod error;

// Re-exports
pub use engine::SettlementEngine;
pub use error::{Error, Result};
