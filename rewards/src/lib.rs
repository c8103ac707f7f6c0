//! Loyalty Reward Engine
//!
//! Grants store-funded cash rewards to repeat buyers. Reward size is a
//! tiered percentage of the triggering purchase amount, keyed on how many
//! purchases the user has recorded for the same app.
//!
//! The engine is invoked by purchase settlement after the triggering
//! purchase is already on the books, so the history count it sees includes
//! that purchase: the first reward lands on the second purchase of an app.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod engine;
pub mod error;
pub mod schedule;

// Re-exports
pub use engine::RewardEngine;
pub use error::{Error, Result};
pub use schedule::RewardSchedule;
