//! Boundary notification seam
//!
//! The engines report every recorded transaction together with the balances
//! it touched; receipt text and balance summaries are rendered outside the
//! core.

use crate::types::{ActorId, Transaction};
use rust_decimal::Decimal;

/// Balance of one actor after a transaction touched it
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChange {
    /// Actor whose balance changed
    pub actor: ActorId,

    /// Balance after the change
    pub balance: Decimal,
}

/// Receives recorded transactions for boundary-side rendering
///
/// Called once per appended transaction, in log order; a purchase that
/// triggers a reward produces two calls.
pub trait TransactionObserver {
    /// A transaction was appended to the log
    fn transaction_recorded(&mut self, tx: &Transaction, balances: &[BalanceChange]);
}

/// Observer that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TransactionObserver for NoopObserver {
    fn transaction_recorded(&mut self, _tx: &Transaction, _balances: &[BalanceChange]) {}
}
