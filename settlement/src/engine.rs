//! Purchase settlement

use crate::error::{Error, Result};
use chrono::Utc;
use rewards::RewardEngine;
use rust_decimal::Decimal;
use store_core::{
    ActorId, AppId, BalanceChange, ItemId, PurchaseRecord, Store, Transaction, TransactionKind,
    TransactionLeg, TransactionObserver,
};

/// Purchase settlement engine
///
/// Stateless over the ledger: every call works on a `&mut Store` supplied
/// by the caller.
#[derive(Debug, Clone, Default)]
pub struct SettlementEngine {
    rewards: RewardEngine,
}

impl SettlementEngine {
    /// Create an engine that grants loyalty rewards through `rewards`
    pub fn new(rewards: RewardEngine) -> Self {
        Self { rewards }
    }

    /// Settle the purchase of `item_id` in `app_id` paid by `sender_id`
    ///
    /// Preconditions are checked in a fixed order (app, sender, item,
    /// affordability, commission split) and a rejected request leaves the
    /// ledger untouched. On success the purchase transaction is returned;
    /// the loyalty reward it may trigger lands on the same log and is
    /// reported through `observer` only.
    pub fn purchase(
        &self,
        store: &mut Store,
        app_id: &AppId,
        item_id: &ItemId,
        sender_id: &ActorId,
        observer: &mut dyn TransactionObserver,
    ) -> Result<Transaction> {
        match self.settle(store, app_id, item_id, sender_id, observer) {
            Err(err) if err.is_validation() => {
                tracing::warn!(
                    app = %app_id,
                    item = %item_id,
                    sender = %sender_id,
                    %err,
                    "purchase rejected"
                );
                Err(err)
            }
            other => other,
        }
    }

    fn settle(
        &self,
        store: &mut Store,
        app_id: &AppId,
        item_id: &ItemId,
        sender_id: &ActorId,
        observer: &mut dyn TransactionObserver,
    ) -> Result<Transaction> {
        let app = store
            .app(app_id)
            .ok_or_else(|| Error::InvalidApp(app_id.clone()))?;
        let sender = store
            .user(sender_id)
            .ok_or_else(|| Error::InvalidUser(sender_id.clone()))?;
        let item = app.item(item_id).ok_or_else(|| Error::InvalidItem {
            app: app_id.clone(),
            item: item_id.clone(),
        })?;

        let amount = item.price;
        if sender.balance < amount {
            return Err(Error::InsufficientBalance {
                user: sender_id.clone(),
                balance: sender.balance,
                price: amount,
            });
        }

        let app_share = app.revenue_share;
        let store_fraction = store.revenue_share();
        if store_fraction + app_share != Decimal::ONE {
            return Err(Error::CommissionMismatch {
                store_share: store_fraction,
                app_share,
            });
        }

        let dev_id = app.dev_id.clone();
        let currency = item.currency.clone();
        if store.user(&dev_id).is_none() {
            return Err(Error::MissingDeveloper {
                app: app_id.clone(),
                dev: dev_id,
            });
        }

        // All checks passed; the ledger mutates from here on.
        let dev_share = (app_share * amount).round_dp(2);
        let store_share = (store_fraction * amount).round_dp(2);

        let sender_balance = store.debit_user(sender_id, amount)?;
        let store_balance = store.credit(store_share);
        let dev_balance = store.credit_user(&dev_id, dev_share)?;

        let tx = Transaction {
            kind: TransactionKind::Purchase,
            sequence_id: store.next_sequence_id(),
            app_id: Some(app_id.clone()),
            item_id: Some(item_id.clone()),
            currency,
            amount,
            sender: sender_id.clone(),
            receivers: vec![
                TransactionLeg {
                    recipient: dev_id.clone(),
                    amount: dev_share,
                },
                TransactionLeg {
                    recipient: store.id().clone(),
                    amount: store_share,
                },
            ],
            recorded_at: Utc::now(),
        };
        store.append_transaction(tx.clone())?;
        store.record_purchase(
            sender_id,
            PurchaseRecord {
                app_id: app_id.clone(),
                item_id: item_id.clone(),
                amount,
            },
        )?;

        tracing::info!(
            sequence_id = tx.sequence_id,
            app = %app_id,
            item = %item_id,
            sender = %sender_id,
            %amount,
            "purchase settled"
        );

        observer.transaction_recorded(
            &tx,
            &[
                BalanceChange {
                    actor: sender_id.clone(),
                    balance: sender_balance,
                },
                BalanceChange {
                    actor: dev_id,
                    balance: dev_balance,
                },
                BalanceChange {
                    actor: store.id().clone(),
                    balance: store_balance,
                },
            ],
        );

        // The purchase is on the books, so its own history entry counts
        // toward the loyalty tier.
        self.rewards.evaluate(store, sender_id, app_id, amount, observer)?;

        Ok(tx)
    }
}
