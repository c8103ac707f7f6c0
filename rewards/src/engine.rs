//! Reward evaluation and granting

use crate::error::{Error, Result};
use crate::schedule::RewardSchedule;
use chrono::Utc;
use rust_decimal::Decimal;
use store_core::{
    ActorId, AppId, BalanceChange, Store, Transaction, TransactionKind, TransactionLeg,
    TransactionObserver,
};

/// Loyalty reward engine
#[derive(Debug, Clone, Default)]
pub struct RewardEngine {
    schedule: RewardSchedule,
}

impl RewardEngine {
    /// Create an engine applying `schedule`
    pub fn new(schedule: RewardSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this engine applies
    pub fn schedule(&self) -> &RewardSchedule {
        &self.schedule
    }

    /// Evaluate the loyalty rule for a settled purchase of `amount` in
    /// `app_id` by `user_id`
    ///
    /// The triggering purchase is already part of the user's history, so
    /// its own record counts toward the tier. Below the first tier nothing
    /// is mutated and `Ok(None)` is returned. Otherwise the user is
    /// credited, the store debited (its balance may go negative), and the
    /// REWARD transaction is appended on the shared sequence and reported
    /// through `observer`.
    pub fn evaluate(
        &self,
        store: &mut Store,
        user_id: &ActorId,
        app_id: &AppId,
        amount: Decimal,
        observer: &mut dyn TransactionObserver,
    ) -> Result<Option<Transaction>> {
        let user = store
            .user(user_id)
            .ok_or_else(|| Error::UnknownUser(user_id.clone()))?;
        let count = user.purchases_of(app_id);

        let Some(rate) = self.schedule.rate_for(count) else {
            tracing::debug!(user = %user_id, app = %app_id, count, "no reward tier reached");
            return Ok(None);
        };

        let reward_amount = (amount * rate).round_dp(2);
        let store_id = store.id().clone();

        let user_balance = store.credit_user(user_id, reward_amount)?;
        let store_balance = store.debit(reward_amount);

        let tx = Transaction {
            kind: TransactionKind::Reward,
            sequence_id: store.next_sequence_id(),
            app_id: None,
            item_id: None,
            currency: store.reward_currency().clone(),
            amount: reward_amount,
            sender: store_id.clone(),
            receivers: vec![TransactionLeg {
                recipient: user_id.clone(),
                amount: reward_amount,
            }],
            recorded_at: Utc::now(),
        };
        store.append_transaction(tx.clone())?;

        tracing::info!(
            sequence_id = tx.sequence_id,
            user = %user_id,
            %reward_amount,
            count,
            "reward granted"
        );

        observer.transaction_recorded(
            &tx,
            &[
                BalanceChange {
                    actor: user_id.clone(),
                    balance: user_balance,
                },
                BalanceChange {
                    actor: store_id,
                    balance: store_balance,
                },
            ],
        );

        Ok(Some(tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use store_core::{Currency, ItemId, NoopObserver, PurchaseRecord, User};

    fn store_with_history(purchase_count: usize) -> Store {
        let mut store = Store::new(
            ActorId::new("store1"),
            dec!(1.00),
            dec!(0.25),
            Currency::new("€"),
        );
        store
            .insert_user(User::new(ActorId::new("user1"), dec!(10.00)))
            .unwrap();
        for _ in 0..purchase_count {
            store
                .record_purchase(
                    &ActorId::new("user1"),
                    PurchaseRecord {
                        app_id: AppId::new("app1"),
                        item_id: ItemId::new("item1"),
                        amount: dec!(1.00),
                    },
                )
                .unwrap();
        }
        store
    }

    #[test]
    fn test_single_purchase_earns_nothing() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(1);

        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app1"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap();

        assert!(reward.is_none());
        assert_eq!(store.balance(), dec!(1.00));
        assert_eq!(store.user(&ActorId::new("user1")).unwrap().balance, dec!(10.00));
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_standard_tier_pays_five_percent() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(2);

        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app1"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap()
            .unwrap();

        assert_eq!(reward.kind, TransactionKind::Reward);
        assert_eq!(reward.amount, dec!(0.05));
        assert_eq!(reward.sender, ActorId::new("store1"));
        assert_eq!(reward.app_id, None);
        assert_eq!(reward.item_id, None);
        assert_eq!(reward.currency, Currency::new("€"));
        assert_eq!(reward.receivers.len(), 1);
        assert_eq!(reward.receivers[0].recipient, ActorId::new("user1"));

        assert_eq!(store.balance(), dec!(0.95));
        assert_eq!(store.user(&ActorId::new("user1")).unwrap().balance, dec!(10.05));
    }

    #[test]
    fn test_elevated_tier_pays_ten_percent() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(11);

        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app1"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap()
            .unwrap();

        assert_eq!(reward.amount, dec!(0.10));
        assert_eq!(store.balance(), dec!(0.90));
    }

    #[test]
    fn test_history_of_other_apps_does_not_count() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(5);

        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app2"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap();

        assert!(reward.is_none());
    }

    #[test]
    fn test_store_balance_may_go_negative() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(2);
        store.debit(dec!(1.00)); // operator balance down to zero

        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app1"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap();

        assert!(reward.is_some());
        assert_eq!(store.balance(), dec!(-0.05));
    }

    #[test]
    fn test_unknown_user_is_a_defect() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(0);

        let err = engine
            .evaluate(
                &mut store,
                &ActorId::new("ghost"),
                &AppId::new("app1"),
                dec!(1.00),
                &mut NoopObserver,
            )
            .unwrap_err();

        assert!(matches!(err, Error::UnknownUser(_)));
    }

    #[test]
    fn test_reward_amount_rounds_to_cents() {
        let engine = RewardEngine::default();
        let mut store = store_with_history(2);

        // 5% of 0.90 is 0.045, a midpoint: half-to-even lands on 0.04
        let reward = engine
            .evaluate(
                &mut store,
                &ActorId::new("user1"),
                &AppId::new("app1"),
                dec!(0.90),
                &mut NoopObserver,
            )
            .unwrap()
            .unwrap();

        assert_eq!(reward.amount, dec!(0.04));
    }
}
