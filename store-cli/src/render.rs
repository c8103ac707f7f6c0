//! Console receipt rendering
//!
//! Formats transactions and balance summaries for the console. The core
//! never formats text; it hands transactions and touched balances to the
//! observer below.

use store_core::{BalanceChange, Currency, Transaction, TransactionKind, TransactionObserver};

/// Observer printing a receipt and balance summary per recorded transaction
#[derive(Debug)]
pub struct ConsoleObserver {
    balance_currency: Currency,
}

impl ConsoleObserver {
    /// Print balances in `balance_currency` (the store's reward currency)
    pub fn new(balance_currency: Currency) -> Self {
        Self { balance_currency }
    }
}

impl TransactionObserver for ConsoleObserver {
    fn transaction_recorded(&mut self, tx: &Transaction, balances: &[BalanceChange]) {
        if tx.kind == TransactionKind::Reward {
            println!("#########");
        }
        println!("{}", receipt_line(tx));
        println!("{}", balance_line(&self.balance_currency, balances));
    }
}

/// Receipt line for one transaction
pub fn receipt_line(tx: &Transaction) -> String {
    let receivers = tx
        .receivers
        .iter()
        .map(|leg| format!("{}: {}{}", leg.recipient, tx.currency, leg.amount))
        .collect::<Vec<_>>()
        .join("; ");

    match (&tx.app_id, &tx.item_id) {
        (Some(app), Some(item)) => format!(
            "{} TRANSACTION => id: {}; app: {}; item: {}; amount: {}{:.2}; sender: {}; receivers: {}",
            tx.kind.label(),
            tx.sequence_id,
            app,
            item,
            tx.currency,
            tx.amount,
            tx.sender,
            receivers
        ),
        _ => format!(
            "{} TRANSACTION => id: {}; amount: {}{:.2}; sender: {}; receivers: {}",
            tx.kind.label(),
            tx.sequence_id,
            tx.currency,
            tx.amount,
            tx.sender,
            receivers
        ),
    }
}

/// Balance summary for the actors a transaction touched
pub fn balance_line(currency: &Currency, balances: &[BalanceChange]) -> String {
    let entries = balances
        .iter()
        .map(|change| format!("{}: {}{:.2}", change.actor, currency, change.balance))
        .collect::<Vec<_>>()
        .join("; ");
    format!("BALANCE => {entries}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use store_core::{ActorId, AppId, ItemId, TransactionLeg};

    #[test]
    fn test_purchase_receipt_line() {
        let tx = Transaction {
            kind: TransactionKind::Purchase,
            sequence_id: 1,
            app_id: Some(AppId::new("app1")),
            item_id: Some(ItemId::new("item1")),
            currency: Currency::new("€"),
            amount: dec!(1.00),
            sender: ActorId::new("user1"),
            receivers: vec![
                TransactionLeg {
                    recipient: ActorId::new("dev1"),
                    amount: dec!(0.75),
                },
                TransactionLeg {
                    recipient: ActorId::new("store1"),
                    amount: dec!(0.25),
                },
            ],
            recorded_at: Utc::now(),
        };

        assert_eq!(
            receipt_line(&tx),
            "PURCHASE TRANSACTION => id: 1; app: app1; item: item1; amount: €1.00; \
             sender: user1; receivers: dev1: €0.75; store1: €0.25"
        );
    }

    #[test]
    fn test_reward_receipt_line_omits_app_and_item() {
        let tx = Transaction {
            kind: TransactionKind::Reward,
            sequence_id: 3,
            app_id: None,
            item_id: None,
            currency: Currency::new("€"),
            amount: dec!(0.05),
            sender: ActorId::new("store1"),
            receivers: vec![TransactionLeg {
                recipient: ActorId::new("user1"),
                amount: dec!(0.05),
            }],
            recorded_at: Utc::now(),
        };

        assert_eq!(
            receipt_line(&tx),
            "REWARD TRANSACTION => id: 3; amount: €0.05; sender: store1; receivers: user1: €0.05"
        );
    }

    #[test]
    fn test_balance_line() {
        let balances = vec![
            BalanceChange {
                actor: ActorId::new("user1"),
                balance: dec!(9.00),
            },
            BalanceChange {
                actor: ActorId::new("store1"),
                balance: dec!(1.25),
            },
        ];

        assert_eq!(
            balance_line(&Currency::new("€"), &balances),
            "BALANCE => user1: €9.00; store1: €1.25"
        );
    }
}
