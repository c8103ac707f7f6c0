//! Core types for the storefront ledger
//!
//! Identifiers are snapshot-supplied strings wrapped in newtypes; every
//! monetary value is a `Decimal` for exact arithmetic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// App identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Create new app ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item identifier, unique within its owning app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Create new item ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant identifier
///
/// Users, developers and the store itself share one id space: the receivers
/// of a transaction mix all three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(String);

impl ActorId {
    /// Create new actor ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display currency symbol (e.g. "€")
///
/// The snapshot supplies the symbol per item; the ledger never converts
/// between currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Create new currency symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Item purchase settled between sender, developer and store
    Purchase,
    /// Loyalty reward funded by the store
    Reward,
}

impl TransactionKind {
    /// Uppercase label used on receipts
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Purchase => "PURCHASE",
            TransactionKind::Reward => "REWARD",
        }
    }
}

/// One credited party of a transaction
///
/// Legs keep insertion order: developer share before store share on
/// purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionLeg {
    /// Recipient
    pub recipient: ActorId,

    /// Amount credited
    pub amount: Decimal,
}

/// Immutable receipt of a completed monetary event
///
/// Created once by the engines, appended to the store's log, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction kind
    pub kind: TransactionKind,

    /// 1-based position in the store's log, shared across kinds
    pub sequence_id: u64,

    /// App the purchase belongs to (`None` for rewards)
    pub app_id: Option<AppId>,

    /// Item purchased (`None` for rewards)
    pub item_id: Option<ItemId>,

    /// Currency of the amount
    pub currency: Currency,

    /// Amount moved by this transaction
    pub amount: Decimal,

    /// Paying party
    pub sender: ActorId,

    /// Credited parties in display order
    pub receivers: Vec<TransactionLeg>,

    /// When the transaction was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Amount credited to `recipient`, if it is a receiver of this
    /// transaction
    pub fn credited_to(&self, recipient: &ActorId) -> Option<Decimal> {
        self.receivers
            .iter()
            .find(|leg| &leg.recipient == recipient)
            .map(|leg| leg.amount)
    }
}

/// One entry of a user's purchase history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// App the item belongs to
    pub app_id: AppId,

    /// Purchased item
    pub item_id: ItemId,

    /// Price paid
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Purchase.label(), "PURCHASE");
        assert_eq!(TransactionKind::Reward.label(), "REWARD");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AppId::new("app1").to_string(), "app1");
        assert_eq!(ActorId::new("user1").as_str(), "user1");
        assert_eq!(Currency::new("€").to_string(), "€");
    }

    #[test]
    fn test_credited_to() {
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

        assert_eq!(tx.credited_to(&ActorId::new("dev1")), Some(dec!(0.75)));
        assert_eq!(tx.credited_to(&ActorId::new("store1")), Some(dec!(0.25)));
        assert_eq!(tx.credited_to(&ActorId::new("user1")), None);
    }
}
