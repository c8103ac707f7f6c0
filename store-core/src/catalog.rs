//! Catalog reference data: items and the apps that sell them
//!
//! Loaded once at startup from the snapshot and held immutable for the
//! process lifetime.

use crate::types::{ActorId, AppId, Currency, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Digital item offered by an app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item ID, unique within the owning app
    pub id: ItemId,

    /// Owning app
    pub app_id: AppId,

    /// Display currency
    pub currency: Currency,

    /// Price (non-negative, enforced at snapshot load)
    pub price: Decimal,
}

/// App published on the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct App {
    /// App ID
    pub id: AppId,

    /// Developer credited with the app's revenue share (references a user)
    pub dev_id: ActorId,

    /// Items sold by this app, keyed by item ID
    pub items: HashMap<ItemId, Item>,

    /// Developer revenue share, fraction in [0, 1]
    ///
    /// Checked against the store's share at transaction time, not here.
    pub revenue_share: Decimal,
}

impl App {
    /// Create an app with an empty item set
    pub fn new(id: AppId, dev_id: ActorId, revenue_share: Decimal) -> Self {
        Self {
            id,
            dev_id,
            items: HashMap::new(),
            revenue_share,
        }
    }

    /// Look up an item of this app
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }
}
