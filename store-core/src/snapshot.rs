//! Startup snapshot loading
//!
//! The boundary supplies one JSON snapshot at startup: the store header,
//! flat app/item/user lists. `build` assembles the `Store` aggregate and
//! rejects snapshots with broken references. There is no reload; the
//! catalog and directory live for the process lifetime.

use crate::catalog::{App, Item};
use crate::error::{Error, Result};
use crate::store::{Store, User};
use crate::types::{ActorId, AppId, Currency, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_reward_currency() -> String {
    "€".to_string()
}

/// Store header record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Store id
    pub id: String,

    /// Opening operator balance
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,

    /// Operator revenue share
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue_share: Decimal,

    /// Reward currency symbol; "€" when the snapshot omits it
    #[serde(default = "default_reward_currency")]
    pub reward_currency: String,
}

/// One app of the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppRecord {
    /// App id
    pub id: String,

    /// Developer user id
    pub dev_id: String,

    /// Developer revenue share
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue_share: Decimal,
}

/// One item of the catalog, keyed to its app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item id
    pub id: String,

    /// Owning app id
    pub app_id: String,

    /// Display currency symbol
    pub currency: String,

    /// Price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// One user of the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// User id
    pub id: String,

    /// Opening balance
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Full startup snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Store header
    pub store: StoreRecord,

    /// Published apps
    pub apps: Vec<AppRecord>,

    /// Items, referencing their apps by id
    pub items: Vec<ItemRecord>,

    /// User directory
    pub users: Vec<UserRecord>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Assemble the store aggregate
    ///
    /// Users are inserted first so app developer references can be
    /// validated; items are attached to their apps last.
    pub fn build(self) -> Result<Store> {
        let mut store = Store::new(
            ActorId::new(self.store.id),
            self.store.balance,
            self.store.revenue_share,
            Currency::new(self.store.reward_currency),
        );

        for user in self.users {
            store.insert_user(User::new(ActorId::new(user.id), user.balance))?;
        }

        for app in self.apps {
            let id = AppId::new(app.id);
            let dev_id = ActorId::new(app.dev_id);
            if store.user(&dev_id).is_none() {
                return Err(Error::UnknownDeveloper { app: id, dev: dev_id });
            }
            store.insert_app(App::new(id, dev_id, app.revenue_share))?;
        }

        for item in self.items {
            let id = ItemId::new(item.id);
            if item.price < Decimal::ZERO {
                return Err(Error::NegativePrice {
                    item: id,
                    price: item.price,
                });
            }
            store.attach_item(Item {
                id,
                app_id: AppId::new(item.app_id),
                currency: Currency::new(item.currency),
                price: item.price,
            })?;
        }

        tracing::info!(
            apps = store.app_count(),
            users = store.user_count(),
            "snapshot loaded"
        );
        Ok(store)
    }
}
