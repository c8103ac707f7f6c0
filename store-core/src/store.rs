//! Ledger entities: users and the store aggregate

use crate::catalog::{App, Item};
use crate::error::{Error, Result};
use crate::types::{ActorId, AppId, Currency, PurchaseRecord, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storefront user with a spendable balance and purchase history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: ActorId,

    /// Spendable balance
    ///
    /// Mutated only by the engines; the affordability check before a
    /// purchase is the sole lower bound.
    pub balance: Decimal,

    /// Append-only purchase history
    pub purchases: Vec<PurchaseRecord>,
}

impl User {
    /// Create a user with an empty history
    pub fn new(id: ActorId, balance: Decimal) -> Self {
        Self {
            id,
            balance,
            purchases: Vec::new(),
        }
    }

    /// Number of recorded purchases within one app
    pub fn purchases_of(&self, app_id: &AppId) -> usize {
        self.purchases.iter().filter(|p| &p.app_id == app_id).count()
    }
}

/// The storefront ledger aggregate
///
/// Owns the catalog, the user directory and the transaction log. Callers
/// hold the aggregate directly and pass it by mutable reference; all
/// mutation goes through the settlement and reward engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Store's own actor ID
    id: ActorId,

    /// Operator balance
    balance: Decimal,

    /// Operator revenue share, fraction in [0, 1]
    revenue_share: Decimal,

    /// Currency rewards are denominated in
    reward_currency: Currency,

    /// Published apps keyed by ID
    apps: HashMap<AppId, App>,

    /// User directory keyed by ID
    users: HashMap<ActorId, User>,

    /// Append-only transaction log
    transactions: Vec<Transaction>,
}

impl Store {
    /// Create an empty store
    pub fn new(
        id: ActorId,
        balance: Decimal,
        revenue_share: Decimal,
        reward_currency: Currency,
    ) -> Self {
        Self {
            id,
            balance,
            revenue_share,
            reward_currency,
            apps: HashMap::new(),
            users: HashMap::new(),
            transactions: Vec::new(),
        }
    }

    /// Store's actor ID
    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// Operator balance
    ///
    /// May go negative: the store funds rewards without an affordability
    /// check.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Operator revenue share
    pub fn revenue_share(&self) -> Decimal {
        self.revenue_share
    }

    /// Currency rewards are denominated in
    pub fn reward_currency(&self) -> &Currency {
        &self.reward_currency
    }

    /// Credit the operator balance, returning the new balance
    pub fn credit(&mut self, amount: Decimal) -> Decimal {
        self.balance += amount;
        self.balance
    }

    /// Debit the operator balance, returning the new balance
    pub fn debit(&mut self, amount: Decimal) -> Decimal {
        self.balance -= amount;
        self.balance
    }

    /// Add an app to the catalog
    pub fn insert_app(&mut self, app: App) -> Result<()> {
        if self.apps.contains_key(&app.id) {
            return Err(Error::DuplicateApp(app.id));
        }
        self.apps.insert(app.id.clone(), app);
        Ok(())
    }

    /// Add a user to the directory
    pub fn insert_user(&mut self, user: User) -> Result<()> {
        if self.users.contains_key(&user.id) {
            return Err(Error::DuplicateUser(user.id));
        }
        self.users.insert(user.id.clone(), user);
        Ok(())
    }

    /// Attach an item to its app
    pub fn attach_item(&mut self, item: Item) -> Result<()> {
        let app = self.apps.get_mut(&item.app_id).ok_or_else(|| Error::UnknownItemApp {
            app: item.app_id.clone(),
            item: item.id.clone(),
        })?;
        if app.items.contains_key(&item.id) {
            return Err(Error::DuplicateItem {
                app: item.app_id.clone(),
                item: item.id,
            });
        }
        app.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Look up an app
    pub fn app(&self, id: &AppId) -> Option<&App> {
        self.apps.get(id)
    }

    /// Look up a user
    pub fn user(&self, id: &ActorId) -> Option<&User> {
        self.users.get(id)
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of published apps
    pub fn app_count(&self) -> usize {
        self.apps.len()
    }

    /// Credit a user's balance, returning the new balance
    pub fn credit_user(&mut self, id: &ActorId, amount: Decimal) -> Result<Decimal> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::UnknownActor(id.clone()))?;
        user.balance += amount;
        Ok(user.balance)
    }

    /// Debit a user's balance, returning the new balance
    ///
    /// Affordability is the caller's concern; the balance may legally end
    /// up anywhere.
    pub fn debit_user(&mut self, id: &ActorId, amount: Decimal) -> Result<Decimal> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::UnknownActor(id.clone()))?;
        user.balance -= amount;
        Ok(user.balance)
    }

    /// Append one entry to a user's purchase history
    pub fn record_purchase(&mut self, id: &ActorId, record: PurchaseRecord) -> Result<()> {
        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| Error::UnknownActor(id.clone()))?;
        user.purchases.push(record);
        Ok(())
    }

    /// Sequence id the next appended transaction must carry (1-based)
    pub fn next_sequence_id(&self) -> u64 {
        self.transactions.len() as u64 + 1
    }

    /// Append a transaction to the log, returning its sequence id
    pub fn append_transaction(&mut self, tx: Transaction) -> Result<u64> {
        let expected = self.next_sequence_id();
        if tx.sequence_id != expected {
            return Err(Error::SequenceGap {
                expected,
                got: tx.sequence_id,
            });
        }
        tracing::debug!(sequence_id = tx.sequence_id, kind = tx.kind.label(), "transaction appended");
        self.transactions.push(tx);
        Ok(expected)
    }

    /// The full transaction log in append order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
