//! # Cart Store
//!
//! The [`CartStore`] is the single owner of the shopping cart for a session.
//! It is constructed once, handed to whoever needs it (the API facade), and
//! never looked up through global state.
//!
//! ## State Machine
//!
//! | Operation                | Precondition        | Effect                       | Notification |
//! |--------------------------|---------------------|------------------------------|--------------|
//! | `add(record)`            | id present          | quantity += 1 (saturating)   | `Added`      |
//! | `add(record)`            | id absent           | push entry, quantity 1       | `Added`      |
//! | `remove(id)`             | id present          | entry deleted                | `Removed`    |
//! | `remove(id)`             | id absent           | nothing                      | none         |
//! | `update_quantity(id, q)` | q in range, present | quantity := q                | none         |
//! | `update_quantity(id, q)` | q out of range      | nothing                      | none         |
//! | `update_quantity(id, q)` | id absent           | nothing                      | none         |
//! | `clear()`                | any                 | cart emptied                 | `Cleared`    |
//!
//! A quantity below one is a floor, not a shortcut for removal.
//!
//! ## Persistence
//!
//! Every state change is written to the [`CART_KEY`] slot before it becomes
//! visible. If the write fails the in-memory cart keeps its previous value,
//! no notification is queued, and the error is returned.
//!
//! On [`CartStore::open`] the slot is read back. A missing slot, unreadable
//! storage, malformed JSON, a zero quantity or a duplicated id all yield an
//! empty cart; opening never fails.
//!
//! ## Notifications
//!
//! Notifications are advisory. They queue up inside the store and the
//! presentation layer collects them with [`CartStore::drain_notifications`].

use crate::error::Result;
use crate::model::{CartEntry, Record, RecordId};
use crate::store::{StorageBackend, CART_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod notification;

pub use notification::{Notification, NotificationAction, NotificationLevel};

/// Largest quantity a cart entry can hold.
pub const MAX_QUANTITY: u32 = u32::MAX;

/// Ordered cart contents. Totals are always folded from the entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn get(&self, id: RecordId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of price × quantity.
    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }

    fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .all(|entry| entry.quantity >= 1 && seen.insert(entry.id()))
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

pub struct CartStore<B: StorageBackend> {
    backend: B,
    cart: Cart,
    notifications: Vec<Notification>,
}

impl<B: StorageBackend> CartStore<B> {
    /// Restore the cart from `backend`, falling back to an empty cart.
    pub fn open(backend: B) -> Self {
        let cart = load_cart(&backend);
        Self {
            backend,
            cart,
            notifications: Vec::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn add(&mut self, record: &Record) -> Result<()> {
        let mut next = self.cart.clone();
        match next.position(record.id) {
            Some(pos) => {
                let entry = &mut next.entries[pos];
                entry.quantity = entry.quantity.saturating_add(1);
            }
            None => next.entries.push(CartEntry::new(record.clone())),
        }
        self.commit(next)?;
        self.notifications.push(Notification::added(record));
        Ok(())
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: RecordId) -> Result<bool> {
        let Some(pos) = self.cart.position(id) else {
            return Ok(false);
        };
        let mut next = self.cart.clone();
        let removed = next.entries.remove(pos);
        self.commit(next)?;
        self.notifications.push(Notification::removed(&removed.record));
        Ok(true)
    }

    /// Returns whether the quantity was applied. Values outside
    /// `1..=MAX_QUANTITY` are rejected like an absent id.
    pub fn update_quantity(&mut self, id: RecordId, quantity: i64) -> Result<bool> {
        let Ok(quantity @ 1..=MAX_QUANTITY) = u32::try_from(quantity) else {
            return Ok(false);
        };
        let Some(pos) = self.cart.position(id) else {
            return Ok(false);
        };
        let mut next = self.cart.clone();
        next.entries[pos].quantity = quantity;
        self.commit(next)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(Cart::default())?;
        self.notifications.push(Notification::Cleared);
        Ok(())
    }

    pub fn pending_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn commit(&mut self, next: Cart) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.backend.write(CART_KEY, &serialized)?;
        tracing::debug!(
            entries = next.len(),
            items = next.total_items(),
            "persisted cart"
        );
        self.cart = next;
        Ok(())
    }
}

fn load_cart<B: StorageBackend>(backend: &B) -> Cart {
    let raw = match backend.read(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored cart, starting empty");
            return Cart::default();
        }
    };

    match serde_json::from_str::<Cart>(&raw) {
        Ok(cart) if cart.is_well_formed() => cart,
        Ok(_) => {
            tracing::warn!("stored cart has invalid entries, starting empty");
            Cart::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored cart is malformed, starting empty");
            Cart::default()
        }
    }
}
