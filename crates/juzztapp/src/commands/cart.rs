use crate::cart::{CartStore, MAX_QUANTITY};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::StorageBackend;

pub fn show<B: StorageBackend>(store: &CartStore<B>) -> CmdResult {
    let mut result = CmdResult::default().with_cart(store.cart().clone());
    if store.cart().is_empty() {
        result.add_message(CmdMessage::info("Your cart is empty"));
    }
    result
}

pub fn add<B: StorageBackend>(store: &mut CartStore<B>, record: &Record) -> Result<CmdResult> {
    store.add(record)?;
    Ok(snapshot(store))
}

pub fn remove<B: StorageBackend>(store: &mut CartStore<B>, id: RecordId) -> Result<CmdResult> {
    let removed = store.remove(id)?;
    let mut result = snapshot(store);
    if !removed {
        result.add_message(CmdMessage::info(not_in_cart(id)));
    }
    Ok(result)
}

pub fn update_quantity<B: StorageBackend>(
    store: &mut CartStore<B>,
    id: RecordId,
    quantity: i64,
) -> Result<CmdResult> {
    let applied = store.update_quantity(id, quantity)?;
    let mut result = snapshot(store);
    match store.cart().get(id) {
        Some(entry) if applied => {
            result.add_message(CmdMessage::success(format!(
                "Quantity of \"{}\" set to {}",
                entry.record.title, entry.quantity
            )));
        }
        _ if quantity < 1 => {
            result.add_message(CmdMessage::warning(
                "Quantity must be at least 1. Use `cart remove` to drop a record.",
            ));
        }
        _ if quantity > i64::from(MAX_QUANTITY) => {
            result.add_message(CmdMessage::warning(format!(
                "Quantity must be at most {}",
                MAX_QUANTITY
            )));
        }
        _ => result.add_message(CmdMessage::info(not_in_cart(id))),
    }
    Ok(result)
}

pub fn clear<B: StorageBackend>(store: &mut CartStore<B>) -> Result<CmdResult> {
    store.clear()?;
    Ok(snapshot(store))
}

fn snapshot<B: StorageBackend>(store: &mut CartStore<B>) -> CmdResult {
    let notifications = store.drain_notifications();
    CmdResult::default()
        .with_cart(store.cart().clone())
        .with_notifications(notifications)
}

fn not_in_cart(id: RecordId) -> String {
    format!("Record {} is not in the cart", id)
}
