use super::backend::StorageBackend;
use crate::error::{JuzztError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct Slots {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since juzzt is single-threaded.
/// Clones share the same slots, mirroring two handles onto one data directory.
#[derive(Clone, Default)]
pub struct MemBackend {
    slots: Rc<Slots>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without counting it as a write.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.slots
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.slots.simulate_write_error.set(simulate);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.slots.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.slots.simulate_write_error.get() {
            return Err(JuzztError::Store("Simulated write error".to_string()));
        }
        self.slots
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.slots.writes.set(self.slots.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_slots() {
        let a = MemBackend::new();
        let b = a.clone();
        a.write("token", "abc").unwrap();
        assert_eq!(b.read("token").unwrap(), Some("abc".to_string()));
        b.remove("token").unwrap();
        assert_eq!(a.read("token").unwrap(), None);
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.write("cart", "[]").is_err());
        assert_eq!(backend.write_count(), 0);
        assert_eq!(backend.read("cart").unwrap(), None);
    }
}
