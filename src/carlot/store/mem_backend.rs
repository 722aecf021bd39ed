use super::backend::KeyValueBackend;
use crate::error::{CarlotError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value backend for testing.
///
/// Uses `RefCell` for interior mutability since carlot is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CarlotError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CarlotError::Store("Simulated write error".to_string()));
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let backend = MemBackend::new();
        assert_eq!(backend.get("cars").unwrap(), None);

        backend.set("cars", "[]").unwrap();
        assert_eq!(backend.get("cars").unwrap().as_deref(), Some("[]"));

        backend.remove("cars").unwrap();
        assert_eq!(backend.get("cars").unwrap(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn simulated_write_errors_leave_values_untouched() {
        let backend = MemBackend::new();
        backend.set("userEmail", "a@b.co").unwrap();
        backend.set_simulate_write_error(true);

        assert!(backend.set("userEmail", "x@y.co").is_err());
        assert!(backend.remove("userEmail").is_err());
        assert_eq!(backend.get("userEmail").unwrap().as_deref(), Some("a@b.co"));
    }
}
