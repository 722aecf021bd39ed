use super::listing_store::ListingStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ListingStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ListingStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewListing, PLACEHOLDER_IMAGE};
    use std::cell::Cell;
    use std::rc::Rc;

    /// A store whose ids count up from 1000, so tests can predict them.
    pub fn sequential_store() -> InMemoryStore {
        let next = Rc::new(Cell::new(1000));
        InMemoryStore::new().with_id_generator(move || {
            let id = next.get();
            next.set(id + 1);
            id
        })
    }

    pub fn new_listing(name: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            price: 12500.0,
            location: "Portland, OR".to_string(),
            description: format!("{} in good shape, one owner", name),
            image: PLACEHOLDER_IMAGE.to_string(),
            year: Some("2018".to_string()),
            mileage: None,
            fuel: Some("Hybrid".to_string()),
        }
    }
}
