use crate::error::Result;

/// Abstract interface for raw key-value I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`ListingStore`](super::listing_store::ListingStore) handles the "what":
/// the listing collection, seeding and the session keys.
///
/// Values are opaque text. Methods take `&self`; implementations that hold
/// state in memory use interior mutability.
pub trait KeyValueBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so a reader never observes a partial write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
