//! # Storage Layer
//!
//! This module defines the storage abstraction for carlot. The [`DataStore`]
//! trait is the repository interface the rest of the crate talks to; the
//! [`backend::KeyValueBackend`] trait underneath it is the raw key-value I/O.
//!
//! ## Persisted Document
//!
//! The whole listing collection is one JSON array under a single key. Every
//! mutation is read-modify-write of that document with no locking, so two
//! processes writing at once race and the last writer wins.
//!
//! ## Lifecycle
//!
//! - **Seeding**: the first `load_all` against an absent key writes the six
//!   built-in listings and returns them. An empty array is a valid collection
//!   and is never reseeded.
//! - **Create**: prepends, so the newest listing is always first.
//! - **Delete**: filters by id and rewrites the document.
//! - **Corruption**: governed by [`CorruptDataPolicy`](crate::config::CorruptDataPolicy).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, one file per key in the data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── cars          # JSON array of listings
//! ├── isLoggedIn    # "true" / "false"
//! ├── userEmail     # email text
//! └── config.json   # configuration
//! ```

use crate::error::Result;
use crate::model::{Listing, ListingId, NewListing, Session};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod listing_store;
pub mod mem_backend;
pub mod memory;

pub const LISTINGS_KEY: &str = "cars";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const EMAIL_KEY: &str = "userEmail";

/// Abstract interface for listing storage.
pub trait DataStore {
    /// The full collection, seeding storage on first access.
    fn load_all(&self) -> Result<Vec<Listing>>;

    /// Replace the full collection.
    fn save_all(&mut self, listings: &[Listing]) -> Result<()>;

    /// Assign an id, prepend and persist. Does not validate.
    fn create(&mut self, listing: NewListing) -> Result<Listing>;

    /// First listing with the given id.
    fn fetch_by_id(&self, id: ListingId) -> Result<Option<Listing>>;

    /// Remove every listing with the given id. Returns whether any was removed.
    fn delete_by_id(&mut self, id: ListingId) -> Result<bool>;

    /// Overwrite the collection with the seed listings.
    fn reseed(&mut self) -> Result<Vec<Listing>>;

    fn load_session(&self) -> Result<Session>;

    fn save_session(&mut self, session: &Session) -> Result<()>;

    fn clear_session(&mut self) -> Result<()>;
}
