use super::backend::KeyValueBackend;
use super::{DataStore, EMAIL_KEY, LISTINGS_KEY, LOGGED_IN_KEY};
use crate::config::CorruptDataPolicy;
use crate::error::{CarlotError, Result};
use crate::format::generate_id;
use crate::model::{Listing, ListingId, NewListing, Session};
use crate::seed::seed_listings;
use chrono::Utc;
use tracing::{debug, warn};

pub struct ListingStore<B: KeyValueBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    on_corrupt: CorruptDataPolicy,
    next_id: Box<dyn Fn() -> ListingId>,
}

impl<B: KeyValueBackend> ListingStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            on_corrupt: CorruptDataPolicy::default(),
            next_id: Box::new(generate_id),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptDataPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    /// Replace the time-derived id source.
    pub fn with_id_generator(mut self, next_id: impl Fn() -> ListingId + 'static) -> Self {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn write_listings(&self, listings: &[Listing]) -> Result<()> {
        let json = serde_json::to_string(listings)?;
        self.backend.set(LISTINGS_KEY, &json)?;
        debug!(count = listings.len(), "persisted listings");
        Ok(())
    }

    fn write_seed(&self) -> Result<Vec<Listing>> {
        let seed = seed_listings();
        self.write_listings(&seed)?;
        Ok(seed)
    }
}

impl<B: KeyValueBackend> DataStore for ListingStore<B> {
    fn load_all(&self) -> Result<Vec<Listing>> {
        let Some(raw) = self.backend.get(LISTINGS_KEY)? else {
            debug!("no persisted listings, seeding sample data");
            return self.write_seed();
        };

        match serde_json::from_str::<Vec<Listing>>(&raw) {
            Ok(listings) => Ok(listings),
            Err(err) => match self.on_corrupt {
                CorruptDataPolicy::Fail => Err(CarlotError::Serialization(err)),
                CorruptDataPolicy::Reseed => {
                    warn!(error = %err, "malformed listings document, reseeding");
                    self.write_seed()
                }
            },
        }
    }

    fn save_all(&mut self, listings: &[Listing]) -> Result<()> {
        self.write_listings(listings)
    }

    fn create(&mut self, listing: NewListing) -> Result<Listing> {
        let mut listings = self.load_all()?;
        let created = Listing::from_new(listing, (self.next_id)(), Utc::now());
        listings.insert(0, created.clone());
        self.write_listings(&listings)?;
        Ok(created)
    }

    fn fetch_by_id(&self, id: ListingId) -> Result<Option<Listing>> {
        Ok(self.load_all()?.into_iter().find(|l| l.id == id))
    }

    fn delete_by_id(&mut self, id: ListingId) -> Result<bool> {
        let listings = self.load_all()?;
        let before = listings.len();
        let kept: Vec<Listing> = listings.into_iter().filter(|l| l.id != id).collect();
        self.write_listings(&kept)?;
        Ok(kept.len() != before)
    }

    fn reseed(&mut self) -> Result<Vec<Listing>> {
        self.write_seed()
    }

    fn load_session(&self) -> Result<Session> {
        let logged_in = self.backend.get(LOGGED_IN_KEY)?.as_deref() == Some("true");
        let email = self
            .backend
            .get(EMAIL_KEY)?
            .filter(|email| !email.trim().is_empty());
        Ok(Session { logged_in, email })
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        let flag = if session.logged_in { "true" } else { "false" };
        self.backend.set(LOGGED_IN_KEY, flag)?;
        match &session.email {
            Some(email) => self.backend.set(EMAIL_KEY, email),
            None => self.backend.remove(EMAIL_KEY),
        }
    }

    fn clear_session(&mut self) -> Result<()> {
        self.backend.remove(LOGGED_IN_KEY)?;
        self.backend.remove(EMAIL_KEY)
    }
}
