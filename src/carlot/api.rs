//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all carlot operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies configuration** (placeholder image) to the commands that need it
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no presentation.
//!
//! ## Listing References
//!
//! Methods that act on one listing take the reference as entered: a bare id
//! (`"42"`) or a details link (`"details.html?id=42"`). Parsing happens in the
//! command via [`crate::model::parse_listing_id`].
//!
//! ## Generic Over DataStore
//!
//! `CarlotApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CarlotApi<FileStore>`
//! - Testing: `CarlotApi<InMemoryStore>`

use crate::commands;
use crate::config::CarlotConfig;
use crate::error::Result;
use crate::form::{ListingForm, LoginForm};
use crate::store::DataStore;

/// The main API facade for carlot operations.
pub struct CarlotApi<S: DataStore> {
    store: S,
    paths: commands::CarlotPaths,
    config: CarlotConfig,
}

impl<S: DataStore> CarlotApi<S> {
    pub fn new(store: S, paths: commands::CarlotPaths, config: CarlotConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    /// All listings, or only those matching `query` when one is given.
    pub fn get_listings(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        match query {
            Some(term) => commands::search::run(&self.store, term),
            None => commands::list::run(&self.store),
        }
    }

    pub fn sell(&mut self, form: ListingForm, dry_run: bool) -> Result<commands::CmdResult> {
        commands::create::run(
            &mut self.store,
            form,
            &self.config.placeholder_image,
            dry_run,
        )
    }

    pub fn view_listing(&self, reference: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, reference)
    }

    pub fn delete_listing(&mut self, reference: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, reference)
    }

    pub fn login(&mut self, form: LoginForm) -> Result<commands::CmdResult> {
        commands::login::run(&mut self.store, form)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::login::logout(&mut self.store)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        commands::login::status(&self.store)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CarlotPaths, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sequential_store;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api_with(store: InMemoryStore, config: CarlotConfig) -> CarlotApi<InMemoryStore> {
        let paths = CarlotPaths {
            data_dir: PathBuf::from("/nonexistent/carlot"),
        };
        CarlotApi::new(store, paths, config)
    }

    fn count(api: &CarlotApi<InMemoryStore>, query: Option<&str>) -> usize {
        api.get_listings(query).unwrap().listed_listings.len()
    }

    fn sell_form() -> ListingForm {
        ListingForm {
            name: "Porsche 911".into(),
            price: "99000".into(),
            location: "Austin, TX".into(),
            description: "Guards red, manual gearbox, garage kept".into(),
            ..Default::default()
        }
    }

    #[test]
    fn get_listings_dispatches_on_query() {
        let api = api_with(InMemoryStore::new(), CarlotConfig::default());
        assert_eq!(count(&api, None), 6);
        assert_eq!(count(&api, Some("dallas")), 1);
        assert_eq!(count(&api, Some("")), 6);
    }

    #[test]
    fn sell_passes_configured_placeholder() {
        let placeholder = "https://img.example.com/blank.png";
        let config = CarlotConfig {
            placeholder_image: placeholder.into(),
            ..Default::default()
        };
        let mut api = api_with(sequential_store(), config);
        let result = api.sell(sell_form(), false).unwrap();
        assert_eq!(result.affected_listings[0].image, placeholder);

        let viewed = api.view_listing("1000").unwrap();
        assert_eq!(viewed.listed_listings[0].name, "Porsche 911");
    }

    #[test]
    fn delete_then_view_is_not_found() {
        let mut api = api_with(InMemoryStore::new(), CarlotConfig::default());
        api.delete_listing("details.html?id=1").unwrap();
        assert!(api.view_listing("1").unwrap_err().is_not_found());
    }

    #[test]
    fn session_round_trip_through_api() {
        let mut api = api_with(InMemoryStore::new(), CarlotConfig::default());
        api.login(LoginForm::new("a@b.co", "123456")).unwrap();
        assert!(api.whoami().unwrap().session.unwrap().logged_in);
        api.logout().unwrap();
        assert!(!api.whoami().unwrap().session.unwrap().logged_in);
    }
}
