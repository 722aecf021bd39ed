use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarlotError, Result};
use crate::model::parse_listing_id;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, reference: &str) -> Result<CmdResult> {
    let id = parse_listing_id(reference)?;
    let Some(listing) = store.fetch_by_id(id)? else {
        return Err(CarlotError::ListingNotFound(id));
    };

    store.delete_by_id(id)?;
    info!(id, "listing deleted");

    let mut result = CmdResult::default();
    let message = format!("Listing deleted ({}): {}", listing.id, listing.name);
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_listings(vec![listing]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_existing_listing() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "2").unwrap();

        assert_eq!(result.affected_listings[0].name, "Honda Civic 2022");
        assert_eq!(store.fetch_by_id(2).unwrap(), None);
        assert_eq!(store.load_all().unwrap().len(), 5);
    }

    #[test]
    fn deleting_unknown_id_fails_and_keeps_collection() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "404").unwrap_err();

        assert!(matches!(err, CarlotError::ListingNotFound(404)));
        assert_eq!(store.load_all().unwrap().len(), 6);
    }
}
