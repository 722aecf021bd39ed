use crate::commands::CmdResult;
use crate::error::{CarlotError, Result};
use crate::model::parse_listing_id;
use crate::store::DataStore;

/// Looks up one listing by id or details link (`details.html?id=N`).
pub fn run<S: DataStore>(store: &S, reference: &str) -> Result<CmdResult> {
    let id = parse_listing_id(reference)?;
    let Some(listing) = store.fetch_by_id(id)? else {
        return Err(CarlotError::ListingNotFound(id));
    };
    Ok(CmdResult::default().with_listed_listings(vec![listing]))
}
