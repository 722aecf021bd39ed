use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::ListingForm;
use crate::store::DataStore;
use tracing::info;

/// Validates the sell form and, unless `dry_run`, stores the new listing.
///
/// A rejected form returns `Ok` with the field errors attached; nothing is
/// written.
pub fn run<S: DataStore>(
    store: &mut S,
    form: ListingForm,
    placeholder_image: &str,
    dry_run: bool,
) -> Result<CmdResult> {
    let new_listing = match form.into_new_listing(placeholder_image) {
        Ok(listing) => listing,
        Err(validation) => return Ok(CmdResult::default().with_validation(validation)),
    };

    if dry_run {
        let name = &new_listing.name;
        let message = format!("Listing for {} is valid (dry run, nothing saved)", name);
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(message));
        return Ok(result);
    }

    let listing = store.create(new_listing)?;
    info!(id = listing.id, name = %listing.name, "listing created");

    let message = format!("Car listed successfully! {} (id {})", listing.name, listing.id);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_listings(vec![listing]))
}
