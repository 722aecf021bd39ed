use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let listings = store.reseed()?;
    info!(count = listings.len(), "listings reset to sample data");

    let mut result = CmdResult::default();
    let message = format!("Restored {} sample listings", listings.len());
    result.add_message(CmdMessage::success(message));
    Ok(result.with_listed_listings(listings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_listings;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn restores_sample_listings() {
        let mut store = InMemoryStore::new();
        store.save_all(&[]).unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "Restored 6 sample listings");
        assert_eq!(store.load_all().unwrap(), seed_listings());
    }
}
