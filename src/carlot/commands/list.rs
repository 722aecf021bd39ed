use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let listings = store.load_all()?;
    Ok(CmdResult::default().with_listed_listings(listings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_listings;
    use crate::store::memory::fixtures::{new_listing, sequential_store};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_seed_data_on_first_use() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.listed_listings, seed_listings());
    }

    #[test]
    fn created_listing_is_listed_first() {
        let mut store = sequential_store();
        store.create(new_listing("Nissan Leaf")).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_listings.len(), 7);
        assert_eq!(result.listed_listings[0].name, "Nissan Leaf");
    }
}
