use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Listing;
use crate::store::DataStore;

/// Keeps the listings whose name, location or description contains `query`.
///
/// Matching is a case-insensitive substring test on the trimmed query. An
/// empty query returns the input unchanged. Order is preserved; there is no
/// ranking.
pub fn filter_listings(listings: Vec<Listing>, query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings;
    }

    listings
        .into_iter()
        .filter(|listing| matches(listing, &needle))
        .collect()
}

fn matches(listing: &Listing, needle: &str) -> bool {
    [&listing.name, &listing.location, &listing.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let listings = store.load_all()?;
    let kept = filter_listings(listings, query);
    Ok(CmdResult::default().with_listed_listings(kept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_listings;
    use crate::store::memory::InMemoryStore;

    fn names(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_input_in_order() {
        let seed = seed_listings();
        assert_eq!(filter_listings(seed.clone(), ""), seed);
        assert_eq!(filter_listings(seed.clone(), "   "), seed);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let result = filter_listings(seed_listings(), "  TESLA ");
        assert_eq!(names(&result), vec!["Tesla Model 3 2023"]);
    }

    #[test]
    fn matches_location_and_description() {
        let by_location = filter_listings(seed_listings(), ", ca");
        assert_eq!(
            names(&by_location),
            vec!["Honda Civic 2022", "Tesla Model 3 2023"]
        );

        let by_description = filter_listings(seed_listings(), "brembo");
        assert_eq!(names(&by_description), vec!["Ford Mustang 2022"]);
    }

    #[test]
    fn included_and_excluded_partition_on_the_query() {
        let needle = "excellent";
        let kept = filter_listings(seed_listings(), needle);
        let contains = |l: &Listing| {
            [&l.name, &l.location, &l.description]
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
        };

        assert!(!kept.is_empty());
        assert!(kept.iter().all(contains));
        for listing in seed_listings() {
            if !kept.contains(&listing) {
                assert!(!contains(&listing));
            }
        }
    }

    #[test]
    fn preserves_input_order() {
        let kept = filter_listings(seed_listings(), "petrol");
        // "petrol" only appears in the fuel field, which is not searched.
        assert!(kept.is_empty());

        let kept = filter_listings(seed_listings(), "features include");
        let ids: Vec<_> = kept.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn run_filters_the_stored_collection() {
        let store = InMemoryStore::new();
        let result = run(&store, "miami").unwrap();
        assert_eq!(names(&result.listed_listings), vec!["BMW 3 Series 2021"]);
    }
}
