// The filter engine: maps (dataset, criteria) to the matching ordered
// subsequence. Pure, stable, no side effects.

use crate::models::{FilterCriteria, VehicleListing};

/// Returns the listings for which every active predicate holds, in dataset
/// order. An empty result is a valid output, not an error.
pub fn apply(listings: &[VehicleListing], criteria: &FilterCriteria) -> Vec<VehicleListing> {
    let keyword = criteria.keyword.to_lowercase();

    listings
        .iter()
        .filter(|listing| {
            // Keyword: case-insensitive substring against any of the eight
            // searchable fields (OR across fields).
            if !keyword.is_empty() && !matches_keyword(listing, &keyword) {
                return false;
            }

            // Make and model: exact equality, applied independently.
            if !criteria.make.is_empty() && listing.make != criteria.make {
                return false;
            }
            if !criteria.model.is_empty() && listing.model != criteria.model {
                return false;
            }

            // Price bounds: inclusive at both ends. A listing whose price
            // string does not parse cannot be shown to be in range, so it
            // fails while bounds are active.
            if criteria.has_price_bounds() {
                let Some(price) = listing.numeric_price() else {
                    return false;
                };
                if criteria.min_price.is_some_and(|min| price < min) {
                    return false;
                }
                if criteria.max_price.is_some_and(|max| price > max) {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}

fn matches_keyword(listing: &VehicleListing, keyword_lower: &str) -> bool {
    listing
        .keyword_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(keyword_lower))
}
