// Facet derivation for the search form dropdowns: distinct makes, and
// distinct models scoped to a chosen make. Stateless; the controller is
// responsible for clearing a stale model selection when the make changes.

use std::collections::BTreeSet;

use crate::models::VehicleListing;

/// Distinct make values present in the dataset, ascending lexical order.
pub fn available_makes(listings: &[VehicleListing]) -> Vec<String> {
    listings
        .iter()
        .map(|l| l.make.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct models of listings whose make equals `selected_make` exactly,
/// ascending lexical order. Empty while no make is chosen: the model
/// dropdown stays disabled until then.
pub fn available_models(listings: &[VehicleListing], selected_make: &str) -> Vec<String> {
    if selected_make.is_empty() {
        return Vec::new();
    }
    listings
        .iter()
        .filter(|l| l.make == selected_make)
        .map(|l| l.model.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
