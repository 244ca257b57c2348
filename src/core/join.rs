use crate::models::{Property, VibeMatch};
use crate::services::PropertyCatalog;

/// Resolve matches to full property records, in match order.
///
/// Ids with no record in the catalog are dropped.
pub fn join_matches(catalog: &PropertyCatalog, matches: &[VibeMatch]) -> Vec<Property> {
    matches
        .iter()
        .filter_map(|m| {
            let property = catalog.get(&m.id);
            if property.is_none() {
                tracing::debug!("Dropping match for unknown property id {}", m.id);
            }
            property.cloned()
        })
        .collect()
}
