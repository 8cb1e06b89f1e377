//! Shared test utilities.
//!
//! Lookups panic with the list of available ids so a failing test shows
//! what the catalog actually contains.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let card = find_card(&catalog, "simple-text");
//! assert_eq!(card.category, "basic");
//! ```

use crate::card::CardDefinition;
use crate::catalog::Catalog;

/// Find a card by id. Panics if not found.
pub fn find_card<'a>(catalog: &'a Catalog, id: &str) -> &'a CardDefinition {
    catalog.get(id).unwrap_or_else(|_| {
        let ids: Vec<&str> = catalog.ids().collect();
        panic!("card '{id}' not found. Available: {ids:?}")
    })
}

/// Ids of every derived variant, in catalog order.
pub fn variant_ids(catalog: &Catalog) -> Vec<&str> {
    catalog
        .iter()
        .filter(|c| c.is_variant())
        .map(|c| c.id.as_str())
        .collect()
}
