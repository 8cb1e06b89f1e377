//! The card catalog: base cards followed by their derived color variants.
//!
//! Built once and immutable afterwards. The base list is assembled first,
//! variants are derived from that snapshot, and the two are concatenated.
//! Lookup by id is the one operation that can fail.

use crate::card::CardDefinition;
use crate::cards;
use crate::config::VariantConfig;
use crate::values::Values;
use crate::variant::derive_variants;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown card '{id}'")]
    UnknownCard { id: String },
    #[error("Duplicate card id '{id}'")]
    DuplicateId { id: String },
    #[error("Invalid variant color token: {0}")]
    Variant(#[from] regex::Error),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The built-in cards with variants derived per `config`.
    pub fn build(config: &VariantConfig) -> Result<Self, CatalogError> {
        Self::from_base(cards::base_cards(), config)
    }

    /// The built-in cards with the stock variant settings.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(&VariantConfig::default())
    }

    /// Assemble a catalog from an arbitrary base list.
    pub fn from_base(
        base: Vec<CardDefinition>,
        config: &VariantConfig,
    ) -> Result<Self, CatalogError> {
        let derived = derive_variants(&base, config)?;
        let mut cards = base;
        cards.extend(derived);

        let mut index = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: card.id.clone(),
                });
            }
        }
        Ok(Self { cards, index })
    }

    pub fn get(&self, id: &str) -> Result<&CardDefinition, CatalogError> {
        self.index
            .get(id)
            .map(|&i| &self.cards[i])
            .ok_or_else(|| CatalogError::UnknownCard { id: id.to_string() })
    }

    /// Render card `id` with `values`.
    pub fn render(&self, id: &str, values: &Values) -> Result<String, CatalogError> {
        Ok(self.get(id)?.render(values))
    }

    /// All cards in catalog order: base cards, then variants.
    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CardDefinition;
    type IntoIter = std::slice::Iter<'a, CardDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::FieldSchema;
    use crate::escape::text;
    use crate::test_helpers::*;
    use maud::{Markup, html};

    fn gold(values: &Values) -> Markup {
        html! { p style="color:#b48a19;" { (text(values.get("t"))) } }
    }

    fn plain(_: &Values) -> Markup {
        html! { p { "plain" } }
    }

    fn card(id: &str, render: crate::card::RenderFn) -> CardDefinition {
        CardDefinition::new(id, id, "basic", "", vec![FieldSchema::text("t", "T", "")], render)
    }

    #[test]
    fn variants_follow_all_base_cards() {
        let catalog = Catalog::from_base(
            vec![card("a", gold), card("b", plain), card("c", gold)],
            &VariantConfig::default(),
        )
        .unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["a", "b", "c", "a-red", "c-red"]);
    }

    #[test]
    fn get_unknown_is_error() {
        let catalog = Catalog::from_base(vec![card("a", plain)], &VariantConfig::default()).unwrap();
        let err = catalog.get("zzz").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCard { ref id } if id == "zzz"));
        assert_eq!(err.to_string(), "Unknown card 'zzz'");
    }

    #[test]
    fn render_by_id() {
        let catalog = Catalog::from_base(vec![card("a", gold)], &VariantConfig::default()).unwrap();
        let values = Values::new().with("t", "x");
        assert_eq!(
            catalog.render("a-red", &values).unwrap(),
            r#"<p style="color:#e02020;">x</p>"#
        );
        assert!(catalog.render("nope", &values).is_err());
    }

    #[test]
    fn duplicate_base_ids_rejected() {
        let result = Catalog::from_base(
            vec![card("a", plain), card("a", gold)],
            &VariantConfig::default(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { ref id }) if id == "a"));
    }

    #[test]
    fn variant_colliding_with_base_id_rejected() {
        let result = Catalog::from_base(
            vec![card("a", gold), card("a-red", plain)],
            &VariantConfig::default(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { ref id }) if id == "a-red"));
    }

    // =========================================================================
    // Built-in catalog
    // =========================================================================

    #[test]
    fn builtin_catalog_builds() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() > cards::base_cards().len());
        assert_eq!(catalog.iter().count(), catalog.len());
    }

    #[test]
    fn builtin_catalog_has_known_cards() {
        let catalog = Catalog::builtin().unwrap();
        let simple = find_card(&catalog, "simple-text");
        assert_eq!(simple.category, "basic");
        let red = find_card(&catalog, "gold-card-red");
        assert_eq!(red.derived_from.as_deref(), Some("gold-card"));
    }

    #[test]
    fn builtin_variants() {
        let catalog = Catalog::builtin().unwrap();
        let variants = variant_ids(&catalog);
        assert!(variants.contains(&"simple-text-red"));
        assert!(variants.iter().all(|id| id.ends_with("-red")));
        // the fade presets are base cards; the gold fade renders rgba, not the token
        assert!(!variants.contains(&"divider-center-fade-red"));
        assert!(!find_card(&catalog, "divider-center-fade-red").is_variant());
    }

    #[test]
    fn builtin_without_variants() {
        let config = VariantConfig {
            enabled: false,
            ..VariantConfig::default()
        };
        let catalog = Catalog::build(&config).unwrap();
        assert_eq!(catalog.len(), cards::base_cards().len());
        assert!(catalog.iter().all(|c| !c.is_variant()));
    }
}
