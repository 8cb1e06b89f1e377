//! The built-in card templates, grouped by family.
//!
//! Each family module exposes a `cards()` list; [`base_cards`] concatenates
//! them in a fixed order, which is also the order of the catalog.

mod basic;
mod content;
mod cta;
mod dividers;
mod headers;
mod info;
mod parts;
mod photo;
mod showcase;
mod special;

use crate::card::CardDefinition;

/// Every base card, before color variants are derived.
pub fn base_cards() -> Vec<CardDefinition> {
    let families: [fn() -> Vec<CardDefinition>; 9] = [
        basic::cards,
        content::cards,
        dividers::cards,
        headers::cards,
        photo::cards,
        cta::cards,
        info::cards,
        special::cards,
        showcase::cards,
    ];
    families.into_iter().flat_map(|family| family()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Values;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let cards = base_cards();
        let mut seen = HashSet::new();
        for card in &cards {
            assert!(seen.insert(card.id.as_str()), "duplicate id {}", card.id);
        }
    }

    #[test]
    fn field_names_unique_per_card() {
        for card in base_cards() {
            let mut seen = HashSet::new();
            for field in &card.fields {
                assert!(
                    seen.insert(field.name.as_str()),
                    "{} declares {} twice",
                    card.id,
                    field.name
                );
            }
        }
    }

    #[test]
    fn every_family_contributes() {
        let categories: HashSet<String> = base_cards().into_iter().map(|c| c.category).collect();
        for expected in ["basic", "content", "style", "photo", "cta", "info", "special"] {
            assert!(categories.contains(expected), "no {expected} cards");
        }
    }

    #[test]
    fn simple_text_comes_first() {
        assert_eq!(base_cards()[0].id, "simple-text");
    }

    #[test]
    fn fade_presets_share_fields() {
        let cards = base_cards();
        for id in [
            "divider-center-fade-red",
            "divider-center-fade-gray",
            "divider-center-fade-black",
        ] {
            let card = cards.iter().find(|c| c.id == id).unwrap();
            let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(names, vec!["height", "centerWidth"], "{id}");
        }
    }

    #[test]
    fn empty_mapping_never_leaks_placeholders() {
        for card in base_cards() {
            let html = card.render(&Values::new());
            assert!(!html.contains("undefined"), "{}", card.id);
            assert!(!html.contains("NaN"), "{}", card.id);
        }
    }
}
