//! Color variants derived from base cards.
//!
//! After the base list is assembled, every base card is rendered once with
//! its defaults. If the output contains the accent color token, a sibling
//! card is synthesized whose template renders the base and then replaces
//! every occurrence of the token (case-insensitively) with the replacement
//! color. The substitution runs on each render, so the variant tracks
//! whatever values it is given.
//!
//! Only base cards are scanned. A derived card is never derived again.

use crate::card::{CardDefinition, Template};
use crate::config::VariantConfig;
use regex::{NoExpand, Regex, RegexBuilder};

/// Case-insensitive literal token substitution.
///
/// A token ending in a word character only matches where the next character
/// is not one, so `#fff` leaves `#ffffff` alone.
#[derive(Debug, Clone)]
pub struct Recolor {
    pattern: Regex,
    replacement: String,
}

impl Recolor {
    pub fn new(token: &str, replacement: &str) -> Result<Self, regex::Error> {
        let mut source = regex::escape(token);
        if token.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
            source.push_str(r"\b");
        }
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn matches(&self, html: &str) -> bool {
        self.pattern.is_match(html)
    }

    pub fn apply(&self, html: &str) -> String {
        self.pattern
            .replace_all(html, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Derive the color variants of `base`, in base order.
///
/// Returns an empty list when variants are disabled. Cards in `base` that
/// are themselves variants are skipped.
pub fn derive_variants(
    base: &[CardDefinition],
    config: &VariantConfig,
) -> Result<Vec<CardDefinition>, regex::Error> {
    if !config.enabled {
        return Ok(Vec::new());
    }
    let recolor = Recolor::new(&config.accent, &config.replacement)?;
    let derived = base
        .iter()
        .filter_map(|card| match &card.template {
            Template::Base(render) if recolor.matches(&card.render_defaults()) => Some(
                CardDefinition {
                    id: format!("{}{}", card.id, config.id_suffix),
                    name: format!("{}{}", card.name, config.name_suffix),
                    category: card.category.clone(),
                    description: format!(
                        "{} variant of {}",
                        config.label,
                        card.name.to_lowercase()
                    ),
                    fields: card.fields.clone(),
                    derived_from: Some(card.id.clone()),
                    template: Template::Recolored {
                        base: *render,
                        recolor: recolor.clone(),
                    },
                },
            ),
            _ => None,
        })
        .collect();
    Ok(derived)
}
