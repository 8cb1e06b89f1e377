//! CLI output formatting.
//!
//! # Card-First Display
//!
//! Output leads with each card's human name and positional index; the id a
//! user types on the command line follows in parentheses, and details such
//! as category, field count and variant origin are indented context lines.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! 001 Simple text (simple-text)
//!     basic, 2 fields
//! 002 Gold card (gold-card)
//!     basic, 2 fields
//! ...
//! 105 Simple text (red) (simple-text-red)
//!     basic, 2 fields
//!     Variant of: simple-text
//! ...
//!
//! <total> cards (104 base, <variants> variants)
//! ```
//!
//! Variants follow all base cards, in base order. The summary counts
//! depend on the variant settings in `cardsmith.toml`.
//!
//! ## Show
//!
//! ```text
//! Simple text (simple-text)
//!     Category: basic
//!     A title with a paragraph of text. Supports *italics* and links.
//! Fields
//!     001 title: Title [text]
//!         Default: Welcome to our newsletter
//!     002 body: Text [textarea]
//!         Default: This month we have *plenty* of news.…
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::card::{CardDefinition, FieldKind};
use crate::catalog::Catalog;
use serde::Serialize;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Card header: name with the id in parentheses, optionally indexed.
///
/// ```text
/// 001 Simple text (simple-text)
/// Simple text (simple-text)
/// ```
fn card_header(index: Option<usize>, card: &CardDefinition) -> String {
    match index {
        Some(i) => format!("{} {} ({})", format_index(i), card.name, card.id),
        None => format!("{} ({})", card.name, card.id),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Collapse a value onto one line and cut it to `max` characters, marking
/// either change with `…`.
fn one_line(text: &str, max: usize) -> String {
    let first = text.lines().next().unwrap_or("");
    let cut: String = first.chars().take(max).collect();
    if cut.len() < text.len() {
        format!("{cut}…")
    } else {
        cut
    }
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Textarea => "textarea",
    }
}

// ============================================================================
// list
// ============================================================================

/// Format the card list with a closing summary line.
pub fn format_card_list(cards: &[&CardDefinition]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        lines.push(card_header(Some(i + 1), card));
        lines.push(format!(
            "{}{}, {}",
            indent(1),
            card.category,
            plural(card.fields.len(), "field", "fields")
        ));
        if let Some(base) = &card.derived_from {
            lines.push(format!("{}Variant of: {}", indent(1), base));
        }
    }

    let variants = cards.iter().filter(|c| c.is_variant()).count();
    lines.push(String::new());
    lines.push(format!(
        "{} ({} base, {})",
        plural(cards.len(), "card", "cards"),
        cards.len() - variants,
        plural(variants, "variant", "variants")
    ));
    lines
}

pub fn print_card_list(cards: &[&CardDefinition]) {
    for line in format_card_list(cards) {
        println!("{}", line);
    }
}

#[derive(Serialize)]
struct CardSummary<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    fields: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived_from: Option<&'a str>,
}

/// The card list as a JSON array, one summary object per card.
pub fn format_card_list_json(cards: &[&CardDefinition]) -> serde_json::Result<String> {
    let summaries: Vec<CardSummary> = cards
        .iter()
        .map(|c| CardSummary {
            id: &c.id,
            name: &c.name,
            category: &c.category,
            fields: c.fields.len(),
            derived_from: c.derived_from.as_deref(),
        })
        .collect();
    serde_json::to_string_pretty(&summaries)
}

// ============================================================================
// show
// ============================================================================

/// Format one card's identity and field schema.
pub fn format_card_fields(card: &CardDefinition) -> Vec<String> {
    let mut lines = vec![card_header(None, card)];
    lines.push(format!("{}Category: {}", indent(1), card.category));
    if let Some(base) = &card.derived_from {
        lines.push(format!("{}Variant of: {}", indent(1), base));
    }
    if !card.description.is_empty() {
        lines.push(format!("{}{}", indent(1), card.description));
    }

    lines.push("Fields".to_string());
    if card.fields.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, field) in card.fields.iter().enumerate() {
        lines.push(format!(
            "{}{} {}: {} [{}]",
            indent(1),
            format_index(i + 1),
            field.name,
            field.label,
            kind_label(field.kind)
        ));
        if !field.default.is_empty() {
            lines.push(format!("{}Default: {}", indent(2), one_line(&field.default, 60)));
        }
    }
    lines
}

pub fn print_card_fields(card: &CardDefinition) {
    for line in format_card_fields(card) {
        println!("{}", line);
    }
}

// ============================================================================
// gallery
// ============================================================================

/// Format the summary printed after the preview site is written.
pub fn format_gallery_written(catalog: &Catalog, index: &Path) -> Vec<String> {
    let variants = catalog.iter().filter(|c| c.is_variant()).count();
    vec![
        format!(
            "Rendered {} ({} base, {})",
            plural(catalog.len(), "card", "cards"),
            catalog.len() - variants,
            plural(variants, "variant", "variants")
        ),
        format!("{}→ {}", indent(1), index.display()),
    ]
}

pub fn print_gallery_written(catalog: &Catalog, index: &Path) {
    for line in format_gallery_written(catalog, index) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::FieldSchema;
    use crate::config::VariantConfig;
    use crate::values::Values;
    use maud::{Markup, html};

    fn gold(_: &Values) -> Markup {
        html! { p style="color:#b48a19;" {} }
    }

    fn plain(_: &Values) -> Markup {
        html! { p {} }
    }

    fn catalog() -> Catalog {
        Catalog::from_base(
            vec![
                CardDefinition::new(
                    "gold",
                    "Gold",
                    "basic",
                    "Shiny.",
                    vec![
                        FieldSchema::text("title", "Title", "Hello"),
                        FieldSchema::textarea("body", "Text", "Line one\nLine two"),
                    ],
                    gold,
                ),
                CardDefinition::new("rule", "Rule", "style", "", vec![], plain),
            ],
            &VariantConfig::default(),
        )
        .unwrap()
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn one_line_short() {
        assert_eq!(one_line("Short text", 40), "Short text");
    }

    #[test]
    fn one_line_exact() {
        let text = "a".repeat(40);
        assert_eq!(one_line(&text, 40), text);
    }

    #[test]
    fn one_line_cuts_on_chars() {
        assert_eq!(one_line("ééééé", 3), "ééé…");
    }

    #[test]
    fn one_line_marks_dropped_lines() {
        assert_eq!(one_line("first\nsecond", 40), "first…");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "card", "cards"), "1 card");
        assert_eq!(plural(0, "card", "cards"), "0 cards");
    }

    // =========================================================================
    // list
    // =========================================================================

    #[test]
    fn card_list_lines() {
        let catalog = catalog();
        let cards: Vec<&CardDefinition> = catalog.iter().collect();
        assert_eq!(
            format_card_list(&cards),
            vec![
                "001 Gold (gold)",
                "    basic, 2 fields",
                "002 Rule (rule)",
                "    style, 0 fields",
                "003 Gold (red) (gold-red)",
                "    basic, 2 fields",
                "    Variant of: gold",
                "",
                "3 cards (2 base, 1 variant)",
            ]
        );
    }

    #[test]
    fn card_list_json() {
        let catalog = catalog();
        let cards: Vec<&CardDefinition> = catalog.iter().collect();
        let json: serde_json::Value =
            serde_json::from_str(&format_card_list_json(&cards).unwrap()).unwrap();
        assert_eq!(json[0]["id"], "gold");
        assert_eq!(json[0]["fields"], 2);
        assert!(json[0].get("derived_from").is_none());
        assert_eq!(json[2]["derived_from"], "gold");
    }

    // =========================================================================
    // show
    // =========================================================================

    #[test]
    fn card_fields_lines() {
        let catalog = catalog();
        let card = catalog.get("gold").unwrap();
        assert_eq!(
            format_card_fields(card),
            vec![
                "Gold (gold)",
                "    Category: basic",
                "    Shiny.",
                "Fields",
                "    001 title: Title [text]",
                "        Default: Hello",
                "    002 body: Text [textarea]",
                "        Default: Line one…",
            ]
        );
    }

    #[test]
    fn card_fields_variant_and_empty() {
        let catalog = catalog();
        let lines = format_card_fields(catalog.get("gold-red").unwrap());
        assert_eq!(lines[2], "    Variant of: gold");
        assert_eq!(lines[3], "    Red variant of gold");

        let lines = format_card_fields(catalog.get("rule").unwrap());
        assert_eq!(lines, vec!["Rule (rule)", "    Category: style", "Fields", "    (none)"]);
    }

    // =========================================================================
    // gallery
    // =========================================================================

    #[test]
    fn gallery_summary() {
        let lines = format_gallery_written(&catalog(), Path::new("site/index.html"));
        assert_eq!(
            lines,
            vec!["Rendered 3 cards (2 base, 1 variant)", "    → site/index.html"]
        );
    }
}
