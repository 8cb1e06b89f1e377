//! Static preview site for the card catalog.
//!
//! One page, `index.html`, showing every card rendered with its defaults,
//! grouped into a fixed taxonomy. Card categories are free-form at
//! definition time; [`Category::classify`] maps them (plus a few id
//! keywords) onto the sections shown here.
//!
//! ## Output Structure
//!
//! ```text
//! gallery/
//! └── index.html     # every card, grouped by category
//! ```
//!
//! The page stylesheet is embedded at compile time from
//! `static/gallery.css`. The card previews themselves carry only inline
//! styles, exactly as they would in an email.

use crate::card::CardDefinition;
use crate::catalog::Catalog;
use crate::config::GalleryConfig;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/gallery.css");

/// The gallery's fixed taxonomy, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Headers,
    Text,
    Cta,
    Style,
    Media,
    Specials,
}

const STYLE_KEYWORDS: &[&str] = &["divider", "separator", "spacer", "gradient", "band"];
const MEDIA_KEYWORDS: &[&str] = &["photo", "video", "gallery", "map", "profile"];
const CTA_KEYWORDS: &[&str] = &[
    "button",
    "cta",
    "coupon",
    "newsletter",
    "event",
    "price",
    "calendar",
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Headers,
        Category::Text,
        Category::Cta,
        Category::Style,
        Category::Media,
        Category::Specials,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Headers => "headers",
            Category::Text => "text",
            Category::Cta => "cta",
            Category::Style => "style",
            Category::Media => "media",
            Category::Specials => "specials",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Headers => "Headers",
            Category::Text => "Text blocks",
            Category::Cta => "Call to action",
            Category::Style => "Dividers & spacing",
            Category::Media => "Photos & media",
            Category::Specials => "Specials",
        }
    }

    /// First matching rule wins.
    pub fn classify(card: &CardDefinition) -> Category {
        let id = card.id.as_str();
        let mentions = |words: &[&str]| words.iter().any(|w| id.contains(w));

        if card.category == "special" {
            Category::Specials
        } else if id.starts_with("header-") {
            Category::Headers
        } else if mentions(STYLE_KEYWORDS) {
            Category::Style
        } else if card.category == "photo" || mentions(MEDIA_KEYWORDS) {
            Category::Media
        } else if mentions(CTA_KEYWORDS) {
            Category::Cta
        } else {
            Category::Text
        }
    }
}

static FIRST_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<td\b([^>]*?)style="([^"]*)""#).expect("valid regex"));
static PADDING_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"padding\s*:\s*[^;"]*;?"#).expect("valid regex"));

/// Zero the padding of the first styled table cell, the card's outer gutter.
///
/// An existing `padding` declaration is replaced by `padding:0;`; a cell
/// without one gets it appended. Fragments without a styled cell are
/// returned unchanged.
pub fn strip_outer_padding(html: &str) -> String {
    let Some(caps) = FIRST_CELL.captures(html) else {
        return html.to_string();
    };
    let (Some(whole), Some(style)) = (caps.get(0), caps.get(2)) else {
        return html.to_string();
    };

    let style = style.as_str();
    let new_style = if PADDING_DECL.is_match(style) {
        PADDING_DECL.replace(style, "padding:0;").into_owned()
    } else if style.is_empty() || style.ends_with(';') {
        format!("{style}padding:0;")
    } else {
        format!("{style};padding:0;")
    };

    let attrs = caps.get(1).map_or("", |m| m.as_str());
    let cell = format!(r#"<td{attrs}style="{new_style}""#);
    format!("{}{}{}", &html[..whole.start()], cell, &html[whole.end()..])
}

/// One rendered preview, ready for its section.
struct Preview<'a> {
    card: &'a CardDefinition,
    category: Category,
    html: String,
}

fn previews<'a>(catalog: &'a Catalog, config: &GalleryConfig) -> Vec<Preview<'a>> {
    catalog
        .cards()
        .par_iter()
        .map(|card| {
            let html = card.render_defaults();
            Preview {
                card,
                category: Category::classify(card),
                html: if config.flush_previews {
                    strip_outer_padding(&html)
                } else {
                    html
                },
            }
        })
        .collect()
}

/// The complete preview page.
pub fn render_gallery(catalog: &Catalog, config: &GalleryConfig) -> String {
    let previews = previews(catalog, config);
    let sections: Vec<(Category, Vec<&Preview>)> = Category::ALL
        .into_iter()
        .map(|category| {
            let cards: Vec<&Preview> = previews.iter().filter(|p| p.category == category).collect();
            (category, cards)
        })
        .filter(|(_, cards)| !cards.is_empty())
        .collect();

    base_document(
        &config.title,
        html! {
            header.gallery-header {
                h1 { (config.title) }
                p { (catalog.len()) " cards" }
                nav.category-nav {
                    @for (category, cards) in &sections {
                        a href=(format!("#{}", category.slug())) {
                            (category.label()) " (" (cards.len()) ")"
                        }
                    }
                }
            }
            main {
                @for (category, cards) in &sections {
                    (render_section(*category, cards))
                }
            }
        },
    )
    .into_string()
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_section(category: Category, previews: &[&Preview]) -> Markup {
    html! {
        section.category id=(category.slug()) {
            h2 { (category.label()) }
            div.card-grid {
                @for preview in previews {
                    (render_tile(preview))
                }
            }
        }
    }
}

fn render_tile(preview: &Preview) -> Markup {
    let card = preview.card;
    html! {
        article.card-tile data-card=(card.id) {
            div.card-meta {
                h3 { (card.name) }
                code { (card.id) }
                @if !card.description.is_empty() {
                    p { (card.description) }
                }
            }
            div.card-preview {
                (PreEscaped(&preview.html))
            }
        }
    }
}

/// Render the gallery into `out_dir/index.html`, creating the directory.
pub fn write_gallery(
    catalog: &Catalog,
    config: &GalleryConfig,
    out_dir: &Path,
) -> Result<PathBuf, GalleryError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join("index.html");
    fs::write(&path, render_gallery(catalog, config))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::FieldSchema;
    use crate::config::VariantConfig;
    use crate::test_helpers::*;
    use crate::values::Values;
    use tempfile::TempDir;

    fn blank(_: &Values) -> Markup {
        html! {}
    }

    fn stub(id: &str, category: &str) -> CardDefinition {
        CardDefinition::new(id, id, category, "", vec![FieldSchema::text("t", "T", "")], blank)
    }

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn classify_rules_in_order() {
        let cases = [
            ("testimonial", "special", Category::Specials),
            ("header-photo-divider", "basic", Category::Headers),
            ("photo-divider", "photo", Category::Style),
            ("spacer", "style", Category::Style),
            ("photo-top", "photo", Category::Media),
            ("video-card", "content", Category::Media),
            ("event-card", "cta", Category::Cta),
            ("price-card", "cta", Category::Cta),
            ("simple-text", "basic", Category::Text),
            ("stats-card", "info", Category::Text),
        ];
        for (id, category, expected) in cases {
            assert_eq!(Category::classify(&stub(id, category)), expected, "{id}");
        }
    }

    #[test]
    fn builtin_cards_land_in_expected_sections() {
        let catalog = Catalog::builtin().unwrap();
        let classify = |id: &str| Category::classify(find_card(&catalog, id));
        assert_eq!(classify("header-simple"), Category::Headers);
        assert_eq!(classify("divider-center-fade-red"), Category::Style);
        assert_eq!(classify("photo-left-multi"), Category::Media);
        assert_eq!(classify("cta-single-button"), Category::Cta);
        assert_eq!(classify("gold-card-red"), Category::Text);
        assert_eq!(classify("testimonial"), Category::Specials);
    }

    // =========================================================================
    // Padding strip
    // =========================================================================

    #[test]
    fn strip_replaces_existing_padding() {
        let html = r#"<table><tr><td style="padding:14px;color:red"><td style="padding:2px">"#;
        assert_eq!(
            strip_outer_padding(html),
            r#"<table><tr><td style="padding:0;color:red"><td style="padding:2px">"#
        );
    }

    #[test]
    fn strip_appends_when_missing() {
        assert_eq!(
            strip_outer_padding(r#"<td width="5" style="color:red">x</td>"#),
            r#"<td width="5" style="color:red;padding:0;">x</td>"#
        );
        assert_eq!(
            strip_outer_padding(r#"<td style="">x</td>"#),
            r#"<td style="padding:0;">x</td>"#
        );
    }

    #[test]
    fn strip_without_cell_is_identity() {
        assert_eq!(strip_outer_padding("<p>hi</p>"), "<p>hi</p>");
    }

    #[test]
    fn strip_builtin_card() {
        let catalog = Catalog::builtin().unwrap();
        let html = find_card(&catalog, "simple-text").render_defaults();
        let flush = strip_outer_padding(&html);
        assert!(flush.contains(r#"<td style="padding:0;">"#));
        assert_eq!(flush.len(), html.len() - "14px".len() + "0".len());
    }

    // =========================================================================
    // Page rendering
    // =========================================================================

    #[test]
    fn gallery_groups_in_taxonomy_order() {
        let catalog = Catalog::from_base(
            vec![
                stub("testimonial", "special"),
                stub("simple-text", "basic"),
                stub("header-simple", "basic"),
            ],
            &VariantConfig::default(),
        )
        .unwrap();
        let page = render_gallery(&catalog, &GalleryConfig::default());
        assert!(page.starts_with("<!DOCTYPE html>"));
        let headers = page.find(r#"id="headers""#).unwrap();
        let text = page.find(r#"id="text""#).unwrap();
        let specials = page.find(r#"id="specials""#).unwrap();
        assert!(headers < text && text < specials);
        assert!(!page.contains(r#"id="media""#));
    }

    #[test]
    fn gallery_shows_every_card() {
        let catalog = Catalog::builtin().unwrap();
        let page = render_gallery(&catalog, &GalleryConfig::default());
        for id in catalog.ids() {
            assert!(page.contains(&format!(r#"data-card="{id}""#)), "missing {id}");
        }
        assert!(page.contains("<title>Card library</title>"));
    }

    #[test]
    fn gallery_escapes_title() {
        let catalog = Catalog::from_base(vec![stub("a", "basic")], &VariantConfig::default()).unwrap();
        let config = GalleryConfig {
            title: "<Cards>".into(),
            ..GalleryConfig::default()
        };
        let page = render_gallery(&catalog, &config);
        assert!(page.contains("&lt;Cards&gt;"));
    }

    #[test]
    fn write_gallery_creates_index() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site");
        let catalog = Catalog::builtin().unwrap();
        let config = GalleryConfig {
            flush_previews: true,
            ..GalleryConfig::default()
        };
        let path = write_gallery(&catalog, &config, &out).unwrap();
        assert_eq!(path, out.join("index.html"));
        let page = fs::read_to_string(path).unwrap();
        assert!(page.contains(r#"data-card="simple-text""#));
        assert!(page.contains(r#"<td style="padding:0;">"#));
    }

    #[test]
    fn write_gallery_shows_configured_variants() {
        let tmp = TempDir::new().unwrap();
        let variants = VariantConfig {
            id_suffix: "-blue".into(),
            replacement: "#1a5fb4".into(),
            ..VariantConfig::default()
        };
        let catalog = Catalog::build(&variants).unwrap();
        let path = write_gallery(&catalog, &GalleryConfig::default(), tmp.path()).unwrap();
        let page = fs::read_to_string(path).unwrap();
        assert!(page.contains(r#"data-card="gold-card-blue""#));
        assert!(!page.contains(r#"data-card="gold-card-red""#));
    }
}
