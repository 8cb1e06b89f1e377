//! # Cardsmith
//!
//! A catalog of parameterized HTML email cards. Each card declares a list of
//! named text fields with defaults and a template that turns a field-value
//! mapping into a self-contained HTML fragment: table-based layout, inline
//! styles only, no scripts. Editors fill in fields, render, and paste the
//! fragment into an email campaign.
//!
//! # Rendering Pipeline
//!
//! ```text
//! Values ──► escape / rich text / color / numbers ──► card template ──► HTML
//!                                                        │
//!                               accent color present? ───┴──► recolored variant
//! ```
//!
//! Every template is a pure, total function of its [`values::Values`]:
//! missing keys read as `""`, malformed numbers and colors fall back to
//! defaults, and the same mapping always produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`escape`] | HTML escaping of raw field values |
//! | [`rich_text`] | `*emphasis*`, `[links](url)` and line breaks over escaped text |
//! | [`color`] | Hex color parsing with fallbacks, `rgba()` and color sanitizing |
//! | [`numeric`] | Lenient integer/float parsing of field values |
//! | [`focus`] | Pan/zoom state of card images |
//! | [`values`] | The field-value mapping, loaded from JSON or `name=value` |
//! | [`card`] | Card definitions: field schema plus template |
//! | [`cards`] | The built-in card templates |
//! | [`variant`] | Recolored variants derived from accent-colored cards |
//! | [`catalog`] | Base cards plus variants, with lookup by id |
//! | [`config`] | `cardsmith.toml` loading, validation and merging |
//! | [`gallery`] | Category taxonomy and the static preview page |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud For Card Markup
//!
//! Cards are written with [Maud](https://maud.lambda.xyz/) like the preview
//! page. Field values never go into markup as bare strings: they pass through
//! [`escape::text`] or [`rich_text::rich`], which hand maud pre-escaped
//! markup. This keeps escaping to exactly once per value.
//!
//! ## Variants By Substitution
//!
//! A color variant is not a second template. It renders the base card and
//! replaces the accent token in the output, so every base card that uses the
//! accent gets a variant for free. Templates must therefore emit the accent
//! as the literal `#b48a19`; a gold written any other way will not be
//! recolored.

pub mod card;
pub mod cards;
pub mod catalog;
pub mod color;
pub mod config;
pub mod escape;
pub mod focus;
pub mod gallery;
pub mod numeric;
pub mod output;
pub mod rich_text;
pub mod values;
pub mod variant;

#[cfg(test)]
pub(crate) mod test_helpers;
