//! Catalog configuration module.
//!
//! Handles loading, validating, and merging `cardsmith.toml`. Stock defaults
//! are overridden by an optional user config file in the config directory
//! (the current directory unless `--config-dir` is given).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [variants]
//! enabled = true            # Derive color variants of accent-colored cards
//! accent = "#b48a19"        # Token searched for in rendered defaults
//! replacement = "#e02020"   # Color substituted into the variant
//! id_suffix = "-red"        # Variant id = base id + suffix
//! name_suffix = " (red)"    # Variant name = base name + suffix
//! label = "Red"             # Used in "<label> variant of <name>"
//!
//! [gallery]
//! title = "Card library"    # Page title of the preview site
//! flush_previews = false    # Strip outer padding from previews
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [variants]
//! replacement = "#1a5fb4"
//! id_suffix = "-blue"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "cardsmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `cardsmith.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardsmithConfig {
    /// Color variant derivation.
    pub variants: VariantConfig,
    /// Preview site settings.
    pub gallery: GalleryConfig,
}

impl CardsmithConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let v = &self.variants;
        for (key, value) in [("accent", &v.accent), ("replacement", &v.replacement)] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "variants.{key} must be a #rgb or #rrggbb color, got '{value}'"
                )));
            }
        }
        if v.accent.eq_ignore_ascii_case(&v.replacement) {
            return Err(ConfigError::Validation(
                "variants.accent and variants.replacement must differ".into(),
            ));
        }
        if v.id_suffix.is_empty() {
            return Err(ConfigError::Validation(
                "variants.id_suffix must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.starts_with('#') && value.trim() == value && Rgb::parse_hex(value).is_some()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariantConfig {
    pub enabled: bool,
    pub accent: String,
    pub replacement: String,
    pub id_suffix: String,
    pub name_suffix: String,
    pub label: String,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            accent: "#b48a19".to_string(),
            replacement: "#e02020".to_string(),
            id_suffix: "-red".to_string(),
            name_suffix: " (red)".to_string(),
            label: "Red".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub title: String,
    /// Strip the outer cell padding from every preview, as the editor does
    /// before copying.
    pub flush_previews: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Card library".to_string(),
            flush_previews: false,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Return the stock default config as a TOML value.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(CardsmithConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` onto `base`. Tables merge key by key; any
/// other value in `overlay` replaces the one in `base`.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `cardsmith.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no config file exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<CardsmithConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: CardsmithConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `cardsmith.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<CardsmithConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// A fully commented `cardsmith.toml` with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r##"# Cardsmith Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as cardsmith.toml in the directory you run cardsmith from,
# or point --config-dir at the directory that holds it.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Color variants
# ---------------------------------------------------------------------------
[variants]
# Derive a recolored sibling for every card whose default rendering uses
# the accent color.
enabled = true

# Color token searched for (case-insensitively) in rendered cards.
accent = "#b48a19"

# Color substituted for the accent in the derived card.
replacement = "#e02020"

# Derived card id = base id + id_suffix. Must not be empty.
id_suffix = "-red"

# Derived card name = base name + name_suffix.
name_suffix = " (red)"

# Derived card description reads "<label> variant of <base name>".
label = "Red"

# ---------------------------------------------------------------------------
# Preview gallery
# ---------------------------------------------------------------------------
[gallery]
# Page title of the generated index.html.
title = "Card library"

# Remove the outer cell padding from every preview, exactly as the copied
# HTML would be pasted into a campaign.
flush_previews = false
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_gold_to_red_variants() {
        let config = CardsmithConfig::default();
        assert!(config.variants.enabled);
        assert_eq!(config.variants.accent, "#b48a19");
        assert_eq!(config.variants.replacement, "#e02020");
        assert_eq!(config.variants.id_suffix, "-red");
    }

    #[test]
    fn default_config_has_gallery_title() {
        let config = CardsmithConfig::default();
        assert_eq!(config.gallery.title, "Card library");
        assert!(!config.gallery.flush_previews);
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r##"
[variants]
replacement = "#1a5fb4"
"##;
        let config: CardsmithConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.variants.replacement, "#1a5fb4");
        // Unspecified values use defaults
        assert_eq!(config.variants.accent, "#b48a19");
        assert_eq!(config.gallery.title, "Card library");
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.variants.id_suffix, "-red");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r##"
[variants]
replacement = "#1a5fb4"
id_suffix = "-blue"

[gallery]
flush_previews = true
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.variants.replacement, "#1a5fb4");
        assert_eq!(config.variants.id_suffix, "-blue");
        assert_eq!(config.variants.label, "Red");
        assert!(config.gallery.flush_previews);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"enabled = true"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"enabled = false"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("enabled").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r##"
[variants]
accent = "#b48a19"
label = "Red"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[variants]
label = "Rood"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let variants = merged.get("variants").unwrap();
        assert_eq!(variants.get("label").unwrap().as_str(), Some("Rood"));
        // accent preserved from base
        assert_eq!(variants.get("accent").unwrap().as_str(), Some("#b48a19"));
    }

    #[test]
    fn merge_toml_adds_new_keys() {
        let base: toml::Value = toml::from_str(r#"a = 1"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"b = 2"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r##"
[variants]
acent = "#000000"
"##;
        let result: Result<CardsmithConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[galery]
title = "x"
"#;
        let result: Result<CardsmithConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[gallery]
titel = "x"
"#,
        )
        .unwrap();

        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(CardsmithConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_short_hex_ok() {
        let mut config = CardsmithConfig::default();
        config.variants.replacement = "#e22".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_colors() {
        for bad in ["e02020", "#e0202", "red", "#e02020 ", ""] {
            let mut config = CardsmithConfig::default();
            config.variants.replacement = bad.into();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("replacement"), "{bad:?}: {err}");
        }
    }

    #[test]
    fn validate_rejects_identical_colors() {
        let mut config = CardsmithConfig::default();
        config.variants.replacement = "#B48A19".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("differ"));
    }

    #[test]
    fn validate_rejects_empty_suffix() {
        let mut config = CardsmithConfig::default();
        config.variants.id_suffix = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[variants]
accent = "gold"
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r#"
[gallery]
title = "Newsletter blocks"
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.gallery.title, "Newsletter blocks");
        assert_eq!(config.variants.replacement, "#e02020");
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_config_toml()).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: CardsmithConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = CardsmithConfig::default();
        assert_eq!(config.variants.enabled, defaults.variants.enabled);
        assert_eq!(config.variants.accent, defaults.variants.accent);
        assert_eq!(config.variants.replacement, defaults.variants.replacement);
        assert_eq!(config.variants.id_suffix, defaults.variants.id_suffix);
        assert_eq!(config.variants.name_suffix, defaults.variants.name_suffix);
        assert_eq!(config.variants.label, defaults.variants.label);
        assert_eq!(config.gallery.title, defaults.gallery.title);
        assert_eq!(config.gallery.flush_previews, defaults.gallery.flush_previews);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("variants").is_some());
        assert!(val.get("gallery").is_some());
    }
}
