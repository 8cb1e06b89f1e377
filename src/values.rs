//! Value mappings: the field values a card is rendered with.
//!
//! A [`Values`] map is deliberately forgiving. Looking up a field that was
//! never set yields `""`, so templates are total over partial mappings and
//! can treat "missing" and "empty" the same way.
//!
//! Mappings come from three places, layered in this order by the CLI:
//!
//! 1. the card's declared field defaults,
//! 2. a JSON object file (`--values card.json`),
//! 3. `name=value` assignments (`--set title=Hello`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid assignment '{0}': expected name=value")]
    Assignment(String),
}

/// Field name → current string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<String, String>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of `name`, or `""` when it was never set.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether `name` holds a non-empty value.
    pub fn has(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`Values::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: Values) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Scalar JSON values accepted in a values file. Editors tend to write
/// `"height": 4` as often as `"height": "4"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonScalar {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
    Null(()),
}

impl From<JsonScalar> for String {
    fn from(value: JsonScalar) -> Self {
        match value {
            JsonScalar::Str(s) => s,
            JsonScalar::Num(n) => n.to_string(),
            JsonScalar::Bool(b) => b.to_string(),
            JsonScalar::Null(()) => String::new(),
        }
    }
}

/// Parse a JSON object of scalars into a mapping. `null` becomes `""`.
pub fn parse_values_json(content: &str) -> Result<Values, ValuesError> {
    let raw: BTreeMap<String, JsonScalar> = serde_json::from_str(content)?;
    Ok(raw.into_iter().collect())
}

/// Load a JSON values file.
pub fn load_values(path: &Path) -> Result<Values, ValuesError> {
    let content = fs::read_to_string(path)?;
    parse_values_json(&content)
}

/// Parse a `name=value` assignment. The value may contain `=`; a literal
/// `\n` in the value becomes a newline so multi-line fields can be set
/// from a shell.
pub fn parse_assignment(input: &str) -> Result<(String, String), ValuesError> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| ValuesError::Assignment(input.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ValuesError::Assignment(input.to_string()));
    }
    Ok((name.to_string(), value.replace("\\n", "\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_is_empty() {
        let values = Values::new();
        assert_eq!(values.get("title"), "");
        assert!(!values.has("title"));
    }

    #[test]
    fn set_and_get() {
        let values = Values::new().with("title", "Hello");
        assert_eq!(values.get("title"), "Hello");
        assert!(values.has("title"));
    }

    #[test]
    fn merge_overlay_wins() {
        let mut base = Values::new().with("a", "1").with("b", "2");
        base.merge(Values::new().with("b", "3").with("c", "4"));
        assert_eq!(base.get("a"), "1");
        assert_eq!(base.get("b"), "3");
        assert_eq!(base.get("c"), "4");
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn from_iterator() {
        let values: Values = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(values.iter().collect::<Vec<_>>(), vec![("x", "1"), ("y", "2")]);
    }

    // =========================================================================
    // JSON loading
    // =========================================================================

    #[test]
    fn json_accepts_scalars() {
        let values =
            parse_values_json(r#"{"title":"Hi","height":4,"opacity":0.5,"on":true,"gone":null}"#)
                .unwrap();
        assert_eq!(values.get("title"), "Hi");
        assert_eq!(values.get("height"), "4");
        assert_eq!(values.get("opacity"), "0.5");
        assert_eq!(values.get("on"), "true");
        assert_eq!(values.get("gone"), "");
    }

    #[test]
    fn json_rejects_non_object() {
        assert!(matches!(
            parse_values_json(r#"["title"]"#),
            Err(ValuesError::Json(_))
        ));
    }

    #[test]
    fn json_rejects_nested_values() {
        assert!(parse_values_json(r#"{"title":{"nested":1}}"#).is_err());
    }

    #[test]
    fn load_values_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("values.json");
        fs::write(&path, r#"{"body":"Line1\nLine2"}"#).unwrap();
        let values = load_values(&path).unwrap();
        assert_eq!(values.get("body"), "Line1\nLine2");
    }

    #[test]
    fn load_values_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_values(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(ValuesError::Io(_))));
    }

    // =========================================================================
    // Assignments
    // =========================================================================

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("href=https://x.test/?a=b").unwrap(),
            ("href".to_string(), "https://x.test/?a=b".to_string())
        );
    }

    #[test]
    fn assignment_allows_empty_value() {
        assert_eq!(
            parse_assignment("title=").unwrap(),
            ("title".to_string(), String::new())
        );
    }

    #[test]
    fn assignment_expands_newline_escape() {
        assert_eq!(parse_assignment(r"body=a\nb").unwrap().1, "a\nb");
    }

    #[test]
    fn assignment_errors() {
        assert!(matches!(
            parse_assignment("title"),
            Err(ValuesError::Assignment(_))
        ));
        assert!(matches!(
            parse_assignment("=value"),
            Err(ValuesError::Assignment(_))
        ));
    }
}
