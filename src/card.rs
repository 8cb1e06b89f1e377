//! Card definitions: field schema plus a render function.
//!
//! A card is immutable once built. Base cards render through a plain
//! function pointer; derived color variants wrap a base function and recolor
//! its output on every render (see [`crate::variant`]).

use crate::values::Values;
use crate::variant::Recolor;
use maud::Markup;
use serde::Serialize;

/// Input widget an editor shows for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text. Rich-text markup applies where the card renders it.
    Textarea,
}

/// One editable input on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub default: String,
}

impl FieldSchema {
    pub fn new(name: &str, label: &str, kind: FieldKind, default: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            default: default.to_string(),
        }
    }

    pub fn text(name: &str, label: &str, default: &str) -> Self {
        Self::new(name, label, FieldKind::Text, default)
    }

    pub fn textarea(name: &str, label: &str, default: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea, default)
    }
}

/// A pure render function. Must not panic for any mapping.
pub type RenderFn = fn(&Values) -> Markup;

#[derive(Debug, Clone)]
pub enum Template {
    Base(RenderFn),
    /// Base output with a color token substituted after rendering.
    Recolored { base: RenderFn, recolor: Recolor },
}

impl Template {
    pub fn render(&self, values: &Values) -> String {
        match self {
            Template::Base(render) => render(values).into_string(),
            Template::Recolored { base, recolor } => recolor.apply(&base(values).into_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub fields: Vec<FieldSchema>,
    /// Id of the base card this one was derived from, for color variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_from: Option<String>,
    #[serde(skip)]
    pub template: Template,
}

impl CardDefinition {
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        description: &str,
        fields: Vec<FieldSchema>,
        render: RenderFn,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            fields,
            derived_from: None,
            template: Template::Base(render),
        }
    }

    pub fn render(&self, values: &Values) -> String {
        self.template.render(values)
    }

    /// Every declared field set to its default.
    pub fn default_values(&self) -> Values {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.default.as_str()))
            .collect()
    }

    pub fn render_defaults(&self) -> String {
        self.render(&self.default_values())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_variant(&self) -> bool {
        self.derived_from.is_some()
    }
}
