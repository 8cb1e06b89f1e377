//! Pan and zoom state for card images.
//!
//! Images are always rendered cover-fitted into a fixed box. Editors can drag
//! an image to choose which part stays visible and scroll to zoom out. That
//! state is stored alongside the card's other values, keyed off the image
//! field's name:
//!
//! | Key              | Meaning                       | Range    | Default |
//! |------------------|-------------------------------|----------|---------|
//! | `<field>PosX`    | horizontal focus point        | 0..=100  | 50      |
//! | `<field>PosY`    | vertical focus point          | 0..=100  | 50      |
//! | `<field>Pos`     | legacy vertical focus point   | 0..=100  |         |
//! | `<field>Zoom`    | zoom in percent               | 50..=100 | 100     |
//!
//! Templates call [`ImageFocus::from_values`] and splice
//! [`ImageFocus::style`] into the image's inline style.

use crate::numeric::{parse_float, percent};
use crate::values::Values;

pub const DEFAULT_POSITION: f64 = 50.0;
pub const MIN_ZOOM: f64 = 50.0;
pub const MAX_ZOOM: f64 = 100.0;
/// Zoom change per wheel notch.
pub const ZOOM_STEP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFocus {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for ImageFocus {
    fn default() -> Self {
        Self {
            x: DEFAULT_POSITION,
            y: DEFAULT_POSITION,
            zoom: MAX_ZOOM,
        }
    }
}

impl ImageFocus {
    /// Read the focus of the image stored in `field`.
    pub fn from_values(values: &Values, field: &str) -> Self {
        let x = percent(values.get(&format!("{field}PosX")), DEFAULT_POSITION);
        let y_key = format!("{field}PosY");
        let y_raw = if values.has(&y_key) {
            values.get(&y_key)
        } else {
            values.get(&format!("{field}Pos"))
        };
        let y = percent(y_raw, DEFAULT_POSITION);
        let zoom = parse_float(values.get(&format!("{field}Zoom")))
            .unwrap_or(MAX_ZOOM)
            .clamp(MIN_ZOOM, MAX_ZOOM);
        Self { x, y, zoom }
    }

    /// Inline CSS declarations for the image element.
    pub fn style(&self) -> String {
        let mut css = format!("object-position:{}% {}%;", self.x, self.y);
        if self.zoom < MAX_ZOOM {
            css.push_str(&format!(
                "transform-origin:{}% {}%;transform:scale({:.2});",
                self.x,
                self.y,
                self.zoom / 100.0
            ));
        }
        css
    }

    /// Focus after dragging by a fraction of the image's size.
    ///
    /// Positions are clamped to the image and rounded to whole percents.
    pub fn pan(&self, dx_ratio: f64, dy_ratio: f64) -> Self {
        let shift = |pos: f64, ratio: f64| (pos + ratio * 100.0).clamp(0.0, 100.0).round();
        Self {
            x: shift(self.x, dx_ratio),
            y: shift(self.y, dy_ratio),
            zoom: self.zoom,
        }
    }

    /// Focus after one wheel notch. A positive `delta` (scrolling down)
    /// zooms out.
    pub fn zoom_step(&self, delta: f64) -> Self {
        let step = if delta > 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        Self {
            zoom: (self.zoom + step).clamp(MIN_ZOOM, MAX_ZOOM),
            ..*self
        }
    }

    /// The `(key, value)` pairs that persist this focus for `field`.
    pub fn assignments(&self, field: &str) -> Vec<(String, String)> {
        vec![
            (format!("{field}PosX"), self.x.to_string()),
            (format!("{field}PosY"), self.y.to_string()),
            (format!("{field}Zoom"), self.zoom.to_string()),
        ]
    }
}
