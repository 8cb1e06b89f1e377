//! Hex color parsing for user-supplied color fields.
//!
//! Parsing is total: anything that is not a 3- or 6-digit hex color (with or
//! without a leading `#`) resolves to a caller-chosen fallback instead of an
//! error. Call sites pick the fallback that suits their card, typically
//! [`Rgb::BLACK`] for image overlays and [`Rgb::GOLD`] for accent dividers.

use std::fmt;

/// An sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// The catalog's accent gold, `#b48a19`.
    pub const GOLD: Rgb = Rgb::new(180, 138, 25);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `rgb`, `#rrggbb` or `rrggbb`. Surrounding whitespace is
    /// ignored; anything else is `None`.
    pub fn parse_hex(input: &str) -> Option<Rgb> {
        let s = input.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match s.len() {
            3 => s.chars().flat_map(|c| [c, c]).collect(),
            6 => s.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Formats as `r,g,b` for use inside `rgba(...)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Parse a hex color, falling back when the input is not one.
pub fn hex_to_rgb(hex: &str, fallback: Rgb) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or(fallback)
}

/// CSS `rgba(r,g,b,a)`.
pub fn rgba(rgb: Rgb, alpha: f64) -> String {
    format!("rgba({rgb},{alpha})")
}

/// Validate a free-form color for direct use in a `style` attribute.
///
/// Accepts 3 to 8 hex digits with an optional `#` and returns it with the
/// `#` prefix. Anything else (including named colors and `url(...)`)
/// yields `fallback` unchanged.
pub fn clean_color(value: &str, fallback: &str) -> String {
    let s = value.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if (3..=8).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        format!("#{digits}")
    } else {
        fallback.to_string()
    }
}
