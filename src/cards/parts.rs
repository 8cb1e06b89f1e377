//! Building blocks shared by the card templates.
//!
//! Every card is a presentation table inside a padded outer table. The
//! inner "panel" carries the card's background, rounded corners and shadow;
//! everything else is the card's own content.

use crate::escape::text;
use crate::focus::ImageFocus;
use crate::values::Values;
use maud::{Markup, PreEscaped, html};

pub const FONT: &str = "Ubuntu, Arial, sans-serif";
pub const INK: &str = "#2b2b2b";
pub const CREAM: &str = "#f9f7f2";
pub const WHITE: &str = "#ffffff";
/// The accent gold. Color variants are derived by swapping this token.
pub const ACCENT: &str = "#b48a19";
pub const RED: &str = "#e02020";
pub const SAND: &str = "#f1ebda";

/// Outer cell padding of a regular card.
pub const CARD_GUTTER: &str = "14px";
/// Outer cell padding of a divider.
pub const RULE_GUTTER: &str = "10px 14px";

pub const BUTTON_STYLE: &str = "display:inline-block;padding:10px 18px;background:#b48a19;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;";

pub const TAG_STYLE: &str = "display:inline-block;margin:0 6px 8px 0;padding:3px 10px;border-radius:999px;background:#b48a19;color:#ffffff;font-weight:700;font-size:11px;letter-spacing:.05em;text-transform:uppercase;";

/// Non-breaking space, for cells that must not collapse.
pub fn nbsp() -> PreEscaped<&'static str> {
    PreEscaped("&nbsp;")
}

/// The outermost email-safe table every card sits in.
pub fn shell(gutter: &str, content: Markup) -> Markup {
    html! {
        table role="presentation" cellpadding="0" cellspacing="0" width="100%"
            style=(format!("border-collapse:collapse;font-family:{FONT};")) {
            tbody {
                tr {
                    td style=(format!("padding:{gutter};")) { (content) }
                }
            }
        }
    }
}

/// A bare layout table with collapsed borders, for rows of items.
pub fn grid(rows: Markup) -> Markup {
    html! {
        table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="border-collapse:collapse;" {
            tbody { (rows) }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    None,
    Soft,
    Medium,
    Strong,
}

impl Shadow {
    fn css(self) -> &'static str {
        match self {
            Shadow::None => "",
            Shadow::Soft => "box-shadow:0 6px 18px rgba(0,0,0,0.08);",
            Shadow::Medium => "box-shadow:0 6px 18px rgba(0,0,0,0.12);",
            Shadow::Strong => "box-shadow:0 6px 18px rgba(0,0,0,0.14);",
        }
    }
}

/// The rounded card surface.
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    pub background: &'a str,
    pub shadow: Shadow,
    pub padding: &'a str,
    pub radius: u32,
}

impl<'a> Panel<'a> {
    pub const fn cream() -> Self {
        Self {
            background: CREAM,
            shadow: Shadow::Strong,
            padding: "20px",
            radius: 18,
        }
    }

    pub const fn white() -> Self {
        Self {
            background: WHITE,
            shadow: Shadow::Soft,
            padding: "16px 18px",
            radius: 18,
        }
    }

    pub const fn on(background: &'a str) -> Self {
        Self {
            background,
            ..Self::cream()
        }
    }

    pub const fn padding(self, padding: &'a str) -> Self {
        Self { padding, ..self }
    }

    pub const fn shadow(self, shadow: Shadow) -> Self {
        Self { shadow, ..self }
    }

    fn style(&self) -> String {
        format!(
            "border-radius:{}px;overflow:hidden;background:{};border:0;{}",
            self.radius,
            self.background,
            self.shadow.css()
        )
    }

    /// The panel table with arbitrary rows.
    pub fn table(&self, rows: Markup) -> Markup {
        html! {
            table role="presentation" width="100%" cellpadding="0" cellspacing="0" style=(self.style()) {
                tbody { (rows) }
            }
        }
    }

    /// A complete card: shell, panel and one padded content cell.
    pub fn render(&self, content: Markup) -> Markup {
        self.render_rows(html! {
            tr { td style=(format!("padding:{};", self.padding)) { (content) } }
        })
    }

    /// A complete card whose panel holds `rows` directly.
    pub fn render_rows(&self, rows: Markup) -> Markup {
        shell(CARD_GUTTER, self.table(rows))
    }
}

/// Card heading. `style` carries size, color and spacing.
pub fn heading(value: &str, style: &str) -> Markup {
    html! { div style=(format!("font-weight:800;{style}")) { (text(value)) } }
}

/// The stock 22px ink title above a card body.
pub fn title(value: &str) -> Markup {
    heading(value, "font-size:22px;line-height:1.3;color:#2b2b2b;margin-bottom:12px;")
}

/// A gold pill button.
pub fn button(link: &str, label: &str) -> Markup {
    styled_link(link, label, BUTTON_STYLE)
}

/// A link with an explicit inline style, e.g. a recolored button.
pub fn styled_link(link: &str, label: &str, style: &str) -> Markup {
    html! { a href=(text(link)) style=(style) { (text(label)) } }
}

/// `content` as a borderless link that opens in a new tab.
pub fn linked(link: &str, content: Markup) -> Markup {
    html! {
        a href=(text(link)) target="_blank" rel="noopener noreferrer"
            style="display:inline-block;text-decoration:none;border:0;" { (content) }
    }
}

/// A fixed-size image that is not pannable.
pub fn still(src: &str, alt: &str, style: &str) -> Markup {
    html! { img src=(text(src)) alt=(text(alt)) style=(style); }
}

/// An uppercase gold badge.
pub fn tag_badge(label: &str) -> Markup {
    html! { span style=(TAG_STYLE) { (text(label)) } }
}

/// A cover-fitted image whose visible region follows the pan/zoom state
/// stored for `field`.
pub fn image(values: &Values, field: &str, alt: &str, box_style: &str) -> Markup {
    let focus = ImageFocus::from_values(values, field);
    html! {
        img src=(text(values.get(field))) alt=(text(alt)) data-field=(field)
            style=(format!("{box_style}{}", focus.style()));
    }
}

/// A small decorative icon; icons are not pannable.
pub fn icon(src: &str, size: u32, style: &str) -> Markup {
    html! {
        img src=(text(src)) alt="" style=(format!("width:{size}px;height:{size}px;{style}"));
    }
}

/// Value of the `i`th repeatable sub-field, e.g. `("text", 3)` → `text3`.
pub fn nth<'v>(values: &'v Values, key: &str, i: usize) -> &'v str {
    values.get(&format!("{key}{i}"))
}

/// `nth` for keys whose index sits in the middle: `("step", 2, "Title")`.
pub fn nth_infix<'v>(values: &'v Values, prefix: &str, i: usize, suffix: &str) -> &'v str {
    values.get(&format!("{prefix}{i}{suffix}"))
}
