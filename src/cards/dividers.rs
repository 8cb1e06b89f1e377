//! Dividers, spacers and decorative bands.
//!
//! Dividers sit in a narrower gutter than regular cards and have no panel.
//! The center-fade family draws a bar that is solid in the middle and fades
//! to transparent at both edges:
//!
//! ```text
//!  0%        50-w/2      50      50+w/2       100%
//!  |  alpha 0 → 0.9  →   1   →   0.9  →  0     |
//! ```

use super::parts::{ACCENT, Panel, RULE_GUTTER, SAND, grid, heading, icon, nbsp, shell};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::{Rgb, hex_to_rgb, rgba};
use crate::numeric::clamped_int;
use crate::values::Values;
use maud::{Markup, html};

const FADE_HEIGHT: i64 = 4;
const FADE_CENTER_WIDTH: i64 = 18;
const FADE_MAX_CENTER_WIDTH: i64 = 80;
const FADE_MAX_HEIGHT: i64 = 40;

const ACCENT_WIDTH: i64 = 80;
const ACCENT_MAX_WIDTH: i64 = 600;
const SPACER_HEIGHT: i64 = 16;
const SPACER_MAX_HEIGHT: i64 = 200;

const PRESET_RED: Rgb = Rgb::new(224, 32, 32);
const PRESET_GRAY: Rgb = Rgb::new(160, 160, 160);

const DIVIDER_ICON: &str = "https://cdn.example.com/icons/check-circle.svg";

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "divider-center-fade",
            "Divider: solid center, faded edges",
            "style",
            "A center bar that fades out towards the left and right.",
            vec![
                FieldSchema::text("color", "Color (hex)", ACCENT),
                FieldSchema::text("height", "Height (px)", "4"),
                FieldSchema::text("centerWidth", "Center width (%)", "18"),
            ],
            divider_center_fade,
        ),
        CardDefinition::new(
            "divider-center-fade-red",
            "Divider: solid center, faded edges (red)",
            "style",
            "Red center bar fading out on both sides.",
            fade_preset_fields(),
            divider_center_fade_red,
        ),
        CardDefinition::new(
            "divider-center-fade-gray",
            "Divider: solid center, faded edges (gray)",
            "style",
            "Gray center bar fading out on both sides.",
            fade_preset_fields(),
            divider_center_fade_gray,
        ),
        CardDefinition::new(
            "divider-center-fade-black",
            "Divider: solid center, faded edges (black)",
            "style",
            "Black center bar fading out on both sides.",
            fade_preset_fields(),
            divider_center_fade_black,
        ),
        CardDefinition::new(
            "divider-thin",
            "Divider: thin",
            "style",
            "A thin, subtle rule.",
            vec![],
            divider_thin,
        ),
        CardDefinition::new(
            "divider-dotted",
            "Divider: dotted",
            "style",
            "A dotted rule.",
            vec![],
            divider_dotted,
        ),
        CardDefinition::new(
            "divider-dotted-light",
            "Divider: light dotted",
            "style",
            "A warm, light dotted rule.",
            vec![],
            divider_dotted_light,
        ),
        CardDefinition::new(
            "divider-dashed",
            "Divider: dashed",
            "style",
            "A dashed rule.",
            vec![],
            divider_dashed,
        ),
        CardDefinition::new(
            "divider-double",
            "Divider: double",
            "style",
            "Two rules with a gap between them.",
            vec![],
            divider_double,
        ),
        CardDefinition::new(
            "divider-accent",
            "Divider: accent bar",
            "style",
            "A short gold bar in the middle.",
            vec![FieldSchema::text("width", "Bar width (px)", "80")],
            divider_accent,
        ),
        CardDefinition::new(
            "divider-gradient",
            "Divider: gradient",
            "style",
            "A subtle horizontal gradient bar.",
            vec![],
            divider_gradient,
        ),
        CardDefinition::new(
            "divider-icon-center",
            "Divider: icon in the middle",
            "style",
            "Rules on both sides of a small icon.",
            vec![FieldSchema::text("icon", "Icon URL", DIVIDER_ICON)],
            divider_icon_center,
        ),
        CardDefinition::new(
            "spacer",
            "Spacer",
            "style",
            "Empty vertical space with an adjustable height.",
            vec![FieldSchema::text("height", "Height (px)", "16")],
            spacer,
        ),
        CardDefinition::new(
            "spacer-thick",
            "Spacer: thick",
            "style",
            "Extra room between sections (24px).",
            vec![],
            spacer_thick,
        ),
        CardDefinition::new(
            "spacer-line",
            "Spacer: thin line",
            "style",
            "A thin gray rule between content blocks.",
            vec![],
            spacer_line,
        ),
        CardDefinition::new(
            "gradient-band",
            "Gradient band",
            "style",
            "A decorative band with a gradient background and a title.",
            vec![FieldSchema::text("title", "Title", "Newsletter")],
            gradient_band,
        ),
    ]
}

fn fade_preset_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("height", "Height (px)", "4"),
        FieldSchema::text("centerWidth", "Center width (%)", "18"),
    ]
}

/// CSS background for a center-fade bar in `rgb` with a solid center
/// `center_width` percent wide.
pub fn fade_gradient(rgb: Rgb, center_width: i64) -> String {
    let half = center_width as f64 / 2.0;
    let (left, right) = (50.0 - half, 50.0 + half);
    format!(
        "linear-gradient(90deg, {} 0%, {} {left}%, {} 50%, {} {right}%, {} 100%)",
        rgba(rgb, 0.0),
        rgba(rgb, 0.9),
        rgba(rgb, 1.0),
        rgba(rgb, 0.9),
        rgba(rgb, 0.0),
    )
}

fn center_fade(v: &Values, rgb: Rgb) -> Markup {
    let height = clamped_int(v.get("height"), FADE_HEIGHT, 1, FADE_MAX_HEIGHT);
    let center_width = clamped_int(
        v.get("centerWidth"),
        FADE_CENTER_WIDTH,
        0,
        FADE_MAX_CENTER_WIDTH,
    );
    let radius = (height as f64 / 2.0).round() as i64;
    shell(
        RULE_GUTTER,
        html! {
            div style=(format!(
                "height:{height}px;background:{};border-radius:{radius}px;",
                fade_gradient(rgb, center_width)
            )) { (nbsp()) }
        },
    )
}

fn divider_center_fade(v: &Values) -> Markup {
    let color = match v.get("color") {
        "" => ACCENT,
        color => color,
    };
    center_fade(v, hex_to_rgb(color, Rgb::GOLD))
}

fn divider_center_fade_red(v: &Values) -> Markup {
    center_fade(v, PRESET_RED)
}

fn divider_center_fade_gray(v: &Values) -> Markup {
    center_fade(v, PRESET_GRAY)
}

fn divider_center_fade_black(v: &Values) -> Markup {
    center_fade(v, Rgb::BLACK)
}

fn line(border: &str) -> Markup {
    html! {
        div style=(format!("border-top:{border};height:1px;line-height:1px;font-size:0;")) { (nbsp()) }
    }
}

fn gap(height: i64) -> Markup {
    html! {
        div style=(format!("height:{height}px;line-height:{height}px;font-size:0;")) { (nbsp()) }
    }
}

fn divider_thin(_: &Values) -> Markup {
    shell(RULE_GUTTER, line("1px solid #e0e0e0"))
}

fn divider_dotted(_: &Values) -> Markup {
    shell(RULE_GUTTER, line("1px dotted #cfcfcf"))
}

fn divider_dotted_light(_: &Values) -> Markup {
    shell("12px 14px", line("1px dotted #d9d4c6"))
}

fn divider_dashed(_: &Values) -> Markup {
    shell(RULE_GUTTER, line("1px dashed #cfcfcf"))
}

fn divider_double(_: &Values) -> Markup {
    shell(
        RULE_GUTTER,
        html! {
            (line("1px solid #dddddd"))
            (gap(6))
            (line("1px solid #dddddd"))
        },
    )
}

fn divider_accent(v: &Values) -> Markup {
    let width = clamped_int(v.get("width"), ACCENT_WIDTH, 1, ACCENT_MAX_WIDTH);
    shell(
        RULE_GUTTER,
        html! {
            div style="text-align:center;" {
                div style=(format!("display:inline-block;width:{width}px;height:4px;background:#b48a19;border-radius:2px;")) { (nbsp()) }
            }
        },
    )
}

fn divider_gradient(_: &Values) -> Markup {
    shell(
        RULE_GUTTER,
        html! {
            div style="height:4px;background:#b48a19;background-image:linear-gradient(90deg,#b48a19, #f1ebda);border-radius:2px;" { (nbsp()) }
        },
    )
}

fn divider_icon_center(v: &Values) -> Markup {
    let rule = html! { td style="vertical-align:middle;" { (line("1px solid #e0e0e0")) } };
    shell(
        RULE_GUTTER,
        grid(html! {
            tr {
                (rule)
                td style="width:40px;vertical-align:middle;text-align:center;" {
                    (icon(v.get("icon"), 20, "border-radius:50%;display:inline-block;"))
                }
                (rule)
            }
        }),
    )
}

fn spacer(v: &Values) -> Markup {
    let height = clamped_int(v.get("height"), SPACER_HEIGHT, 1, SPACER_MAX_HEIGHT);
    shell("0 14px", gap(height))
}

fn spacer_thick(_: &Values) -> Markup {
    shell("0", gap(24))
}

fn spacer_line(_: &Values) -> Markup {
    shell("14px", line("1px solid #e0e0e0"))
}

fn gradient_band(v: &Values) -> Markup {
    let band = Panel {
        background: ACCENT,
        ..Panel::cream()
    };
    band.render_rows(html! {
        tr {
            td style=(format!("padding:20px;text-align:center;background:#b48a19;background-image:linear-gradient(90deg,#b48a19,{SAND});")) {
                (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#2b2b2b;background:#ffffff;border-radius:999px;display:inline-block;padding:6px 14px;"))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(id: &str) -> CardDefinition {
        cards().into_iter().find(|c| c.id == id).unwrap()
    }

    fn fade(values: Values) -> String {
        card("divider-center-fade").render(&values)
    }

    #[test]
    fn center_fade_black_gradient() {
        let html = fade(
            Values::new()
                .with("color", "#000")
                .with("height", "4")
                .with("centerWidth", "18"),
        );
        assert!(html.contains(
            "linear-gradient(90deg, rgba(0,0,0,0) 0%, rgba(0,0,0,0.9) 41%, rgba(0,0,0,1) 50%, rgba(0,0,0,0.9) 59%, rgba(0,0,0,0) 100%)"
        ));
        assert!(html.contains("height:4px;"));
        assert!(html.contains("border-radius:2px;"));
        assert!(html.contains(">&nbsp;</div>"));
    }

    #[test]
    fn center_fade_defaults_to_gold() {
        let html = fade(Values::new());
        assert!(html.contains("rgba(180,138,25,1) 50%"));
        assert!(html.contains("height:4px;"));
        assert!(!html.to_lowercase().contains("#b48a19"));
    }

    #[test]
    fn center_fade_invalid_color_falls_back_to_gold() {
        let html = fade(Values::new().with("color", "tomato"));
        assert!(html.contains("rgba(180,138,25,0.9)"));
    }

    #[test]
    fn center_fade_clamps_and_rounds() {
        let html = fade(
            Values::new()
                .with("height", "-3")
                .with("centerWidth", "500"),
        );
        assert!(html.contains("height:1px;"));
        assert!(html.contains("border-radius:1px;"));
        assert!(html.contains(" 10%, "));
        assert!(html.contains(" 90%, "));

        let html = fade(Values::new().with("height", "7").with("centerWidth", "5"));
        assert!(html.contains("border-radius:4px;"));
        assert!(html.contains(" 47.5%, "));
        assert!(html.contains(" 52.5%, "));
    }

    #[test]
    fn fade_gradient_with_zero_center_is_pointed() {
        assert_eq!(
            fade_gradient(Rgb::new(1, 2, 3), 0),
            "linear-gradient(90deg, rgba(1,2,3,0) 0%, rgba(1,2,3,0.9) 50%, rgba(1,2,3,1) 50%, rgba(1,2,3,0.9) 50%, rgba(1,2,3,0) 100%)"
        );
    }

    #[test]
    fn fade_presets_ignore_color() {
        let values = Values::new().with("color", "#000");
        let red = card("divider-center-fade-red").render(&values);
        assert!(red.contains("rgba(224,32,32,1) 50%"));
        let gray = card("divider-center-fade-gray").render(&values);
        assert!(gray.contains("rgba(160,160,160,1) 50%"));
    }

    #[test]
    fn simple_rules() {
        assert!(card("divider-thin").render_defaults().contains("border-top:1px solid #e0e0e0;"));
        assert!(card("divider-dashed").render_defaults().contains("1px dashed #cfcfcf"));
        assert_eq!(
            card("divider-double")
                .render_defaults()
                .matches("1px solid #dddddd")
                .count(),
            2
        );
    }

    #[test]
    fn accent_and_spacer_sizes() {
        let html = card("divider-accent").render(&Values::new().with("width", "120"));
        assert!(html.contains("width:120px;height:4px;"));
        assert!(card("divider-accent").render(&Values::new()).contains("width:80px;"));

        let html = card("spacer").render(&Values::new().with("height", "abc"));
        assert!(html.contains("height:16px;line-height:16px;"));
    }

    #[test]
    fn sizes_out_of_range_are_clamped() {
        let html = fade(Values::new().with("height", "99999999999999999999"));
        assert!(html.contains("height:40px;"));
        assert!(html.contains("border-radius:20px;"));

        let html = card("divider-accent").render(&Values::new().with("width", "-50"));
        assert!(html.contains("width:1px;height:4px;"));
        let html = card("divider-accent").render(&Values::new().with("width", "5000"));
        assert!(html.contains("width:600px;height:4px;"));

        let html = card("spacer").render(&Values::new().with("height", "-8"));
        assert!(html.contains("height:1px;line-height:1px;"));
        let html = card("spacer").render(&Values::new().with("height", "99999999999999999999"));
        assert!(html.contains("height:200px;line-height:200px;"));
    }

    #[test]
    fn gradient_band_escapes_title() {
        let html = card("gradient-band").render(&Values::new().with("title", "A & B"));
        assert!(html.contains(">A &amp; B</div>"));
    }
}
