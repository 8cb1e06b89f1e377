//! Newsletter headers.
//!
//! The text headers take an optional fixed `height`. Without one the cell
//! is padded; with one the title is centered vertically in a cell of that
//! height. The image headers stack a pannable image, a color or gradient
//! overlay and the title in one positioned box.

use super::parts::{ACCENT, INK, Panel, Shadow, button, heading, icon, image, nth, tag_badge};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::{Rgb, hex_to_rgb, rgba};
use crate::escape::text;
use crate::numeric::{clamped_int, parse_int, unit_interval};
use crate::values::Values;
use maud::{Markup, html};

const TAGS: usize = 3;
const OVERLAY_OPACITY: f64 = 0.45;
const IMAGE_HEIGHT: i64 = 180;
const HERO_HEIGHT: i64 = 200;
const MIN_IMAGE_HEIGHT: i64 = 40;
const MAX_HEIGHT: i64 = 600;
const GRADIENT_ANGLE: i64 = 180;

const HEADER_IMAGE: &str = "https://images.example.com/cards/lobby-evening.jpg";
const HEADER_ICON: &str = "https://cdn.example.com/icons/check-circle.svg";
/// Darkening over the plain image header's photo.
const IMAGE_SHADE: f64 = 0.4;

fn height_field() -> FieldSchema {
    FieldSchema::text("height", "Height (px, optional)", "")
}

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "header-simple",
            "Header: simple",
            "basic",
            "A centered title.",
            vec![FieldSchema::text("title", "Title", "Welcome to our newsletter"), height_field()],
            header_simple,
        ),
        CardDefinition::new(
            "header-subtitle",
            "Header: with subtitle",
            "basic",
            "A title with a subtitle underneath.",
            vec![
                FieldSchema::text("title", "Title", "Enjoy it together"),
                FieldSchema::text("subtitle", "Subtitle", "Discover our activities and packages"),
                height_field(),
            ],
            header_subtitle,
        ),
        CardDefinition::new(
            "header-button",
            "Header: with button",
            "basic",
            "A title with a call-to-action button.",
            vec![
                FieldSchema::text("title", "Title", "Start your adventure"),
                FieldSchema::text("buttonLabel", "Button text", "See what's on"),
                FieldSchema::text("buttonLink", "Button link", "#"),
                height_field(),
            ],
            header_button,
        ),
        CardDefinition::new(
            "header-tag",
            "Header: with tags",
            "basic",
            "Up to three small labels above the title.",
            vec![
                FieldSchema::text("tag", "Label", "News"),
                FieldSchema::text("tag2", "Label 2 (optional)", ""),
                FieldSchema::text("tag3", "Label 3 (optional)", ""),
                FieldSchema::text("title", "Title", "New opening hours"),
                height_field(),
            ],
            header_tag,
        ),
        CardDefinition::new(
            "header-dark",
            "Header: dark",
            "basic",
            "Light title and subtitle on a dark background.",
            vec![
                FieldSchema::text("title", "Title", "Featured"),
                FieldSchema::text("subtitle", "Subtitle", "Plan your visit today"),
                height_field(),
            ],
            header_dark,
        ),
        CardDefinition::new(
            "header-gold",
            "Header: gold",
            "basic",
            "A large white title on the gold accent.",
            vec![FieldSchema::text("title", "Title", "Special offer"), height_field()],
            header_gold,
        ),
        CardDefinition::new(
            "header-accent",
            "Header: accent bar",
            "basic",
            "A title with a gold bar underneath.",
            vec![FieldSchema::text("title", "Title", "Plan your day out")],
            header_accent,
        ),
        CardDefinition::new(
            "header-center-slim",
            "Header: slim eyebrow",
            "basic",
            "A small centered eyebrow above a large title.",
            vec![
                FieldSchema::text("eyebrow", "Eyebrow", "News"),
                FieldSchema::text("title", "Title", "Welcome to our newsletter"),
            ],
            header_center_slim,
        ),
        CardDefinition::new(
            "header-announce-bar",
            "Header: announcement bar",
            "basic",
            "A dark bar with a short announcement.",
            vec![
                FieldSchema::text("text", "Text", "New ladies night: tickets on sale now"),
                FieldSchema::text("link", "Link (optional)", ""),
            ],
            header_announce_bar,
        ),
        CardDefinition::new(
            "header-image-overlay",
            "Header: image with color overlay",
            "basic",
            "A background image with a colored overlay and a centered title.",
            vec![
                FieldSchema::text("image", "Image URL", HEADER_IMAGE),
                FieldSchema::text("alt", "Alt text", "Background"),
                FieldSchema::text("overlayColor", "Overlay color (hex)", ACCENT),
                FieldSchema::text("overlayOpacity", "Overlay opacity (0-1)", "0.45"),
                FieldSchema::text("title", "Title", "Experience it yourself"),
                height_field(),
            ],
            header_image_overlay,
        ),
        CardDefinition::new(
            "header-image-gradient",
            "Header: image with gradient",
            "basic",
            "A background image under a two-color gradient with a centered title.",
            vec![
                FieldSchema::text("image", "Image URL", HEADER_IMAGE),
                FieldSchema::text("alt", "Alt text", "Background"),
                FieldSchema::text("angle", "Gradient angle (degrees)", "180"),
                FieldSchema::text("start", "Start color (hex)", "#000000"),
                FieldSchema::text("startOpacity", "Start opacity (0-1)", "0.55"),
                FieldSchema::text("end", "End color (hex)", "#000000"),
                FieldSchema::text("endOpacity", "End opacity (0-1)", "0.0"),
                FieldSchema::text("title", "Title", "Experience it yourself"),
                height_field(),
            ],
            header_image_gradient,
        ),
        CardDefinition::new(
            "header-hero-image",
            "Header: hero image",
            "basic",
            "A tall image with overlay, title, subtitle and button.",
            vec![
                FieldSchema::text("image", "Image URL", HEADER_IMAGE),
                FieldSchema::text("alt", "Alt text", "Background"),
                FieldSchema::text("overlay", "Overlay color (hex)", "#000000"),
                FieldSchema::text("overlayOpacity", "Overlay opacity (0-1)", "0.45"),
                FieldSchema::text("height", "Height (px)", "200"),
                FieldSchema::text("title", "Title", "A day full of experiences"),
                FieldSchema::text("subtitle", "Subtitle", "Book your tickets now"),
                FieldSchema::text("buttonLabel", "Button text", "Book now"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            header_hero_image,
        ),
        CardDefinition::new(
            "header-icon",
            "Header: with icon",
            "basic",
            "A round icon above the title.",
            vec![
                FieldSchema::text("icon", "Icon URL", HEADER_ICON),
                FieldSchema::text("title", "Title", "Visit our cinema"),
                height_field(),
            ],
            header_icon,
        ),
        CardDefinition::new(
            "header-image",
            "Header: background photo",
            "basic",
            "A large darkened photo with a centered title.",
            vec![
                FieldSchema::text("image", "Image URL", HEADER_IMAGE),
                FieldSchema::text("alt", "Alt text", "Background"),
                FieldSchema::text("title", "Title", "Experience it all"),
                height_field(),
            ],
            header_image,
        ),
        CardDefinition::new(
            "header-slim",
            "Header: compact",
            "basic",
            "A compact header with a smaller title.",
            vec![FieldSchema::text("title", "Title", "What's on")],
            header_slim,
        ),
        CardDefinition::new(
            "header-left",
            "Header: left aligned",
            "basic",
            "A left-aligned title and subtitle with generous padding.",
            vec![
                FieldSchema::text("title", "Title", "News & updates"),
                FieldSchema::text("subtitle", "Subtitle", "Stay up to date with the latest news"),
            ],
            header_left,
        ),
        CardDefinition::new(
            "header-hero",
            "Header: hero with button",
            "basic",
            "A wide hero with a title, subtitle and button.",
            vec![
                FieldSchema::text("title", "Title", "A day full of experiences"),
                FieldSchema::text("subtitle", "Subtitle", "Book your tickets now"),
                FieldSchema::text("buttonLabel", "Button text", "Book now"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            header_hero,
        ),
    ]
}

/// Cell style for a text header: fixed height when one is given, otherwise
/// `padding` around the content. Zero or negative heights count as none.
fn header_cell(v: &Values, padding: &str) -> String {
    match parse_int(v.get("height")).filter(|&h| h > 0).map(|h| h.min(MAX_HEIGHT)) {
        Some(h) => format!("padding:0 20px;text-align:center;height:{h}px;vertical-align:middle;"),
        None => format!("padding:{padding};text-align:center;"),
    }
}

fn text_header(panel: Panel<'_>, cell: String, content: Markup) -> Markup {
    panel.render_rows(html! { tr { td style=(cell) { (content) } } })
}

fn subtitle(value: &str, color: &str) -> Markup {
    html! {
        div style=(format!("font-weight:400;font-size:14px;line-height:1.5;color:{color};")) { (text(value)) }
    }
}

fn header_simple(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        header_cell(v, "18px 20px"),
        heading(v.get("title"), "font-size:24px;line-height:1.2;color:#2b2b2b;"),
    )
}

fn header_subtitle(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        header_cell(v, "20px 20px"),
        html! {
            (heading(v.get("title"), "font-size:22px;line-height:1.2;color:#2b2b2b;margin-bottom:6px;"))
            (subtitle(v.get("subtitle"), INK))
        },
    )
}

fn header_button(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        header_cell(v, "20px 20px"),
        html! {
            (heading(v.get("title"), "font-size:22px;line-height:1.2;color:#2b2b2b;margin-bottom:10px;"))
            (button(v.get("buttonLink"), v.get("buttonLabel")))
        },
    )
}

fn header_tag(v: &Values) -> Markup {
    let tags = std::iter::once(v.get("tag"))
        .chain((2..=TAGS).map(|i| nth(v, "tag", i)))
        .filter(|t| !t.is_empty());
    text_header(
        Panel::cream(),
        header_cell(v, "22px 20px"),
        html! {
            @for tag in tags { (tag_badge(tag)) }
            (heading(v.get("title"), "font-size:24px;line-height:1.25;color:#2b2b2b;"))
        },
    )
}

fn header_dark(v: &Values) -> Markup {
    text_header(
        Panel::on(INK),
        header_cell(v, "20px 20px"),
        html! {
            (heading(v.get("title"), "font-size:22px;line-height:1.2;color:#ffffff;margin-bottom:6px;"))
            (subtitle(v.get("subtitle"), "#eeeeee"))
        },
    )
}

fn header_gold(v: &Values) -> Markup {
    text_header(
        Panel::on(ACCENT),
        header_cell(v, "26px 20px"),
        heading(v.get("title"), "font-size:26px;line-height:1.2;color:#ffffff;"),
    )
}

fn header_accent(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:22px 20px 10px 20px;text-align:center;" {
                (heading(v.get("title"), "font-size:24px;line-height:1.25;color:#2b2b2b;"))
            }
        }
        tr {
            td style="padding:0 20px 20px 20px;" {
                div style="height:4px;background:#b48a19;border-radius:2px;" {}
            }
        }
    })
}

fn header_center_slim(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        "padding:22px 18px;text-align:center;".to_string(),
        html! {
            (heading(v.get("eyebrow"), "font-size:12px;letter-spacing:.08em;text-transform:uppercase;color:#b48a19;margin-bottom:6px;"))
            (heading(v.get("title"), "font-size:24px;line-height:1.3;color:#2b2b2b;"))
        },
    )
}

fn header_icon(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        header_cell(v, "22px 20px"),
        html! {
            (icon(v.get("icon"), 40, "display:block;margin:0 auto 10px auto;border-radius:50%;object-fit:cover;"))
            (heading(v.get("title"), "font-size:24px;line-height:1.25;color:#2b2b2b;"))
        },
    )
}

fn header_slim(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        "padding:16px 16px;text-align:center;".to_string(),
        heading(v.get("title"), "font-size:20px;line-height:1.25;color:#2b2b2b;"),
    )
}

fn header_left(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        "padding:22px 20px;text-align:left;".to_string(),
        html! {
            (heading(v.get("title"), "font-size:24px;line-height:1.25;color:#2b2b2b;margin-bottom:6px;"))
            (subtitle(v.get("subtitle"), INK))
        },
    )
}

fn header_hero(v: &Values) -> Markup {
    text_header(
        Panel::cream(),
        "padding:26px 20px;text-align:center;".to_string(),
        html! {
            (heading(v.get("title"), "font-size:26px;line-height:1.2;color:#2b2b2b;margin-bottom:6px;"))
            div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
                (text(v.get("subtitle")))
            }
            (button(v.get("buttonLink"), v.get("buttonLabel")))
        },
    )
}

fn header_announce_bar(v: &Values) -> Markup {
    let bar = Panel {
        background: INK,
        shadow: Shadow::None,
        padding: "10px 14px",
        radius: 12,
    };
    let link = v.get("link");
    super::parts::shell(
        "0 14px",
        bar.table(html! {
            tr {
                td style="padding:10px 14px;text-align:center;color:#ffffff;font-weight:700;font-size:14px;" {
                    @if link.is_empty() {
                        (text(v.get("text")))
                    } @else {
                        a href=(text(link)) style="color:#ffffff;text-decoration:underline;" { (text(v.get("text"))) }
                    }
                }
            }
        }),
    )
}

/// Image box shared by the image headers: the pannable image, one overlay
/// layer painted with `overlay`, and `content` centered on top.
fn image_box(v: &Values, height: i64, overlay: &str, content: Markup) -> Markup {
    let backdrop = Panel {
        background: "#000",
        ..Panel::cream()
    };
    backdrop.render_rows(html! {
        tr {
            td style="position:relative;padding:0;" {
                div style=(format!("position:relative;width:100%;height:{height}px;background:#000;overflow:hidden;")) {
                    (image(v, "image", v.get("alt"), "position:absolute;top:0;left:0;width:100%;height:100%;object-fit:cover;"))
                    div style=(format!("position:absolute;inset:0;background:{overlay};")) {}
                    div style="position:absolute;inset:0;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:0 12px;" {
                        (content)
                    }
                }
            }
        }
    })
}

fn image_height(v: &Values, default: i64) -> i64 {
    clamped_int(v.get("height"), default, MIN_IMAGE_HEIGHT, MAX_HEIGHT)
}

fn overlay_color(value: &str) -> Rgb {
    hex_to_rgb(value, Rgb::BLACK)
}

fn header_image_overlay(v: &Values) -> Markup {
    let overlay = rgba(
        overlay_color(v.get("overlayColor")),
        unit_interval(v.get("overlayOpacity"), OVERLAY_OPACITY),
    );
    image_box(
        v,
        image_height(v, IMAGE_HEIGHT),
        &overlay,
        heading(v.get("title"), "font-size:26px;line-height:1.2;color:#ffffff;"),
    )
}

fn header_image_gradient(v: &Values) -> Markup {
    let angle = clamped_int(v.get("angle"), GRADIENT_ANGLE, 0, 360);
    let start = rgba(
        overlay_color(v.get("start")),
        unit_interval(v.get("startOpacity"), 0.55),
    );
    let end = rgba(
        overlay_color(v.get("end")),
        unit_interval(v.get("endOpacity"), 0.0),
    );
    image_box(
        v,
        image_height(v, IMAGE_HEIGHT),
        &format!("linear-gradient({angle}deg, {start}, {end})"),
        heading(v.get("title"), "font-size:26px;line-height:1.2;color:#ffffff;"),
    )
}

fn header_image(v: &Values) -> Markup {
    image_box(
        v,
        image_height(v, HERO_HEIGHT),
        &rgba(Rgb::BLACK, IMAGE_SHADE),
        heading(v.get("title"), "font-size:26px;line-height:1.2;color:#ffffff;"),
    )
}

fn header_hero_image(v: &Values) -> Markup {
    let overlay = rgba(
        overlay_color(v.get("overlay")),
        unit_interval(v.get("overlayOpacity"), OVERLAY_OPACITY),
    );
    image_box(
        v,
        image_height(v, HERO_HEIGHT),
        &overlay,
        html! {
            (heading(v.get("title"), "font-size:22px;line-height:1.2;color:#ffffff;margin-bottom:8px;"))
            div style="font-weight:400;font-size:14px;line-height:1.5;color:#ffffff;margin-bottom:12px;" {
                (text(v.get("subtitle")))
            }
            (button(v.get("buttonLink"), v.get("buttonLabel")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CardDefinition {
        cards().into_iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn optional_height_switches_cell_style() {
        let card = card("header-simple");
        assert!(card.render_defaults().contains(r#"<td style="padding:18px 20px;text-align:center;">"#));

        let html = card.render(&Values::new().with("height", "120px"));
        assert!(html.contains("padding:0 20px;text-align:center;height:120px;vertical-align:middle;"));

        let html = card.render(&Values::new().with("height", "0"));
        assert!(!html.contains("height:0px"));
    }

    #[test]
    fn out_of_range_heights_and_angles_are_clamped() {
        let html = card("header-simple").render(&Values::new().with("height", "-30"));
        assert!(html.contains(r#"<td style="padding:18px 20px;text-align:center;">"#));
        let html = card("header-simple").render(&Values::new().with("height", "99999999999999999999"));
        assert!(html.contains("height:600px;vertical-align:middle;"));

        let html = card("header-image-overlay").render(&Values::new().with("height", "-200"));
        assert!(html.contains("height:40px;"));
        assert!(!html.contains("height:-"));
        let html = card("header-hero-image").render(&Values::new().with("height", "100000"));
        assert!(html.contains("height:600px;"));

        let html = card("header-image-gradient").render(&Values::new().with("angle", "-90"));
        assert!(html.contains("linear-gradient(0deg, "));
        let html = card("header-image-gradient").render(&Values::new().with("angle", "720"));
        assert!(html.contains("linear-gradient(360deg, "));
    }

    #[test]
    fn tag_header_keeps_non_empty_tags_in_order() {
        let values = Values::new()
            .with("tag", "")
            .with("tag2", "Two")
            .with("tag3", "Three");
        let html = card("header-tag").render(&values);
        assert_eq!(html.matches("text-transform:uppercase;").count(), 2);
        assert!(html.find("Two").unwrap() < html.find("Three").unwrap());
    }

    #[test]
    fn image_overlay_uses_color_and_opacity() {
        let html = card("header-image-overlay").render_defaults();
        assert!(html.contains("background:rgba(180,138,25,0.45);"));
        assert!(html.contains("height:180px;"));
        assert!(html.contains(r#"data-field="image""#));

        let values = Values::new()
            .with("overlayColor", "nope")
            .with("overlayOpacity", "3")
            .with("height", "240");
        let html = card("header-image-overlay").render(&values);
        assert!(html.contains("background:rgba(0,0,0,1);"));
        assert!(html.contains("height:240px;"));
    }

    #[test]
    fn image_gradient_defaults() {
        let html = card("header-image-gradient").render_defaults();
        assert!(html.contains("linear-gradient(180deg, rgba(0,0,0,0.55), rgba(0,0,0,0))"));

        let values = Values::new()
            .with("angle", "90")
            .with("start", "#fff")
            .with("startOpacity", "-1");
        let html = card("header-image-gradient").render(&values);
        assert!(html.contains("linear-gradient(90deg, rgba(255,255,255,0), rgba(0,0,0,0))"));
    }

    #[test]
    fn hero_image_follows_focus() {
        let values = card("header-hero-image")
            .default_values()
            .with("imagePosY", "20")
            .with("imageZoom", "80");
        let html = card("header-hero-image").render(&values);
        assert!(html.contains("object-position:50% 20%;transform-origin:50% 20%;transform:scale(0.80);"));
        assert!(html.contains("height:200px;"));
        assert!(html.contains("Book now</a>"));
    }

    #[test]
    fn announce_bar_link_is_optional() {
        let card = card("header-announce-bar");
        assert!(!card.render_defaults().contains("<a "));
        let html = card.render(&Values::new().with("text", "Hi").with("link", "https://x.test"));
        assert!(html.contains(r#"<a href="https://x.test" style="color:#ffffff;text-decoration:underline;">Hi</a>"#));
    }

    #[test]
    fn accent_header_has_gold_bar() {
        assert!(card("header-accent").render_defaults().contains("height:4px;background:#b48a19;"));
    }

    #[test]
    fn icon_header_takes_optional_height() {
        let card = card("header-icon");
        let html = card.render_defaults();
        assert!(html.contains("padding:22px 20px;text-align:center;"));
        assert!(html.contains("width:40px;height:40px;display:block;margin:0 auto 10px auto;"));
        let html = card.render(&Values::new().with("height", "150"));
        assert!(html.contains("height:150px;vertical-align:middle;"));
    }

    #[test]
    fn image_header_shades_photo() {
        let html = card("header-image").render_defaults();
        assert!(html.contains("background:rgba(0,0,0,0.4);"));
        assert!(html.contains("height:200px;"));
        assert!(html.contains(r#"data-field="image""#));
        let html = card("header-image").render(&Values::new().with("height", "10"));
        assert!(html.contains("height:40px;"));
    }

    #[test]
    fn plain_text_headers() {
        assert!(card("header-slim").render_defaults().contains("padding:16px 16px;text-align:center;"));
        let html = card("header-left").render_defaults();
        assert!(html.contains("text-align:left;"));
        assert!(html.contains("News &amp; updates"));
        let html = card("header-hero").render_defaults();
        assert!(html.contains("padding:26px 20px;text-align:center;"));
        assert!(html.contains("Book now</a>"));
    }
}
