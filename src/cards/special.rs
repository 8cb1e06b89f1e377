//! Testimonials, quotes, button and separator cards, and the cards whose
//! colors and sizes are editable fields.

use super::parts::{
    ACCENT, INK, Panel, RED, SAND, WHITE, grid, heading, image, nth, nth_infix, styled_link,
};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::clean_color;
use crate::escape::text;
use crate::numeric::{clamped_int, parse_int};
use crate::rich_text::{multiline, rich};
use crate::values::Values;
use maud::{Markup, html};

const MAX_RATING: i64 = 5;
const BUTTONS: usize = 3;
const SECTIONS: usize = 3;
const MIN_FONT_SIZE: i64 = 8;
const MAX_FONT_SIZE: i64 = 96;

const STYLE_BODY: &str = "Pick the sizes and colors that suit your message.";

/// Per-slot button colors: fallbacks in the button block, fixed in the
/// multi-button card.
const BUTTON_COLORS: [&str; BUTTONS] = [ACCENT, RED, INK];

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "testimonial",
            "Testimonial",
            "special",
            "A quote from a visitor with a star rating.",
            vec![
                FieldSchema::textarea("quote", "Quote", "The best evening out we've had all year!"),
                FieldSchema::text("author", "Name", "Sam, regular visitor"),
                FieldSchema::text("rating", "Stars (0-5)", "5"),
            ],
            testimonial,
        ),
        CardDefinition::new(
            "special-testimonial-compact",
            "Compact testimonial",
            "special",
            "A short quote with a thin accent bar.",
            vec![
                FieldSchema::textarea("quote", "Quote", "Friendly staff and great seats."),
                FieldSchema::text("author", "Name", "Alex"),
            ],
            testimonial_compact,
        ),
        CardDefinition::new(
            "customizable-text-card",
            "Customizable text card",
            "special",
            "Title and text with editable sizes and colors.",
            text_card_fields("Your own style", STYLE_BODY),
            customizable_text_card,
        ),
        CardDefinition::new(
            "customizable-image-card",
            "Customizable image card",
            "special",
            "Image, title, text and button with editable sizes and colors.",
            image_card_fields(),
            customizable_image_card,
        ),
        CardDefinition::new(
            "multi-button-block",
            "Button block",
            "special",
            "Up to three buttons side by side, each with its own color.",
            multi_button_fields(),
            multi_button_block,
        ),
        CardDefinition::new(
            "separator-block",
            "Sections with separators",
            "special",
            "Three text sections divided by thin lines.",
            separator_fields(),
            separator_block,
        ),
        CardDefinition::new(
            "customizable-card",
            "Customizable card",
            "special",
            "A card with adjustable font sizes and colors.",
            text_card_fields("Your title here", "Your text here."),
            customizable_text_card,
        ),
        CardDefinition::new(
            "quote-card",
            "Quote card",
            "special",
            "An inspiring quote and its author.",
            vec![
                FieldSchema::textarea(
                    "quote",
                    "Quote",
                    "Life is like riding a bicycle: to keep your balance you must keep moving.",
                ),
                FieldSchema::text("author", "Author", "Albert Einstein"),
            ],
            quote_card,
        ),
        CardDefinition::new(
            "two-col",
            "Two columns",
            "special",
            "A card with two columns for extra information.",
            vec![
                FieldSchema::text("title", "Title", "Topic"),
                FieldSchema::text("leftHeading", "Left heading", "Left"),
                FieldSchema::textarea("leftText", "Left text", "Left column text."),
                FieldSchema::text("rightHeading", "Right heading", "Right"),
                FieldSchema::textarea("rightText", "Right text", "Right column text."),
            ],
            two_col,
        ),
        CardDefinition::new(
            "multi-button-card",
            "Card with buttons",
            "special",
            "A card with up to three buttons below the text.",
            vec![
                FieldSchema::text("title", "Title", "Card title"),
                FieldSchema::textarea("body", "Text", "Add your description here."),
                FieldSchema::text("button1Label", "Button 1 text", "More info"),
                FieldSchema::text("button1Link", "Button 1 link", "#"),
                FieldSchema::text("button2Label", "Button 2 text", ""),
                FieldSchema::text("button2Link", "Button 2 link", ""),
                FieldSchema::text("button3Label", "Button 3 text", ""),
                FieldSchema::text("button3Link", "Button 3 link", ""),
            ],
            multi_button_card,
        ),
        CardDefinition::new(
            "separator-card",
            "Card with separators",
            "special",
            "Several text blocks divided by lines.",
            vec![
                FieldSchema::text("title", "Title", "Topics"),
                FieldSchema::textarea("text1", "Text 1", "First paragraph."),
                FieldSchema::textarea("text2", "Text 2", "Second paragraph."),
                FieldSchema::textarea("text3", "Text 3", "Third paragraph."),
            ],
            separator_card,
        ),
    ]
}

fn stars(rating: i64) -> String {
    "★".repeat(usize::try_from(rating).unwrap_or(0))
}

/// Stars are the rating clamped to 0..=5; no number means no stars.
fn testimonial(v: &Values) -> Markup {
    let rating = parse_int(v.get("rating")).unwrap_or(0).clamp(0, MAX_RATING);
    Panel::on(SAND).render(html! {
        div style="font-size:20px;color:#b48a19;margin-bottom:8px;letter-spacing:2px;" { (stars(rating)) }
        div style="font-style:italic;font-size:16px;line-height:1.6;color:#2b2b2b;margin-bottom:10px;" {
            "\u{201c}" (multiline(v.get("quote"))) "\u{201d}"
        }
        div style="font-weight:700;font-size:14px;color:#2b2b2b;" { "— " (text(v.get("author"))) }
    })
}

fn testimonial_compact(v: &Values) -> Markup {
    Panel::white().render(html! {
        div style="border-left:4px solid #b48a19;padding-left:12px;" {
            div style="font-style:italic;font-size:15px;line-height:1.5;color:#2b2b2b;margin-bottom:6px;" {
                (multiline(v.get("quote")))
            }
            div style="font-weight:600;font-size:13px;color:#666666;" { "— " (text(v.get("author"))) }
        }
    })
}

fn text_card_fields(title: &str, body: &str) -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("title", "Title", title),
        FieldSchema::textarea("body", "Text", body),
        FieldSchema::text("titleSize", "Title size (px)", "22"),
        FieldSchema::text("bodySize", "Text size (px)", "14"),
        FieldSchema::text("titleColor", "Title color", INK),
        FieldSchema::text("bodyColor", "Text color", INK),
        FieldSchema::text("bgColor", "Background color", "#f9f7f2"),
    ]
}

/// Size and color fields shared by the customizable cards.
struct Custom {
    title_size: i64,
    body_size: i64,
    title_color: String,
    body_color: String,
    background: String,
}

impl Custom {
    fn from_values(v: &Values) -> Self {
        Self {
            title_size: clamped_int(v.get("titleSize"), 22, MIN_FONT_SIZE, MAX_FONT_SIZE),
            body_size: clamped_int(v.get("bodySize"), 14, MIN_FONT_SIZE, MAX_FONT_SIZE),
            title_color: clean_color(v.get("titleColor"), INK),
            body_color: clean_color(v.get("bodyColor"), INK),
            background: clean_color(v.get("bgColor"), "#f9f7f2"),
        }
    }

    fn title(&self, value: &str) -> Markup {
        heading(
            value,
            &format!(
                "font-size:{}px;line-height:1.3;color:{};margin-bottom:8px;",
                self.title_size, self.title_color
            ),
        )
    }

    fn body(&self, value: &str, spacing: &str) -> Markup {
        html! {
            div style=(format!(
                "font-weight:400;font-size:{}px;line-height:1.5;color:{};{spacing}",
                self.body_size, self.body_color
            )) {
                (rich(value))
            }
        }
    }
}

fn customizable_text_card(v: &Values) -> Markup {
    let custom = Custom::from_values(v);
    Panel::on(&custom.background).render(html! {
        (custom.title(v.get("title")))
        (custom.body(v.get("body"), ""))
    })
}

fn image_card_fields() -> Vec<FieldSchema> {
    let mut fields = vec![FieldSchema::text(
        "image",
        "Image URL",
        "https://images.example.com/cards/lobby.jpg",
    )];
    fields.extend(text_card_fields("Your own style", STYLE_BODY));
    fields.extend([
        FieldSchema::text("buttonLabel", "Button text", "Read more"),
        FieldSchema::text("buttonLink", "Button link", "#"),
        FieldSchema::text("buttonColor", "Button color", ACCENT),
        FieldSchema::text("buttonTextColor", "Button text color", WHITE),
    ]);
    fields
}

/// The button text follows the body size but never drops below 14px.
fn customizable_image_card(v: &Values) -> Markup {
    let custom = Custom::from_values(v);
    let button_style = format!(
        "display:inline-block;padding:10px 18px;background:{};color:{};border-radius:999px;font-weight:700;font-size:{}px;text-decoration:none;",
        clean_color(v.get("buttonColor"), ACCENT),
        clean_color(v.get("buttonTextColor"), WHITE),
        custom.body_size.max(14),
    );
    Panel::on(&custom.background).padding("0").render(html! {
        (image(v, "image", v.get("title"), "display:block;width:100%;height:200px;object-fit:cover;"))
        div style="padding:18px 20px 20px;" {
            (custom.title(v.get("title")))
            (custom.body(v.get("body"), "margin-bottom:12px;"))
            @if v.has("buttonLabel") {
                (styled_link(v.get("buttonLink"), v.get("buttonLabel"), &button_style))
            }
        }
    })
}

fn multi_button_fields() -> Vec<FieldSchema> {
    let labels = ["Tickets", "Programme", "Contact"];
    let mut fields = vec![FieldSchema::text("bgColor", "Background color", "#f9f7f2")];
    for (i, (label, color)) in (1..=BUTTONS).zip(labels.into_iter().zip(BUTTON_COLORS)) {
        fields.push(FieldSchema::text(&format!("button{i}Label"), &format!("Button {i} text"), label));
        fields.push(FieldSchema::text(&format!("button{i}Link"), &format!("Button {i} link"), "#"));
        fields.push(FieldSchema::text(&format!("button{i}Color"), &format!("Button {i} color"), color));
    }
    fields
}

/// Buttons without a label are left out.
fn multi_button_block(v: &Values) -> Markup {
    let background = clean_color(v.get("bgColor"), "#f9f7f2");
    Panel::on(&background).render(html! {
        div style="text-align:center;" {
            @for (i, fallback) in (1..=BUTTONS).zip(BUTTON_COLORS) {
                @let label = nth_infix(v, "button", i, "Label");
                @if !label.is_empty() {
                    @let color = clean_color(nth_infix(v, "button", i, "Color"), fallback);
                    (styled_link(
                        nth_infix(v, "button", i, "Link"),
                        label,
                        &format!(
                            "display:inline-block;margin:4px 6px;padding:10px 18px;background:{color};color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;"
                        ),
                    ))
                }
            }
        }
    })
}

fn separator_fields() -> Vec<FieldSchema> {
    let mut fields = Vec::with_capacity(SECTIONS * 2);
    for i in 1..=SECTIONS {
        fields.push(FieldSchema::text(&format!("title{i}"), &format!("Section {i} title"), &format!("Section {i}")));
        fields.push(FieldSchema::textarea(&format!("text{i}"), &format!("Section {i} text"), "A few lines about this topic."));
    }
    fields
}

fn separator_block(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        @for i in 1..=SECTIONS {
            @if i > 1 {
                tr {
                    td style="padding:0 20px;" {
                        hr style="border:0;border-top:1px solid #e0d8c3;margin:0;";
                    }
                }
            }
            tr {
                td style="padding:16px 20px;" {
                    (heading(nth(v, "title", i), "font-size:18px;color:#2b2b2b;margin-bottom:6px;"))
                    div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                        (rich(nth(v, "text", i)))
                    }
                }
            }
        }
    })
}

/// The quote is plain text: no markup and no line breaks.
fn quote_card(v: &Values) -> Markup {
    Panel::on(SAND).padding("24px").render(html! {
        div style="font-size:40px;color:#b48a19;line-height:1;margin-bottom:8px;" { "\"" }
        div style="font-style:italic;font-size:18px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
            (text(v.get("quote")))
        }
        div style="font-weight:600;font-size:14px;color:#2b2b2b;" { "— " (text(v.get("author"))) }
    })
}

fn two_col(v: &Values) -> Markup {
    let column = |side: &str, padding: &str| {
        html! {
            td width="50%" style=(format!("width:50%;{padding}vertical-align:top;")) {
                (column_heading(v.get(&format!("{side}Heading"))))
                div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                    (multiline(v.get(&format!("{side}Text"))))
                }
            }
        }
    };
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            tr {
                (column("left", "padding-right:10px;"))
                (column("right", "padding-left:10px;"))
            }
        }))
    })
}

fn column_heading(value: &str) -> Markup {
    html! { div style="font-weight:700;font-size:16px;color:#2b2b2b;margin-bottom:4px;" { (text(value)) } }
}

/// Fixed gold, red and ink buttons; a button without a label is left out and
/// one without a link points at `#`.
fn multi_button_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:8px;"))
        div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;margin-bottom:12px;" {
            (rich(v.get("body")))
        }
        div style="display:flex;flex-wrap:wrap;align-items:center;" {
            @for (i, color) in (1..=BUTTONS).zip(BUTTON_COLORS) {
                @let label = nth_infix(v, "button", i, "Label");
                @if !label.is_empty() {
                    @let link = nth_infix(v, "button", i, "Link");
                    (styled_link(
                        if link.is_empty() { "#" } else { link },
                        label,
                        &format!(
                            "display:inline-block;margin-right:8px;margin-top:8px;padding:8px 16px;background:{color};color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;"
                        ),
                    ))
                }
            }
        }
    })
}

/// Empty blocks are skipped. The first two blocks are always followed by a
/// rule, the third never is.
fn separator_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:12px;"))
        @for i in 1..=SECTIONS {
            @let block = nth(v, "text", i);
            @if !block.is_empty() {
                div style="padding:12px 0;" {
                    div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;" { (multiline(block)) }
                }
                @if i < SECTIONS {
                    hr style="border:0;margin:0;";
                }
            }
        }
    })
}
