//! Plain text cards: a title and a body on one surface.

use super::parts::{ACCENT, INK, Panel, Shadow, button, heading};
use crate::card::{CardDefinition, FieldSchema};
use crate::escape::text;
use crate::rich_text::rich;
use crate::values::Values;
use maud::{Markup, html};

const LIST_ITEMS: usize = 3;

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "simple-text",
            "Simple text",
            "basic",
            "A title with a paragraph of text. Supports *italics* and links.",
            vec![
                FieldSchema::text("title", "Title", "Welcome to our newsletter"),
                FieldSchema::textarea(
                    "body",
                    "Text",
                    "This month we have *plenty* of news.\nRead more on [our website](https://www.example.com).",
                ),
            ],
            simple_text,
        ),
        CardDefinition::new(
            "gold-card",
            "Gold card",
            "basic",
            "White text on the gold accent background.",
            vec![
                FieldSchema::text("title", "Title", "Something special"),
                FieldSchema::textarea("body", "Text", "A short announcement that deserves attention."),
            ],
            gold_card,
        ),
        CardDefinition::new(
            "dark-card",
            "Dark card",
            "basic",
            "Light text on a dark background with a button.",
            vec![
                FieldSchema::text("title", "Title", "Late night screening"),
                FieldSchema::textarea("body", "Text", "Join us after hours for a special showing."),
                FieldSchema::text("buttonLabel", "Button text", "Book now"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            dark_card,
        ),
        CardDefinition::new(
            "minimal-card",
            "Minimal card",
            "basic",
            "White card without a shadow.",
            vec![
                FieldSchema::text("title", "Title", "Quick note"),
                FieldSchema::textarea("body", "Text", "A short message without decoration."),
            ],
            minimal_card,
        ),
        CardDefinition::new(
            "list-card",
            "List card",
            "basic",
            "A title with up to three bullet points.",
            vec![
                FieldSchema::text("title", "Title", "This week"),
                FieldSchema::text("item1", "Item 1", "New films every Wednesday"),
                FieldSchema::text("item2", "Item 2", "Kids club on Saturday"),
                FieldSchema::text("item3", "Item 3", "Free parking after 6 pm"),
            ],
            list_card,
        ),
    ]
}

fn body_style(color: &str) -> String {
    format!("font-weight:400;font-size:14px;line-height:1.5;color:{color};")
}

fn simple_text(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
        div style=(body_style(INK)) { (rich(v.get("body"))) }
    })
}

fn gold_card(v: &Values) -> Markup {
    Panel::on(ACCENT).render(html! {
        (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#ffffff;margin-bottom:8px;"))
        div style=(body_style("#ffffff")) { (rich(v.get("body"))) }
    })
}

fn dark_card(v: &Values) -> Markup {
    Panel::on(INK).render(html! {
        (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#ffffff;margin-bottom:8px;"))
        div style=(format!("{}margin-bottom:14px;", body_style("#eeeeee"))) { (rich(v.get("body"))) }
        @if !v.get("buttonLabel").is_empty() {
            (button(v.get("buttonLink"), v.get("buttonLabel")))
        }
    })
}

fn minimal_card(v: &Values) -> Markup {
    Panel::white().shadow(Shadow::None).render(html! {
        (heading(v.get("title"), "font-size:18px;line-height:1.3;color:#2b2b2b;margin-bottom:6px;"))
        div style=(body_style(INK)) { (rich(v.get("body"))) }
    })
}

fn list_card(v: &Values) -> Markup {
    let items: Vec<&str> = (1..=LIST_ITEMS)
        .map(|i| super::parts::nth(v, "item", i))
        .filter(|item| !item.is_empty())
        .collect();
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
        ul style="margin:0;padding-left:20px;color:#2b2b2b;font-size:14px;line-height:1.6;" {
            @for item in &items {
                li style="margin-bottom:4px;" { (text(item)) }
            }
        }
    })
}
