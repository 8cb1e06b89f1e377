//! Content blocks: paragraphs, quotes, callouts and lists.
//!
//! These sit between the bigger cards of a newsletter, so most use the
//! white surface with a soft shadow and tighter padding.

use super::parts::{
    CARD_GUTTER, Panel, RED, Shadow, grid, heading, linked, nbsp, nth, shell, still,
};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::clean_color;
use crate::escape::text;
use crate::rich_text::{multiline, rich};
use crate::values::Values;
use maud::{Markup, html};

const BULLETS: usize = 3;
const NEWS_ITEMS: usize = 8;

const PARAGRAPH: &str = "font-weight:400;font-size:14px;line-height:1.6;color:#2b2b2b;";

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "content-basic",
            "Content: basic paragraph",
            "content",
            "A paragraph with an optional emoji or icon. Supports *italics* and [links](url).",
            vec![
                FieldSchema::text("icon", "Emoji or icon (optional)", "✨"),
                FieldSchema::text("title", "Heading", "Ladies night is coming!"),
                FieldSchema::textarea(
                    "body",
                    "Text (*text* for italics, [text](link) for links)",
                    "Next Wednesday is the *ladies night*. The perfect evening out with your mother, sister or best friend. [Book here](https://www.example.com).",
                ),
            ],
            content_basic,
        ),
        CardDefinition::new(
            "content-accent-title",
            "Content: accent heading",
            "content",
            "A paragraph under a gold uppercase heading.",
            vec![
                FieldSchema::text("title", "Heading", "News"),
                FieldSchema::textarea(
                    "body",
                    "Text",
                    "Write your main text here. This is the body of your newsletter.",
                ),
            ],
            content_accent_title,
        ),
        CardDefinition::new(
            "content-quote",
            "Content: quote",
            "content",
            "A quotation with its author or source.",
            vec![
                FieldSchema::textarea("quote", "Quote", "“A day full of experiences. We will be back!”"),
                FieldSchema::text("author", "Author or source", "Visitor"),
            ],
            content_quote,
        ),
        CardDefinition::new(
            "content-callout",
            "Content: callout with icon",
            "content",
            "An info box with an icon on the left.",
            vec![
                FieldSchema::text("icon", "Icon or emoji", "ℹ️"),
                FieldSchema::text("title", "Heading", "Important"),
                FieldSchema::textarea("body", "Text", "A little extra information."),
            ],
            content_callout,
        ),
        CardDefinition::new(
            "content-list",
            "Content: bullet list",
            "content",
            "Text with up to three bullets.",
            vec![
                FieldSchema::text("title", "Heading", "What you get"),
                FieldSchema::text("item1", "Point 1", "First benefit"),
                FieldSchema::text("item2", "Point 2", "Second benefit"),
                FieldSchema::text("item3", "Point 3", "Third benefit"),
            ],
            content_list,
        ),
        CardDefinition::new(
            "content-emphasis",
            "Content: lead line",
            "content",
            "A bold first line followed by the body.",
            vec![
                FieldSchema::text("lead", "Lead line", "Tip:"),
                FieldSchema::textarea("body", "Text", "Use our packages for extra savings."),
            ],
            content_emphasis,
        ),
        CardDefinition::new(
            "content-highlight",
            "Content: highlight",
            "content",
            "A text block on a soft yellow highlight.",
            vec![FieldSchema::textarea(
                "body",
                "Text",
                "An important announcement for all members.",
            )],
            content_highlight,
        ),
        CardDefinition::new(
            "content-smallprint",
            "Content: small print",
            "content",
            "Smaller type for terms and footnotes.",
            vec![FieldSchema::textarea("body", "Text", "Terms and conditions apply.")],
            content_smallprint,
        ),
        CardDefinition::new(
            "content-news-list",
            "Content: news digest",
            "content",
            "Up to eight news items (emoji, title, text) in one card.",
            news_fields(),
            content_news_list,
        ),
        CardDefinition::new(
            "content-paragraphs-2",
            "Content: two paragraphs",
            "content",
            "Two paragraphs with the standard styling. Supports italics and links.",
            vec![
                FieldSchema::text("title", "Heading (optional)", "About us"),
                FieldSchema::textarea(
                    "p1",
                    "Paragraph 1",
                    "First paragraph with *italics* and a [link](https://www.example.com).",
                ),
                FieldSchema::textarea("p2", "Paragraph 2", "Second paragraph with more detail."),
            ],
            content_paragraphs,
        ),
        CardDefinition::new(
            "content-emoji-bullets",
            "Content: emoji bullets",
            "content",
            "A short bullet list with emoji icons.",
            vec![
                FieldSchema::text("title", "Heading (optional)", "Why choose us?"),
                FieldSchema::text("b1", "Bullet 1", "✨ A great day out for the whole family"),
                FieldSchema::text("b2", "Bullet 2", "🎬 The latest films on the big screen"),
                FieldSchema::text("b3", "Bullet 3", "🍔 Good food and dinner packages"),
            ],
            content_emoji_bullets,
        ),
        CardDefinition::new(
            "content-image-160x140-link",
            "Content: linked image 160×140",
            "content",
            "A fixed 160×140 image that links somewhere.",
            vec![
                FieldSchema::text("image", "Image URL", "https://images.example.com/cards/restaurant.jpg"),
                FieldSchema::text("alt", "Alt text", "Image"),
                FieldSchema::text("link", "Link URL", "#"),
            ],
            content_image_link,
        ),
        CardDefinition::new(
            "content-image-left",
            "Content: icon left of heading",
            "content",
            "A heading and text with a small icon on the left.",
            vec![
                FieldSchema::text("icon", "Emoji or icon", "📣"),
                FieldSchema::text("title", "Heading", "Announcement"),
                FieldSchema::textarea("body", "Text", "The main message goes here."),
            ],
            content_image_left,
        ),
        CardDefinition::new(
            "boxed-callout",
            "Callout box",
            "style",
            "A subtle framed box for short notices.",
            vec![FieldSchema::textarea(
                "text",
                "Text",
                "Please note: different opening hours during the holidays.",
            )],
            boxed_callout,
        ),
        CardDefinition::new(
            "news-header-accent",
            "News header with accent",
            "basic",
            "A centered title, a colored accent line and a description, for news sections.",
            vec![
                FieldSchema::text("title", "Title", "News"),
                FieldSchema::textarea("description", "Description", "Read the latest news and see what's on."),
                FieldSchema::text("accentColor", "Accent color", RED),
            ],
            news_header_accent,
        ),
    ]
}

fn news_fields() -> Vec<FieldSchema> {
    let samples = [
        ("New this month", "Three premieres and a family matinee."),
        ("Opening hours", "We are open every day from 10 am."),
    ];
    let mut fields = vec![FieldSchema::text("titleMain", "Main heading (optional)", "")];
    for i in 1..=NEWS_ITEMS {
        let (title, body) = samples.get(i - 1).copied().unwrap_or(("", ""));
        fields.push(FieldSchema::text(&format!("emoji{i}"), &format!("Emoji {i}"), "🔹"));
        fields.push(FieldSchema::text(&format!("title{i}"), &format!("Title {i}"), title));
        fields.push(FieldSchema::textarea(&format!("body{i}"), &format!("Text {i}"), body));
    }
    fields
}

fn content_basic(v: &Values) -> Markup {
    let icon = v.get("icon");
    let title = v.get("title");
    Panel::white().render(html! {
        @if !title.is_empty() {
            div style="font-weight:800;font-size:16px;line-height:1.4;color:#2b2b2b;margin-bottom:6px;" {
                @if !icon.is_empty() {
                    span style="margin-right:6px;" { (text(icon)) }
                }
                (text(title))
            }
        }
        div style=(PARAGRAPH) { (rich(v.get("body"))) }
    })
}

fn content_accent_title(v: &Values) -> Markup {
    Panel::cream().shadow(Shadow::Medium).padding("16px 18px").render(html! {
        (heading(v.get("title"), "font-size:14px;letter-spacing:.06em;text-transform:uppercase;color:#b48a19;margin-bottom:6px;"))
        div style=(PARAGRAPH) { (rich(v.get("body"))) }
    })
}

fn content_quote(v: &Values) -> Markup {
    Panel::white().render(html! {
        div style="font-weight:400;font-size:14px;line-height:1.6;color:#2b2b2b;font-style:italic;margin-bottom:6px;" {
            (multiline(v.get("quote")))
        }
        div style="font-weight:700;font-size:13px;color:#2b2b2b;" { "— " (text(v.get("author"))) }
    })
}

fn content_callout(v: &Values) -> Markup {
    Panel::on("#fff7e6").shadow(Shadow::Soft).padding("14px 18px").render(html! {
        table role="presentation" cellpadding="0" cellspacing="0" style="border-collapse:collapse;" {
            tbody {
                tr {
                    td style="width:28px;padding-right:10px;vertical-align:top;font-size:18px;" { (text(v.get("icon"))) }
                    td {
                        div style="font-weight:700;font-size:14px;color:#2b2b2b;margin-bottom:4px;" { (text(v.get("title"))) }
                        div style=(PARAGRAPH) { (rich(v.get("body"))) }
                    }
                }
            }
        }
    })
}

fn content_list(v: &Values) -> Markup {
    let items = (1..=BULLETS).map(|i| nth(v, "item", i)).filter(|t| !t.is_empty());
    Panel::white().render(html! {
        div style="font-weight:700;font-size:14px;color:#2b2b2b;margin-bottom:6px;" { (text(v.get("title"))) }
        ul style="padding-left:18px;margin:0;font-weight:400;font-size:14px;line-height:1.6;color:#2b2b2b;" {
            @for item in items {
                li style="margin-bottom:4px;" { (text(item)) }
            }
        }
    })
}

fn content_emphasis(v: &Values) -> Markup {
    Panel::white().render(html! {
        (heading(v.get("lead"), "font-size:16px;color:#2b2b2b;margin-bottom:4px;"))
        div style=(PARAGRAPH) { (rich(v.get("body"))) }
    })
}

fn content_highlight(v: &Values) -> Markup {
    Panel::on("#fff9e6").shadow(Shadow::Soft).padding("16px 18px").render(html! {
        div style=(PARAGRAPH) { (rich(v.get("body"))) }
    })
}

fn content_smallprint(v: &Values) -> Markup {
    Panel::white().padding("14px 18px").render(html! {
        div style="font-weight:400;font-size:12px;line-height:1.5;color:#2b2b2b;" { (rich(v.get("body"))) }
    })
}

struct NewsItem<'a> {
    emoji: &'a str,
    title: &'a str,
    body: &'a str,
}

/// News items in field order; an item needs a title or a body.
fn news_items(v: &Values) -> Vec<NewsItem<'_>> {
    (1..=NEWS_ITEMS)
        .map(|i| NewsItem {
            emoji: nth(v, "emoji", i),
            title: nth(v, "title", i),
            body: nth(v, "body", i),
        })
        .filter(|item| !item.title.is_empty() || !item.body.is_empty())
        .collect()
}

fn content_news_list(v: &Values) -> Markup {
    let title_main = v.get("titleMain");
    Panel::white().render(html! {
        @if !title_main.is_empty() {
            (heading(title_main, "font-size:18px;color:#2b2b2b;margin-bottom:8px;"))
        }
        (grid(html! {
            @for item in news_items(v) {
                tr {
                    td style="width:22px;padding-right:8px;vertical-align:top;font-size:16px;line-height:1.2;" { (text(item.emoji)) }
                    td {
                        div style="font-weight:800;font-size:16px;color:#e02020;margin-bottom:4px;" { (text(item.title)) }
                        div style=(PARAGRAPH) { (multiline(item.body)) }
                    }
                }
                tr { td colspan="2" style="height:12px;line-height:12px;font-size:0;" { (nbsp()) } }
            }
        }))
    })
}

fn content_paragraphs(v: &Values) -> Markup {
    let title = v.get("title");
    Panel::white().render(html! {
        @if !title.is_empty() {
            (heading(title, "font-size:18px;color:#2b2b2b;margin-bottom:8px;"))
        }
        div style=(format!("{PARAGRAPH}margin-bottom:12px;")) { (rich(v.get("p1"))) }
        div style=(PARAGRAPH) { (rich(v.get("p2"))) }
    })
}

fn content_emoji_bullets(v: &Values) -> Markup {
    let title = v.get("title");
    let bullets = (1..=BULLETS).map(|i| nth(v, "b", i)).filter(|t| !t.is_empty());
    Panel::cream().shadow(Shadow::Medium).padding("16px 18px").render(html! {
        @if !title.is_empty() {
            (heading(title, "font-size:18px;color:#2b2b2b;margin-bottom:8px;"))
        }
        ul style="margin:0;padding-left:20px;color:#2b2b2b;font-size:14px;line-height:1.6;" {
            @for bullet in bullets {
                li style="margin-bottom:6px;" { (text(bullet)) }
            }
        }
    })
}

fn content_image_link(v: &Values) -> Markup {
    shell(
        CARD_GUTTER,
        linked(
            v.get("link"),
            still(
                v.get("image"),
                v.get("alt"),
                "display:block;width:160px;height:140px;object-fit:cover;border-radius:12px;",
            ),
        ),
    )
}

fn content_image_left(v: &Values) -> Markup {
    Panel::white().render(html! {
        table role="presentation" cellpadding="0" cellspacing="0" style="border-collapse:collapse;" {
            tbody {
                tr {
                    td style="width:26px;padding-right:10px;vertical-align:top;font-size:18px;" { (text(v.get("icon"))) }
                    td {
                        (heading(v.get("title"), "font-size:16px;line-height:1.4;color:#2b2b2b;margin-bottom:6px;"))
                        div style=(PARAGRAPH) { (rich(v.get("body"))) }
                    }
                }
            }
        }
    })
}

fn boxed_callout(v: &Values) -> Markup {
    Panel::on("#fff7e6").shadow(Shadow::Medium).padding("16px 20px").render(html! {
        div style="font-weight:600;font-size:14px;color:#2b2b2b;line-height:1.5;" { (multiline(v.get("text"))) }
    })
}

/// The accent line takes any hex color; anything else draws it red.
fn news_header_accent(v: &Values) -> Markup {
    let accent = clean_color(v.get("accentColor"), RED);
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:20px;text-align:center;" {
                h4 style="margin:0;font-size:24px;line-height:1.4;text-align:center;letter-spacing:0.5px;color:#000;" {
                    strong { (text(v.get("title"))) }
                }
                div style=(format!("width:100px;height:2px;background:{accent};margin:8px auto 8px auto;border-radius:2px;")) {}
                p style="margin:0;font-size:14px;line-height:1.4;text-align:center;color:#333;" {
                    (rich(v.get("description")))
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CardDefinition {
        cards().into_iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn content_basic_title_block_is_optional() {
        let card = card("content-basic");
        let html = card.render(&Values::new().with("icon", "✨").with("body", "b"));
        assert!(!html.contains("✨"));
        assert!(!html.contains("font-size:16px"));

        let html = card.render(&Values::new().with("icon", "✨").with("title", "T"));
        assert!(html.contains(r#"<span style="margin-right:6px;">✨</span>T</div>"#));
    }

    #[test]
    fn quote_keeps_line_breaks_but_no_markup() {
        let values = Values::new()
            .with("quote", "*a*\nb")
            .with("author", "Ann");
        let html = card("content-quote").render(&values);
        assert!(html.contains("*a*<br>b"));
        assert!(html.contains("— Ann</div>"));
    }

    #[test]
    fn news_list_skips_items_without_title_or_body() {
        let values = Values::new()
            .with("emoji1", "🔹")
            .with("emoji2", "X")
            .with("title2", "Second")
            .with("body5", "Fifth body");
        let html = card("content-news-list").render(&values);
        assert_eq!(html.matches("color:#e02020;").count(), 2);
        assert!(!html.contains("🔹"));
        assert!(html.find("Second").unwrap() < html.find("Fifth body").unwrap());
    }

    #[test]
    fn news_list_reads_all_eight_items() {
        let values = Values::new().with("title8", "Last").with("title9", "Too far");
        let html = card("content-news-list").render(&values);
        assert!(html.contains("Last"));
        assert!(!html.contains("Too far"));
    }

    #[test]
    fn news_list_main_heading_optional() {
        let card = card("content-news-list");
        assert!(!card.render_defaults().contains("font-size:18px"));
        let html = card.render(&Values::new().with("titleMain", "Digest"));
        assert!(html.contains(">Digest</div>"));
    }

    #[test]
    fn callout_and_highlight_backgrounds() {
        assert!(card("content-callout").render_defaults().contains("background:#fff7e6;"));
        assert!(card("content-highlight").render_defaults().contains("background:#fff9e6;"));
    }

    #[test]
    fn emoji_bullets_filter_empty() {
        let html = card("content-emoji-bullets").render(&Values::new().with("b2", "only"));
        assert_eq!(html.matches("<li ").count(), 1);
    }

    #[test]
    fn linked_image_sits_in_a_card_table() {
        let html = card("content-image-160x140-link").render(&Values::new().with("link", "https://x.test"));
        assert!(html.starts_with("<table "));
        assert!(html.contains(r#"<a href="https://x.test""#));
        assert!(html.contains("width:160px;height:140px;"));
    }

    #[test]
    fn icon_left_puts_icon_in_its_own_cell() {
        let html = card("content-image-left").render_defaults();
        assert!(html.contains("font-size:18px;\">📣</td>"));
        assert!(html.contains(">Announcement</div>"));
    }

    #[test]
    fn boxed_callout_breaks_lines_only() {
        let html = card("boxed-callout").render(&Values::new().with("text", "a\n*b*"));
        assert!(html.contains("a<br>*b*"));
        assert!(html.contains("background:#fff7e6;"));
    }

    #[test]
    fn news_header_accent_color_is_checked() {
        let html = card("news-header-accent").render_defaults();
        assert!(html.contains("height:2px;background:#e02020;"));
        let html = card("news-header-accent").render(&Values::new().with("accentColor", "#123"));
        assert!(html.contains("background:#123;"));
        let html = card("news-header-accent").render(&Values::new().with("accentColor", "red;x:y"));
        assert!(html.contains("height:2px;background:#e02020;"));
    }
}
