//! Calls to action: buttons, offers and event listings.

use super::parts::{
    ACCENT, BUTTON_STYLE, INK, Panel, RED, Shadow, button, heading, icon, nth_infix, styled_link,
};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::clean_color;
use crate::escape::text;
use crate::rich_text::{multiline, rich};
use crate::values::Values;
use maud::{Markup, html};

const PROGRAM_ROWS: usize = 3;
const PREMIERES: usize = 10;

/// Venue tags that are badged in red instead of gold. Matched against the
/// lowercased tag, with either apostrophe.
const RED_VENUE_TAGS: [&str; 2] = ["h'wijk", "h’wijk"];

const TICKET_ICON: &str = "https://cdn.example.com/icons/ticket.svg";

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "cta-single-button",
            "CTA: single button",
            "cta",
            "A prominent button with a short explanation.",
            vec![
                FieldSchema::text("title", "Title", "Book your tickets"),
                FieldSchema::textarea("body", "Text", "Enjoy an unforgettable evening at the cinema."),
                FieldSchema::text("label", "Button text", "See showtimes"),
                FieldSchema::text("link", "Link", "#"),
            ],
            cta_single_button,
        ),
        CardDefinition::new(
            "cta-double-buttons",
            "CTA: two buttons",
            "cta",
            "Two buttons side by side.",
            vec![
                FieldSchema::text("title", "Title", "Ready to go?"),
                FieldSchema::text("leftLabel", "Left button text", "Plan a visit"),
                FieldSchema::text("leftLink", "Left button link", "#"),
                FieldSchema::text("rightLabel", "Right button text", "Buy tickets"),
                FieldSchema::text("rightLink", "Right button link", "#"),
            ],
            cta_double_buttons,
        ),
        CardDefinition::new(
            "price-card",
            "Price card",
            "cta",
            "An offer with a large price and a button on the gold accent.",
            vec![
                FieldSchema::text("title", "Title", "Special offer"),
                FieldSchema::text("price", "Price", "€19.95"),
                FieldSchema::textarea("body", "Text", "A short description of the offer."),
                FieldSchema::text("buttonLabel", "Button text", "Order now"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            price_card,
        ),
        CardDefinition::new(
            "event-card",
            "Event card",
            "cta",
            "An event with date, time, description and up to three program items.",
            event_fields(),
            event_card,
        ),
        CardDefinition::new(
            "coupon-card",
            "Coupon card",
            "cta",
            "A red offer card with a coupon code.",
            vec![
                FieldSchema::text("title", "Title", "Special offer"),
                FieldSchema::text("price", "Price or discount", "€10 off"),
                FieldSchema::textarea("body", "Description", "A short description of the offer."),
                FieldSchema::text("code", "Coupon code", "SAVE10"),
                FieldSchema::text("buttonLabel", "Button text", "Order now"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            coupon_card,
        ),
        CardDefinition::new(
            "event-premieres-list",
            "Event: premieres list",
            "cta",
            "Up to ten premieres with venue tags, ticket link and date line.",
            premiere_fields(),
            event_premieres_list,
        ),
    ]
}

fn cta_single_button(v: &Values) -> Markup {
    Panel::white().render(html! {
        (heading(v.get("title"), "font-size:18px;color:#2b2b2b;margin-bottom:8px;"))
        div style="font-weight:400;font-size:14px;line-height:1.6;color:#2b2b2b;margin-bottom:12px;" {
            (rich(v.get("body")))
        }
        (button(v.get("link"), v.get("label")))
    })
}

fn cta_double_buttons(v: &Values) -> Markup {
    let left = format!(
        "{}margin-right:8px;",
        BUTTON_STYLE.replace("background:#b48a19;", &format!("background:{INK};"))
    );
    Panel::cream().shadow(Shadow::Medium).padding("16px 18px").render(html! {
        (heading(v.get("title"), "font-size:18px;color:#2b2b2b;margin-bottom:12px;"))
        div {
            (styled_link(v.get("leftLink"), v.get("leftLabel"), &left))
            (button(v.get("rightLink"), v.get("rightLabel")))
        }
    })
}

fn price_card(v: &Values) -> Markup {
    Panel::on(ACCENT).render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#ffffff;margin-bottom:4px;"))
        div style="font-weight:700;font-size:36px;line-height:1.1;color:#ffffff;margin-bottom:8px;" {
            (text(v.get("price")))
        }
        div style="font-weight:400;font-size:14px;line-height:1.5;color:#ffffff;margin-bottom:12px;" {
            (multiline(v.get("body")))
        }
        (styled_link(
            v.get("buttonLink"),
            v.get("buttonLabel"),
            "display:inline-block;padding:10px 18px;background:#2b2b2b;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;",
        ))
    })
}

fn event_fields() -> Vec<FieldSchema> {
    let program = [("15:00", "Doors open"), ("16:00", "Main act"), ("17:00", "Closing")];
    let mut fields = vec![
        FieldSchema::text("title", "Title", "Summer event"),
        FieldSchema::text("date", "Date", "1 July 2026"),
        FieldSchema::text("time", "Time", "15:00 – 18:00"),
        FieldSchema::textarea("description", "Description", "A description of the event."),
    ];
    for (i, (time, desc)) in (1..=PROGRAM_ROWS).zip(program) {
        fields.push(FieldSchema::text(
            &format!("item{i}Time"),
            &format!("Program {i} time"),
            time,
        ));
        fields.push(FieldSchema::text(
            &format!("item{i}Desc"),
            &format!("Program {i} description"),
            desc,
        ));
    }
    fields.push(FieldSchema::text("buttonLabel", "Button text", "More info"));
    fields.push(FieldSchema::text("buttonLink", "Button link", "#"));
    fields
}

struct ProgramRow<'a> {
    time: &'a str,
    desc: &'a str,
}

fn program_rows(v: &Values) -> Vec<ProgramRow<'_>> {
    (1..=PROGRAM_ROWS)
        .map(|i| ProgramRow {
            time: nth_infix(v, "item", i, "Time"),
            desc: nth_infix(v, "item", i, "Desc"),
        })
        .filter(|row| !row.time.is_empty() || !row.desc.is_empty())
        .collect()
}

fn event_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#2b2b2b;margin-bottom:4px;"))
        div style="font-weight:600;font-size:14px;color:#b48a19;margin-bottom:8px;" {
            (text(v.get("date"))) " • " (text(v.get("time")))
        }
        div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
            (rich(v.get("description")))
        }
        table role="presentation" cellpadding="0" cellspacing="0" width="100%" style="border-collapse:collapse;margin-bottom:12px;" {
            tbody {
                @for row in program_rows(v) {
                    tr {
                        td style="padding:4px 0;font-weight:600;font-size:14px;color:#2b2b2b;width:80px;" { (text(row.time)) }
                        td style="padding:4px 0;font-weight:400;font-size:14px;color:#2b2b2b;" { (text(row.desc)) }
                    }
                }
            }
        }
        (button(v.get("buttonLink"), v.get("buttonLabel")))
    })
}

fn coupon_card(v: &Values) -> Markup {
    Panel::on("#fdecec").render(html! {
        (heading(v.get("title"), "font-size:22px;color:#e02020;margin-bottom:6px;"))
        (heading(v.get("price"), "font-size:32px;color:#e02020;margin-bottom:4px;"))
        div style="font-weight:400;font-size:14px;color:#2b2b2b;margin-bottom:12px;" { (rich(v.get("body"))) }
        div style="font-weight:700;font-size:18px;color:#2b2b2b;margin-bottom:12px;" {
            "Coupon code: "
            span style="color:#e02020;" { (text(v.get("code"))) }
        }
        (styled_link(
            v.get("buttonLink"),
            v.get("buttonLabel"),
            "display:inline-block;padding:10px 20px;background:#e02020;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;",
        ))
    })
}

fn premiere_fields() -> Vec<FieldSchema> {
    let samples = [
        ("CENTRE", "", "The North Road", "Arthouse", "Tuesday 9 September", "On", "Riverside"),
        ("H'WIJK", "CENTRE", "The Grand Finale", "", "Wednesday 10 September", "From", ""),
        ("CENTRE", "", "Castle of Echoes", "", "Thursday 11 September", "From", "Riverside"),
        ("H'WIJK", "CENTRE", "Robot Chaos", "", "Saturday 13 September", "From", ""),
    ];
    let mut fields = vec![
        FieldSchema::text("titleMain", "Main heading", "PREMIERES NEXT WEEK"),
        FieldSchema::text("accentColor", "Accent color (hex)", "#e02020"),
    ];
    for i in 1..=PREMIERES {
        let (tag1, tag2, title, subtitle, date, prefix, location) =
            samples.get(i - 1).copied().unwrap_or_default();
        let link = if title.is_empty() {
            String::new()
        } else {
            format!("https://tickets.example.com/film/{i}")
        };
        let item = |key: &str, label: &str, default: &str| {
            FieldSchema::text(&format!("{key}_{i}"), &format!("Item {i}: {label}"), default)
        };
        fields.extend([
            item("tag1", "tag 1", tag1),
            item("tag2", "tag 2", tag2),
            item("title", "title", title),
            item("subtitle", "subtitle (optional)", subtitle),
            item("link", "ticket link", link.as_str()),
            item("datePrefix", "date prefix (On/From)", prefix),
            item("dateHighlight", "date (highlighted)", date),
            item("location", "location (optional)", location),
        ]);
    }
    fields
}

struct Premiere<'a> {
    tags: [&'a str; 2],
    title: &'a str,
    subtitle: &'a str,
    link: &'a str,
    date_prefix: &'a str,
    date: &'a str,
    location: &'a str,
}

impl Premiere<'_> {
    fn has_date_line(&self) -> bool {
        !self.date_prefix.is_empty() || !self.date.is_empty() || !self.location.is_empty()
    }
}

/// `<key>_<i>`, the premiere fields' naming.
fn field<'v>(v: &'v Values, key: &str, i: usize) -> &'v str {
    v.get(&format!("{key}_{i}"))
}

/// Premieres in field order; an item needs a title or a ticket link.
fn premieres(v: &Values) -> Vec<Premiere<'_>> {
    (1..=PREMIERES)
        .map(|i| Premiere {
            tags: [field(v, "tag1", i), field(v, "tag2", i)],
            title: field(v, "title", i),
            subtitle: field(v, "subtitle", i),
            link: field(v, "link", i),
            date_prefix: field(v, "datePrefix", i),
            date: field(v, "dateHighlight", i),
            location: field(v, "location", i),
        })
        .filter(|p| !p.title.is_empty() || !p.link.is_empty())
        .collect()
}

fn venue_badge(label: &str) -> Markup {
    let lower = label.to_lowercase();
    let background = if RED_VENUE_TAGS.iter().any(|tag| lower.contains(tag)) {
        RED
    } else {
        ACCENT
    };
    html! {
        span style=(format!("display:inline-block;margin-right:6px;padding:3px 10px;border-radius:999px;background:{background};color:#fff;font-weight:700;font-size:11px;letter-spacing:.05em;text-transform:uppercase;")) {
            (text(label))
        }
    }
}

fn premiere(p: &Premiere<'_>) -> Markup {
    html! {
        div style="margin:0 0 18px 0;font-family:Ubuntu, Arial, sans-serif;" {
            div style="margin:0 0 8px 0;" {
                @for tag in p.tags.iter().filter(|t| !t.is_empty()) {
                    (venue_badge(tag))
                }
            }
            div style="display:flex;align-items:center;justify-content:space-between;" {
                div style="font-weight:800;font-size:18px;line-height:1.3;color:#2b2b2b;" {
                    (text(p.title))
                    @if !p.subtitle.is_empty() {
                        " "
                        span style="color:#777;font-weight:400;" { "(" (text(p.subtitle)) ")" }
                    }
                }
                @if !p.link.is_empty() {
                    a href=(text(p.link)) target="_blank" style="margin-left:12px;display:inline-block;" {
                        div style="width:26px;height:26px;border-radius:50%;background:#2b2b2b;display:flex;align-items:center;justify-content:center;" {
                            (icon(TICKET_ICON, 14, "display:block;filter:invert(1);"))
                        }
                    }
                }
            }
            @if p.has_date_line() {
                div style="margin-top:4px;font-size:14px;color:#555;" {
                    @if !p.date_prefix.is_empty() {
                        (text(p.date_prefix)) " "
                    }
                    span style="color:#b8312f;font-weight:600;" { (text(p.date)) }
                    @if !p.location.is_empty() {
                        " in " (text(p.location))
                    }
                }
            }
        }
    }
}

fn event_premieres_list(v: &Values) -> Markup {
    let title = v.get("titleMain");
    let accent = clean_color(v.get("accentColor"), RED);
    Panel::white().render(html! {
        @if !title.is_empty() {
            h4 style="margin:0;font-size:20px;line-height:1.4;font-family:Ubuntu, Arial, sans-serif;text-align:center;letter-spacing:0.5px;color:#000;" {
                strong { (text(title)) }
            }
            div style=(format!("width:100px;height:2px;background:{accent};margin:8px auto 20px auto;border-radius:2px;")) {}
        }
        @for p in premieres(v) {
            (premiere(&p))
        }
    })
}
