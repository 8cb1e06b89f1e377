//! Informational cards: steps, timelines, FAQs, stats, icon lists and
//! contact details.
//!
//! Most of these repeat a small sub-template a fixed number of times. Each
//! card keeps its own maximum and its own rule for which items to skip.

use super::parts::{Panel, grid, heading, icon, image, nth, nth_infix, still, styled_link, title};
use crate::card::{CardDefinition, FieldSchema};
use crate::escape::text;
use crate::rich_text::{multiline, rich};
use crate::values::Values;
use maud::{Markup, html};

const STEPS: usize = 3;
const TIMELINE_ROWS: usize = 3;
const FAQ_PAIRS: usize = 2;
const INFO_COLUMNS: usize = 3;
const STATS: usize = 3;
const ICON_LIST_ROWS: usize = 3;
const ICON_BLOCK_ROWS: usize = 10;
const ICON_GRID_ITEMS: usize = 6;
const ICON_GRID_COLUMNS: usize = 3;

const ICON_STATS: usize = 3;

const CHECK_ICON: &str = "https://cdn.example.com/icons/check-circle.svg";
const VENUE_PHOTO: &str = "https://images.example.com/cards/venue-front.jpg";
const PROFILE_PHOTO: &str = "https://images.example.com/cards/host.jpg";

/// Small pill button used by the info cards.
const SMALL_BUTTON: &str = "display:inline-block;padding:8px 16px;background:#b48a19;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;";
const CONTACT_LINK: &str = "color:#b48a19;text-decoration:none;";

/// Social networks in display order: field name, label, default icon.
const SOCIAL: [(&str, &str, &str); 3] = [
    ("facebook", "Facebook", "https://cdn.example.com/icons/facebook.svg"),
    ("instagram", "Instagram", "https://cdn.example.com/icons/instagram.svg"),
    ("tiktok", "TikTok", "https://cdn.example.com/icons/tiktok.svg"),
];

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "step-card",
            "Steps",
            "info",
            "Three steps with numbered circles on a light background.",
            step_fields(),
            step_card,
        ),
        CardDefinition::new(
            "timeline",
            "Timeline",
            "info",
            "A vertical timeline with three moments.",
            timeline_fields(),
            timeline,
        ),
        CardDefinition::new(
            "faq-card",
            "Frequently asked questions",
            "info",
            "Two questions with their answers.",
            vec![
                FieldSchema::text("title", "Title", "Frequently asked questions"),
                FieldSchema::text("question1", "Question 1", "When are you open?"),
                FieldSchema::textarea("answer1", "Answer 1", "Every day from 10 am to 11 pm."),
                FieldSchema::text("question2", "Question 2", "Is there parking?"),
                FieldSchema::textarea("answer2", "Answer 2", "Yes, free parking right next to the entrance."),
            ],
            faq_card,
        ),
        CardDefinition::new(
            "multi-info",
            "Three info items",
            "info",
            "Three columns, each with a title and text.",
            vec![
                FieldSchema::text("title", "Title", "Good to know"),
                FieldSchema::text("item1Title", "Item 1 title", "Open late"),
                FieldSchema::textarea("item1Text", "Item 1 text", "Until 11 pm every day."),
                FieldSchema::text("item2Title", "Item 2 title", "Easy access"),
                FieldSchema::textarea("item2Text", "Item 2 text", "Next to the station."),
                FieldSchema::text("item3Title", "Item 3 title", "Groups"),
                FieldSchema::textarea("item3Text", "Item 3 text", "Packages from 10 people."),
            ],
            multi_info,
        ),
        CardDefinition::new(
            "stats-card",
            "Stats",
            "info",
            "Three large numbers with labels.",
            vec![
                FieldSchema::text("title", "Title", "Our year in numbers"),
                FieldSchema::text("stat1Value", "Stat 1 value", "120k"),
                FieldSchema::text("stat1Label", "Stat 1 label", "Visitors"),
                FieldSchema::text("stat2Value", "Stat 2 value", "350"),
                FieldSchema::text("stat2Label", "Stat 2 label", "Films"),
                FieldSchema::text("stat3Value", "Stat 3 value", "4.8"),
                FieldSchema::text("stat3Label", "Stat 3 label", "Rating"),
            ],
            stats_card,
        ),
        CardDefinition::new(
            "icon-list",
            "Icon list",
            "info",
            "Three items, each with its own icon.",
            icon_rows_fields("Why visit", ICON_LIST_ROWS, ICON_LIST_ROWS),
            icon_list,
        ),
        CardDefinition::new(
            "multi-icon-list",
            "Long icon list",
            "info",
            "A list of up to ten icons with text.",
            icon_rows_fields("Everything in one place", ICON_BLOCK_ROWS, 3),
            multi_icon_list,
        ),
        CardDefinition::new(
            "multi-icon-block",
            "Icon block",
            "info",
            "A large card with a heading and a vertical list of up to ten icons and texts.",
            icon_rows_fields("Our benefits", ICON_BLOCK_ROWS, 3),
            multi_icon_block,
        ),
        CardDefinition::new(
            "icon-grid-card",
            "Icon grid",
            "info",
            "Up to six icons with a title and text, in rows of three.",
            icon_grid_fields(),
            icon_grid_card,
        ),
        CardDefinition::new(
            "contact-card",
            "Contact details",
            "info",
            "A venue photo with address, phone number and email.",
            vec![
                FieldSchema::text("title", "Title", "Contact"),
                FieldSchema::textarea("address", "Address", "1 Main Street\n1234 AB Springfield"),
                FieldSchema::text("phone", "Phone number", "0123-456789"),
                FieldSchema::text("email", "Email", "info@example.com"),
                FieldSchema::text("map", "Map image URL", VENUE_PHOTO),
            ],
            contact_card,
        ),
        CardDefinition::new(
            "icon-info",
            "Info with icon",
            "info",
            "An icon next to a title, text and button.",
            vec![
                FieldSchema::text("icon", "Icon URL", CHECK_ICON),
                FieldSchema::text("title", "Title", "Good to know"),
                FieldSchema::textarea("body", "Text", "A short description of this information."),
                FieldSchema::text("buttonLabel", "Button text", "Read more"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            icon_info,
        ),
        CardDefinition::new(
            "social-card",
            "Social media",
            "info",
            "Social media icons with links.",
            social_fields(),
            social_card,
        ),
        CardDefinition::new(
            "newsletter-card",
            "Newsletter sign-up",
            "info",
            "A call to subscribe to the newsletter.",
            vec![
                FieldSchema::text("title", "Title", "Stay in the loop!"),
                FieldSchema::textarea("body", "Text", "Sign up for our newsletter and never miss an update."),
                FieldSchema::text("buttonLabel", "Button text", "Sign up"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            newsletter_card,
        ),
        CardDefinition::new(
            "profile-card",
            "Profile",
            "info",
            "A photo with a name, role and short bio.",
            vec![
                FieldSchema::text("image", "Photo URL", PROFILE_PHOTO),
                FieldSchema::text("name", "Name", "Full name"),
                FieldSchema::text("role", "Role", "Role"),
                FieldSchema::textarea("body", "Bio", "A short bio of this person."),
                FieldSchema::text("buttonLabel", "Button text", "Read more"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            profile_card,
        ),
        CardDefinition::new(
            "icon-stats",
            "Stats with icons",
            "info",
            "Three figures, each with its own icon.",
            icon_stats_fields(),
            icon_stats,
        ),
        CardDefinition::new(
            "map-card",
            "Location",
            "info",
            "A map image with the address, a description and a route button.",
            vec![
                FieldSchema::text("map", "Map image URL", VENUE_PHOTO),
                FieldSchema::text("title", "Title", "Where to find us"),
                FieldSchema::textarea("address", "Address", "1 Main Street\n1234 AB Springfield"),
                FieldSchema::textarea("body", "Text", "A description of the location."),
                FieldSchema::text("buttonLabel", "Button text", "Plan route"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            map_card,
        ),
    ]
}

fn step_fields() -> Vec<FieldSchema> {
    let steps = [
        ("Choose", "Pick a film or activity."),
        ("Book", "Reserve your tickets online."),
        ("Enjoy", "Come by and have a great time."),
    ];
    let mut fields = vec![FieldSchema::text("title", "Title", "How it works")];
    for (i, (name, desc)) in (1..=STEPS).zip(steps) {
        fields.push(FieldSchema::text(
            &format!("step{i}Title"),
            &format!("Step {i} title"),
            name,
        ));
        fields.push(FieldSchema::textarea(
            &format!("step{i}Desc"),
            &format!("Step {i} description"),
            desc,
        ));
    }
    fields
}

fn step_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for i in 1..=STEPS {
                (step(i, nth_infix(v, "step", i, "Title"), nth_infix(v, "step", i, "Desc")))
            }
        }))
    })
}

fn step(number: usize, name: &str, desc: &str) -> Markup {
    html! {
        tr {
            td style="padding:8px 0;vertical-align:top;" {
                (grid(html! {
                    tr {
                        td width="40" style="width:40px;" {
                            div style="width:40px;height:40px;background:#b48a19;color:#ffffff;border-radius:50%;display:flex;align-items:center;justify-content:center;font-weight:700;font-size:16px;" {
                                (number)
                            }
                        }
                        td style="padding-left:12px;" {
                            div style="font-weight:700;font-size:16px;color:#2b2b2b;margin-bottom:4px;" { (text(name)) }
                            div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;" { (text(desc)) }
                        }
                    }
                }))
            }
        }
    }
}

fn timeline_fields() -> Vec<FieldSchema> {
    let moments = [
        ("18:00", "Doors open"),
        ("19:30", "Screening starts"),
        ("22:00", "Drinks in the lounge"),
    ];
    let mut fields = vec![FieldSchema::text("title", "Title", "Tonight's schedule")];
    for (i, (time, desc)) in (1..=TIMELINE_ROWS).zip(moments) {
        fields.push(FieldSchema::text(&format!("time{i}"), &format!("Time {i}"), time));
        fields.push(FieldSchema::text(&format!("desc{i}"), &format!("Description {i}"), desc));
    }
    fields
}

/// Every row has a dot; all but the last also draw the connecting line.
fn timeline(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#2b2b2b;margin-bottom:16px;"))
        (grid(html! {
            @for i in 1..=TIMELINE_ROWS {
                tr {
                    td style="vertical-align:top;width:20px;" {
                        div style="width:12px;height:12px;background:#b48a19;border-radius:50%;margin-top:4px;" {}
                        @if i < TIMELINE_ROWS {
                            div style="width:2px;height:40px;background:#b48a19;margin-left:5px;" {}
                        }
                    }
                    td style="padding-left:10px;padding-bottom:20px;" {
                        div style="font-weight:600;font-size:14px;color:#2b2b2b;margin-bottom:2px;" { (text(nth(v, "time", i))) }
                        div style="font-weight:400;font-size:14px;color:#2b2b2b;" { (text(nth(v, "desc", i))) }
                    }
                }
            }
        }))
    })
}

fn faq_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (title(v.get("title")))
        @for i in 1..=FAQ_PAIRS {
            div style="margin-bottom:12px;" {
                div style="font-weight:700;font-size:15px;color:#2b2b2b;margin-bottom:4px;" { (text(nth(v, "question", i))) }
                div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" { (text(nth(v, "answer", i))) }
            }
        }
    })
}

fn multi_info(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (title(v.get("title")))
        (grid(html! {
            tr {
                @for i in 1..=INFO_COLUMNS {
                    td style="vertical-align:top;padding:0 10px;" {
                        div style="font-weight:700;font-size:16px;color:#2b2b2b;margin-bottom:4px;" {
                            (text(nth_infix(v, "item", i, "Title")))
                        }
                        div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                            (text(nth_infix(v, "item", i, "Text")))
                        }
                    }
                }
            }
        }))
    })
}

fn stats_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (title(v.get("title")))
        (grid(html! {
            tr {
                @for i in 1..=STATS {
                    td style="text-align:center;padding:10px 5px;" {
                        (heading(nth_infix(v, "stat", i, "Value"), "font-size:32px;color:#b48a19;"))
                        div style="font-weight:600;font-size:14px;color:#2b2b2b;" {
                            (text(nth_infix(v, "stat", i, "Label")))
                        }
                    }
                }
            }
        }))
    })
}

/// Fields `icon<i>` / `text<i>` for `rows` rows, the first `filled` with
/// sample content.
fn icon_rows_fields(default_title: &str, rows: usize, filled: usize) -> Vec<FieldSchema> {
    let samples = ["Point one", "Point two", "Point three"];
    let mut fields = vec![FieldSchema::text("title", "Title", default_title)];
    for i in 1..=rows {
        let sample = if i <= filled {
            samples.get(i - 1).copied().unwrap_or_default()
        } else {
            ""
        };
        fields.push(FieldSchema::text(&format!("icon{i}"), &format!("Icon {i} URL"), CHECK_ICON));
        fields.push(FieldSchema::text(&format!("text{i}"), &format!("Text {i}"), sample));
    }
    fields
}

struct IconRow<'a> {
    icon: &'a str,
    text: &'a str,
}

fn icon_rows(v: &Values, rows: usize) -> impl Iterator<Item = IconRow<'_>> {
    (1..=rows).map(move |i| IconRow {
        icon: nth(v, "icon", i),
        text: nth(v, "text", i),
    })
}

fn icon_row(row: &IconRow<'_>, size: u32, gap: u32) -> Markup {
    html! {
        tr {
            td style=(format!("width:{size}px;padding-right:{gap}px;vertical-align:top;")) {
                (icon(row.icon, size, "border-radius:50%;object-fit:cover;"))
            }
            td style="font-weight:500;font-size:14px;color:#2b2b2b;line-height:1.4;" { (text(row.text)) }
        }
    }
}

/// Rows need both an icon and a text.
fn icon_list(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for row in icon_rows(v, ICON_LIST_ROWS).filter(|r| !r.icon.is_empty() && !r.text.is_empty()) {
                (icon_row(&row, 32, 8))
            }
        }))
    })
}

/// Rows need a text; the icon may be empty.
fn multi_icon_list(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for row in icon_rows(v, ICON_BLOCK_ROWS).filter(|r| !r.text.is_empty()) {
                (icon_row(&row, 32, 10))
            }
        }))
    })
}

fn multi_icon_block(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for row in icon_rows(v, ICON_BLOCK_ROWS).filter(|r| !r.text.is_empty()) {
                (icon_row(&row, 36, 12))
            }
        }))
    })
}

fn icon_grid_fields() -> Vec<FieldSchema> {
    let mut fields = vec![FieldSchema::text("title", "Title", "What we offer")];
    for i in 1..=ICON_GRID_ITEMS {
        fields.push(FieldSchema::text(&format!("icon{i}"), &format!("Icon {i} URL"), CHECK_ICON));
        fields.push(FieldSchema::text(&format!("label{i}"), &format!("Title {i}"), &format!("Title {i}")));
        let text = if i <= 3 { format!("Description {i}") } else { String::new() };
        fields.push(FieldSchema::textarea(&format!("text{i}"), &format!("Text {i}"), &text));
    }
    fields
}

struct GridItem<'a> {
    icon: &'a str,
    label: &'a str,
    text: &'a str,
}

/// Items need a label or a text.
fn grid_items(v: &Values) -> Vec<GridItem<'_>> {
    (1..=ICON_GRID_ITEMS)
        .map(|i| GridItem {
            icon: nth(v, "icon", i),
            label: nth(v, "label", i),
            text: nth(v, "text", i),
        })
        .filter(|item| !item.label.is_empty() || !item.text.is_empty())
        .collect()
}

fn icon_grid_card(v: &Values) -> Markup {
    let items = grid_items(v);
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for row in items.chunks(ICON_GRID_COLUMNS) {
                tr {
                    @for item in row {
                        td style="width:33.333%;padding:10px 8px;vertical-align:top;" {
                            div style="text-align:center;" {
                                (icon(item.icon, 40, "border-radius:50%;object-fit:cover;margin-bottom:8px;"))
                                div style="font-weight:700;font-size:14px;color:#2b2b2b;margin-bottom:4px;" { (text(item.label)) }
                                div style="font-weight:400;font-size:12px;color:#2b2b2b;line-height:1.4;" { (multiline(item.text)) }
                            }
                        }
                    }
                }
            }
        }))
    })
}

/// A photo row on top of a padded content row.
fn photo_card(photo: Markup, content: Markup) -> Markup {
    Panel::cream().render_rows(html! {
        tr { td style="padding:0;line-height:0;" { (photo) } }
        tr { td style="padding:20px;" { (content) } }
    })
}

fn contact_card(v: &Values) -> Markup {
    let (phone, email) = (v.get("phone"), v.get("email"));
    photo_card(
        still(v.get("map"), "Map", "display:block;width:100%;height:200px;object-fit:cover;"),
        html! {
            (heading(v.get("title"), "font-size:22px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
            div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:8px;" {
                (rich(v.get("address")))
            }
            div style="font-weight:600;font-size:14px;color:#2b2b2b;margin-bottom:4px;" {
                "Tel: " (styled_link(&format!("tel:{phone}"), phone, CONTACT_LINK))
            }
            div style="font-weight:600;font-size:14px;color:#2b2b2b;" {
                "Email: " (styled_link(&format!("mailto:{email}"), email, CONTACT_LINK))
            }
        },
    )
}

fn icon_info(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:20px;display:flex;align-items:center;" {
                div style="flex:0 0 40px;margin-right:16px;" {
                    img src=(text(v.get("icon"))) alt="Icon" style="display:block;width:40px;height:40px;border-radius:50%;object-fit:cover;";
                }
                div style="flex:1;" {
                    (heading(v.get("title"), "font-size:18px;line-height:1.3;color:#2b2b2b;margin-bottom:4px;"))
                    div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
                        (rich(v.get("body")))
                    }
                    (styled_link(v.get("buttonLink"), v.get("buttonLabel"), SMALL_BUTTON))
                }
            }
        }
    })
}

fn social_fields() -> Vec<FieldSchema> {
    let mut fields = vec![
        FieldSchema::text("title", "Title", "Follow us"),
        FieldSchema::textarea("body", "Text", "Follow us on social media for the latest news."),
    ];
    for (key, label, icon_url) in SOCIAL {
        fields.push(FieldSchema::text(key, &format!("{label} link"), "#"));
        fields.push(FieldSchema::text(&format!("{key}Icon"), &format!("{label} icon URL"), icon_url));
    }
    fields
}

/// Every network gets an icon; an empty icon field falls back to the stock one.
fn social_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
        div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
            (rich(v.get("body")))
        }
        div style="text-align:center;" {
            @for (key, _, stock_icon) in SOCIAL {
                @let custom = v.get(&format!("{key}Icon"));
                a href=(text(v.get(key))) style="margin:0 8px;text-decoration:none;" {
                    (icon(if custom.is_empty() { stock_icon } else { custom }, 28, ""))
                }
            }
        }
    })
}

fn newsletter_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:8px;"))
        div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;margin-bottom:16px;" {
            (rich(v.get("body")))
        }
        (styled_link(
            v.get("buttonLink"),
            v.get("buttonLabel"),
            "display:inline-block;padding:10px 24px;background:#b48a19;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;",
        ))
    })
}

fn profile_card(v: &Values) -> Markup {
    photo_card(
        image(v, "image", "Profile", "display:block;width:100%;height:200px;object-fit:cover;"),
        html! {
            (heading(v.get("name"), "font-size:20px;color:#2b2b2b;margin-bottom:4px;"))
            div style="font-weight:600;font-size:14px;color:#b48a19;margin-bottom:8px;" { (text(v.get("role"))) }
            div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;margin-bottom:16px;" {
                (rich(v.get("body")))
            }
            (styled_link(v.get("buttonLink"), v.get("buttonLabel"), SMALL_BUTTON))
        },
    )
}

fn icon_stats_fields() -> Vec<FieldSchema> {
    let samples = [("10K+", "Guests"), ("50+", "Events"), ("5/5", "Rating")];
    let mut fields = vec![FieldSchema::text("title", "Title", "Key figures")];
    for (i, (value, label)) in (1..=ICON_STATS).zip(samples) {
        fields.push(FieldSchema::text(&format!("icon{i}"), &format!("Icon {i} URL"), CHECK_ICON));
        fields.push(FieldSchema::text(&format!("value{i}"), &format!("Value {i}"), value));
        fields.push(FieldSchema::text(&format!("label{i}"), &format!("Label {i}"), label));
    }
    fields
}

fn icon_stats(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            tr {
                @for i in 1..=ICON_STATS {
                    td style="text-align:center;padding:10px 5px;" {
                        (icon(nth(v, "icon", i), 32, "object-fit:cover;border-radius:50%;margin-bottom:4px;"))
                        (heading(nth(v, "value", i), "font-size:28px;color:#b48a19;"))
                        div style="font-weight:600;font-size:14px;color:#2b2b2b;" { (text(nth(v, "label", i))) }
                    }
                }
            }
        }))
    })
}

fn map_card(v: &Values) -> Markup {
    photo_card(
        image(v, "map", "Map", "display:block;width:100%;height:200px;object-fit:cover;"),
        html! {
            (heading(v.get("title"), "font-size:20px;color:#2b2b2b;margin-bottom:6px;"))
            div style="font-weight:600;font-size:14px;color:#2b2b2b;margin-bottom:4px;" {
                (multiline(v.get("address")))
            }
            div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;margin-bottom:16px;" {
                (multiline(v.get("body")))
            }
            (styled_link(v.get("buttonLink"), v.get("buttonLabel"), SMALL_BUTTON))
        },
    )
}
