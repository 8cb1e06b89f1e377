//! Photo and video cards.
//!
//! Every photo is cover-fitted into a fixed box and marked with its field
//! name so an editor can pan and zoom it (see [`crate::focus`]).

use super::parts::{
    BUTTON_STYLE, CARD_GUTTER, CREAM, Panel, button, grid, heading, image, linked, nbsp, nth,
    nth_infix, shell, still, styled_link, tag_badge,
};
use crate::card::{CardDefinition, FieldSchema};
use crate::color::{Rgb, rgba};
use crate::escape::text;
use crate::numeric::{clamped_int, unit_interval};
use crate::rich_text::{multiline, rich};
use crate::values::Values;
use maud::{Markup, html};

const TAGS: usize = 3;
const BUTTONS: usize = 3;
const GRID_CELL_HEIGHT: i64 = 60;
const GRID_MAX_CELL_HEIGHT: i64 = 400;

const PHOTO_PLAYGROUND: &str = "https://images.example.com/cards/playground.jpg";
const PHOTO_RESTAURANT: &str = "https://images.example.com/cards/restaurant.jpg";
const PHOTO_LOBBY: &str = "https://images.example.com/cards/lobby.jpg";
const PHOTO_BAR: &str = "https://images.example.com/cards/bar.jpg";
const PHOTO_TERRACE: &str = "https://images.example.com/cards/terrace.jpg";
const POSTER: &str = "https://images.example.com/cards/poster.jpg";
const EVENT_SQUARE: &str = "https://images.example.com/cards/event-square.png";

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "photo-only",
            "Photo only",
            "photo",
            "A full-width photo without text.",
            vec![
                FieldSchema::text("image", "Image URL", PHOTO_PLAYGROUND),
                FieldSchema::text("alt", "Alt text", "Description of the image"),
            ],
            photo_only,
        ),
        CardDefinition::new(
            "photo-left-multi",
            "Photo left with labels and buttons",
            "photo",
            "Photo on the left; labels, title, text and up to three buttons on the right.",
            photo_left_multi_fields(),
            photo_left_multi,
        ),
        CardDefinition::new(
            "photo-top",
            "Photo on top",
            "photo",
            "A photo above a title, text and button.",
            vec![
                FieldSchema::text("image", "Image URL", PHOTO_RESTAURANT),
                FieldSchema::text("alt", "Alt text", "Description of the image"),
                FieldSchema::text("title", "Title", "Card title"),
                FieldSchema::textarea("body", "Text", "A short description."),
                FieldSchema::text("buttonLabel", "Button text", "Read more"),
                FieldSchema::text("buttonLink", "Button link", "#"),
            ],
            photo_top,
        ),
        CardDefinition::new(
            "photo-gallery",
            "Photo gallery",
            "photo",
            "Two photos side by side above a title and text.",
            vec![
                FieldSchema::text("image1", "Image 1 URL", PHOTO_LOBBY),
                FieldSchema::text("image2", "Image 2 URL", PHOTO_BAR),
                FieldSchema::text("alt1", "Alt text 1", "Image 1"),
                FieldSchema::text("alt2", "Alt text 2", "Image 2"),
                FieldSchema::text("title", "Title", "Gallery title"),
                FieldSchema::textarea("body", "Text", "A description of the gallery."),
            ],
            photo_gallery,
        ),
        CardDefinition::new(
            "photo-grid-two",
            "Two photos side by side",
            "photo",
            "Two square photos next to each other (160×160).",
            vec![
                FieldSchema::text("image1", "Image 1 URL", PHOTO_LOBBY),
                FieldSchema::text("alt1", "Alt 1", "Photo 1"),
                FieldSchema::text("image2", "Image 2 URL", PHOTO_BAR),
                FieldSchema::text("alt2", "Alt 2", "Photo 2"),
            ],
            photo_grid_two,
        ),
        CardDefinition::new(
            "video-card",
            "Video card",
            "photo",
            "A video still with a play button, a title and a link.",
            vec![
                FieldSchema::text("image", "Image URL", PHOTO_PLAYGROUND),
                FieldSchema::text("title", "Title", "Watch our video"),
                FieldSchema::textarea("body", "Text", "A short description of the video."),
                FieldSchema::text("buttonLabel", "Button text", "Watch video"),
                FieldSchema::text("buttonLink", "Video link", "#"),
            ],
            video_card,
        ),
        CardDefinition::new(
            "photo-overlay-light",
            "Photo with light overlay",
            "photo",
            "A photo above a translucent white panel with text and a button.",
            overlay_fields(PHOTO_TERRACE, "0.93"),
            photo_overlay_light,
        ),
        CardDefinition::new(
            "photo-overlay-dark",
            "Photo with dark overlay",
            "photo",
            "A photo above a translucent dark panel with white text.",
            overlay_fields(PHOTO_BAR, "0.87"),
            photo_overlay_dark,
        ),
        CardDefinition::new(
            "photo-left",
            "Photo left, text right",
            "photo",
            "Photo on the left; a label, title, text and button on the right.",
            side_photo_fields(PHOTO_RESTAURANT),
            photo_left,
        ),
        CardDefinition::new(
            "photo-right",
            "Photo right, text left",
            "photo",
            "Photo on the right; a label, title, text and button on the left.",
            side_photo_fields(PHOTO_LOBBY),
            photo_right,
        ),
        CardDefinition::new(
            "photo-grid-four",
            "Photo grid 2×2",
            "photo",
            "Four photos in a grid above a title and text.",
            vec![
                FieldSchema::text("image1", "Image 1 URL", PHOTO_BAR),
                FieldSchema::text("image2", "Image 2 URL", PHOTO_RESTAURANT),
                FieldSchema::text("image3", "Image 3 URL", PHOTO_LOBBY),
                FieldSchema::text("image4", "Image 4 URL", PHOTO_TERRACE),
                FieldSchema::text("cellHeight", "Cell height (px)", "60"),
                FieldSchema::text("title", "Title", "Gallery"),
                FieldSchema::textarea("body", "Text", "A description of the gallery."),
            ],
            photo_grid_four,
        ),
        CardDefinition::new(
            "event-image-160",
            "Event image 160×160 with link",
            "photo",
            "A clickable square event image with rounded corners.",
            vec![
                FieldSchema::text("link", "Link URL", "https://tickets.example.com/events/ladies-night"),
                FieldSchema::text("image", "Image URL", EVENT_SQUARE),
                FieldSchema::text("alt", "Alt text", "Image"),
            ],
            event_image_160,
        ),
        CardDefinition::new(
            "poster-160x227",
            "Clickable poster 160×227",
            "photo",
            "A clickable film poster with a light shadow and rounded corners.",
            vec![
                FieldSchema::text("link", "Link URL", "https://tickets.example.com/films/revenge"),
                FieldSchema::text("image", "Poster URL", POSTER),
                FieldSchema::text("alt", "Alt text", "Image"),
            ],
            poster_160x227,
        ),
    ]
}

fn overlay_fields(photo: &str, opacity: &str) -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("image", "Image URL", photo),
        FieldSchema::text("alt", "Alt text", "Description of the image"),
        FieldSchema::text("title", "Title", "Title"),
        FieldSchema::textarea("body", "Text", "A short description."),
        FieldSchema::text("buttonLabel", "Button text", "Read more"),
        FieldSchema::text("buttonLink", "Button link", "#"),
        FieldSchema::text("overlayOpacity", "Overlay opacity (0-1)", opacity),
    ]
}

fn side_photo_fields(photo: &str) -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("image", "Image URL", photo),
        FieldSchema::text("alt", "Alt text", "Description of the image"),
        FieldSchema::text("tag", "Label", "Category"),
        FieldSchema::text("title", "Title", "Card title"),
        FieldSchema::textarea("body", "Text", "A short description."),
        FieldSchema::text("buttonLabel", "Button text", "Read more"),
        FieldSchema::text("buttonLink", "Button link", "#"),
    ]
}

fn photo_left_multi_fields() -> Vec<FieldSchema> {
    let mut fields = vec![
        FieldSchema::text("image", "Image URL", PHOTO_LOBBY),
        FieldSchema::text("alt", "Alt text", "Description of the image"),
        FieldSchema::text("tag", "Label", "Category"),
        FieldSchema::text("tag2", "Label 2 (optional)", ""),
        FieldSchema::text("tag3", "Label 3 (optional)", ""),
        FieldSchema::text("title", "Title", "Card title"),
        FieldSchema::textarea("body", "Text", "A short description."),
    ];
    for i in 1..=BUTTONS {
        let (label, link) = if i == 1 { ("Read more", "#") } else { ("", "") };
        fields.push(FieldSchema::text(
            &format!("button{i}Label"),
            &format!("Button {i} text"),
            label,
        ));
        fields.push(FieldSchema::text(
            &format!("button{i}Link"),
            &format!("Button {i} link"),
            link,
        ));
    }
    fields
}

fn photo_only(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:0;line-height:0;" {
                (image(v, "image", v.get("alt"), "display:block;width:100%;height:auto;object-fit:cover;"))
            }
        }
    })
}

struct LinkButton<'a> {
    label: &'a str,
    link: &'a str,
}

/// Buttons in field order; a button needs both a label and a link.
fn link_buttons(v: &Values) -> Vec<LinkButton<'_>> {
    (1..=BUTTONS)
        .map(|i| LinkButton {
            label: nth_infix(v, "button", i, "Label"),
            link: nth_infix(v, "button", i, "Link"),
        })
        .filter(|b| !b.label.is_empty() && !b.link.is_empty())
        .collect()
}

fn photo_left_multi(v: &Values) -> Markup {
    let tags = std::iter::once(v.get("tag"))
        .chain((2..=TAGS).map(|i| nth(v, "tag", i)))
        .filter(|t| !t.is_empty());
    let button_style = format!("{BUTTON_STYLE}margin-right:10px;");
    shell(
        CARD_GUTTER,
        html! {
            table role="presentation" width="100%" cellpadding="0" cellspacing="0"
                style="border-radius:18px;overflow:hidden;background:#f9f7f2;border:0;box-shadow:0 6px 18px rgba(0,0,0,0.14);table-layout:fixed;" {
                tbody {
                    tr style="height:220px;mso-line-height-rule:exactly;" {
                        td width="42%" style="width:42%;padding:0;vertical-align:top;line-height:0;" {
                            (image(v, "image", v.get("alt"), "display:block;width:100%;height:220px;object-fit:cover;"))
                        }
                        td width="58%" style=(format!("width:58%;padding:0;vertical-align:middle;background:{CREAM};")) {
                            div style="margin:0 16px 0 16px;" {
                                @for tag in tags { (tag_badge(tag)) }
                            }
                            (heading(v.get("title"), "margin:0 16px 6px 16px;font-size:19px;line-height:1.25;color:#2b2b2b;"))
                            div style="margin:0 16px 12px 16px;font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                                (rich(v.get("body")))
                            }
                            div style="margin:0 16px;white-space:nowrap;" {
                                @for b in link_buttons(v) {
                                    (styled_link(b.link, b.label, &button_style))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn photo_top(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:0;line-height:0;" {
                (image(v, "image", v.get("alt"), "display:block;width:100%;height:220px;object-fit:cover;"))
            }
        }
        tr {
            td style="padding:20px;" {
                (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
                div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;margin-bottom:12px;" {
                    (multiline(v.get("body")))
                }
                (styled_link(v.get("buttonLink"), v.get("buttonLabel"), BUTTON_STYLE))
            }
        }
    })
}

fn half_image(v: &Values, n: usize, extra_cell_style: &str, box_style: &str) -> Markup {
    let field = format!("image{n}");
    html! {
        td width="50%" style=(format!("width:50%;{extra_cell_style}")) {
            (image(v, &field, nth(v, "alt", n), box_style))
        }
    }
}

fn photo_gallery(v: &Values) -> Markup {
    let cell = "padding:0;line-height:0;";
    let photo = "display:block;width:100%;height:160px;object-fit:cover;";
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:0;line-height:0;" {
                (grid(html! {
                    tr {
                        (half_image(v, 1, cell, photo))
                        (half_image(v, 2, cell, photo))
                    }
                }))
            }
        }
        tr {
            td style="padding:20px;" {
                (heading(v.get("title"), "font-size:20px;line-height:1.3;color:#2b2b2b;margin-bottom:8px;"))
                div style="font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                    (multiline(v.get("body")))
                }
            }
        }
    })
}

fn photo_grid_two(v: &Values) -> Markup {
    let photo = "display:block;width:100%;max-width:240px;height:160px;object-fit:cover;border-radius:12px;";
    Panel::white().padding("12px").render(grid(html! {
        tr {
            (half_image(v, 1, "padding-right:6px;", photo))
            (half_image(v, 2, "padding-left:6px;", photo))
        }
    }))
}

fn video_card(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            td style="padding:0;" {
                div style="position:relative;width:100%;height:0;padding-bottom:56.25%;overflow:hidden;" {
                    (image(v, "image", "Video still", "position:absolute;top:0;left:0;width:100%;height:100%;object-fit:cover;"))
                    a href=(text(v.get("buttonLink")))
                        style="position:absolute;top:50%;left:50%;transform:translate(-50%,-50%);background:rgba(0,0,0,0.6);padding:12px 16px;border-radius:50%;color:#ffffff;font-size:20px;line-height:1;text-decoration:none;" {
                        "▶" (nbsp())
                    }
                }
            }
        }
        tr {
            td style="padding:20px;" {
                (heading(v.get("title"), "font-size:20px;color:#2b2b2b;margin-bottom:8px;"))
                div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;margin-bottom:16px;" {
                    (rich(v.get("body")))
                }
                (styled_link(
                    v.get("buttonLink"),
                    v.get("buttonLabel"),
                    "display:inline-block;padding:8px 16px;background:#b48a19;color:#ffffff;border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;",
                ))
            }
        }
    })
}

/// Text colors of an overlay panel: title, body.
struct OverlayTone {
    panel: Rgb,
    default_opacity: f64,
    title: &'static str,
    body: &'static str,
}

const LIGHT: OverlayTone = OverlayTone {
    panel: Rgb::new(255, 255, 255),
    default_opacity: 0.93,
    title: "#2b2b2b",
    body: "#2b2b2b",
};

const DARK: OverlayTone = OverlayTone {
    panel: Rgb::new(43, 43, 43),
    default_opacity: 0.87,
    title: "#ffffff",
    body: "#eeeeee",
};

fn photo_overlay(v: &Values, tone: &OverlayTone) -> Markup {
    let panel = rgba(tone.panel, unit_interval(v.get("overlayOpacity"), tone.default_opacity));
    shell(
        CARD_GUTTER,
        html! {
            table role="presentation" width="100%" cellpadding="0" cellspacing="0"
                style="border-radius:18px;overflow:hidden;box-shadow:0 6px 18px rgba(0,0,0,0.14);" {
                tbody {
                    tr {
                        td style="padding:0;line-height:0;" {
                            (image(v, "image", v.get("alt"), "display:block;width:100%;height:220px;object-fit:cover;"))
                        }
                    }
                    tr {
                        td style=(format!("background:{panel};padding:20px;")) {
                            (heading(v.get("title"), &format!("font-size:20px;line-height:1.3;color:{};margin-bottom:6px;", tone.title)))
                            div style=(format!("font-weight:400;font-size:14px;line-height:1.5;color:{};margin-bottom:12px;", tone.body)) {
                                (rich(v.get("body")))
                            }
                            (button(v.get("buttonLink"), v.get("buttonLabel")))
                        }
                    }
                }
            }
        },
    )
}

fn photo_overlay_light(v: &Values) -> Markup {
    photo_overlay(v, &LIGHT)
}

fn photo_overlay_dark(v: &Values) -> Markup {
    photo_overlay(v, &DARK)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Photo and text in two fixed-width columns, photo on `side`.
fn side_photo(v: &Values, side: Side) -> Markup {
    let photo = html! {
        td width="42%" style="width:42%;padding:0;vertical-align:top;line-height:0;" {
            (image(v, "image", v.get("alt"), "display:block;width:100%;height:220px;object-fit:cover;"))
        }
    };
    let copy = html! {
        td width="58%" style=(format!("width:58%;padding:0;vertical-align:middle;background:{CREAM};")) {
            @if !v.get("tag").is_empty() {
                div style="margin:0 16px 0 16px;" { (tag_badge(v.get("tag"))) }
            }
            (heading(v.get("title"), "margin:0 16px 6px 16px;font-size:19px;line-height:1.25;color:#2b2b2b;"))
            div style="margin:0 16px 12px 16px;font-weight:400;font-size:14px;line-height:1.5;color:#2b2b2b;" {
                (rich(v.get("body")))
            }
            div style="margin:0 16px;" {
                (button(v.get("buttonLink"), v.get("buttonLabel")))
            }
        }
    };
    shell(
        CARD_GUTTER,
        html! {
            table role="presentation" width="100%" cellpadding="0" cellspacing="0"
                style="border-radius:18px;overflow:hidden;background:#f9f7f2;border:0;box-shadow:0 6px 18px rgba(0,0,0,0.14);table-layout:fixed;" {
                tbody {
                    tr style="height:220px;mso-line-height-rule:exactly;" {
                        @if side == Side::Left { (photo) (copy) } @else { (copy) (photo) }
                    }
                }
            }
        },
    )
}

fn photo_left(v: &Values) -> Markup {
    side_photo(v, Side::Left)
}

fn photo_right(v: &Values) -> Markup {
    side_photo(v, Side::Right)
}

fn photo_grid_four(v: &Values) -> Markup {
    let height = clamped_int(v.get("cellHeight"), GRID_CELL_HEIGHT, 1, GRID_MAX_CELL_HEIGHT);
    let cell = |n: usize| {
        let field = format!("image{n}");
        html! {
            td style="width:50%;padding:0;vertical-align:top;line-height:0;" {
                div style=(format!("height:{height}px;overflow:hidden;")) {
                    (image(v, &field, "Photo", "display:block;width:100%;height:100%;object-fit:cover;"))
                }
            }
        }
    };
    Panel::cream().render_rows(html! {
        tr {
            td {
                (grid(html! {
                    tr { (cell(1)) (cell(2)) }
                    tr { (cell(3)) (cell(4)) }
                }))
            }
        }
        tr {
            td style="padding:20px;" {
                (heading(v.get("title"), "font-size:20px;color:#2b2b2b;margin-bottom:8px;"))
                div style="font-weight:400;font-size:14px;color:#2b2b2b;line-height:1.5;" {
                    (rich(v.get("body")))
                }
            }
        }
    })
}

fn event_image_160(v: &Values) -> Markup {
    shell(
        CARD_GUTTER,
        linked(
            v.get("link"),
            still(
                v.get("image"),
                v.get("alt"),
                "display:block;width:160px;height:160px;object-fit:cover;border-radius:12px;",
            ),
        ),
    )
}

fn poster_160x227(v: &Values) -> Markup {
    shell(
        CARD_GUTTER,
        linked(
            v.get("link"),
            html! {
                div style="width:160px;height:227px;border-radius:12px;overflow:hidden;box-shadow:0 4px 12px rgba(0,0,0,0.12);background:#fff;" {
                    (still(v.get("image"), v.get("alt"), "display:block;width:160px;height:227px;object-fit:cover;"))
                }
            },
        ),
    )
}
