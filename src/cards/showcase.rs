//! Special cards laid out as steps, columns or schedules.

use super::parts::{ACCENT, INK, Panel, WHITE, grid, heading, icon, nth, nth_infix, styled_link};
use crate::card::{CardDefinition, FieldSchema};
use crate::escape::text;
use crate::rich_text::multiline;
use crate::values::Values;
use maud::{Markup, html};

const CHECK_ICON: &str = "https://cdn.example.com/icons/check-circle.svg";
const STEPS: usize = 3;
const FEATURES: usize = 4;
const AGENDA_ITEMS: usize = 3;
const PLAN_FEATURES: usize = 3;

pub fn cards() -> Vec<CardDefinition> {
    vec![
        CardDefinition::new(
            "icon-step",
            "Icon steps",
            "special",
            "A step-by-step plan with an icon for each step.",
            icon_step_fields(),
            icon_step,
        ),
        CardDefinition::new(
            "four-features",
            "Four features",
            "special",
            "Four columns with icon, title and text.",
            four_feature_fields(),
            four_features,
        ),
        CardDefinition::new(
            "calendar-card",
            "Calendar card",
            "special",
            "Three agenda items with their times.",
            calendar_fields(),
            calendar_card,
        ),
        CardDefinition::new(
            "price-comparison",
            "Price comparison",
            "special",
            "Compare two plans or offers side by side.",
            price_fields(),
            price_comparison,
        ),
        CardDefinition::new(
            "testimonial-double",
            "Double testimonial",
            "special",
            "Two testimonials side by side with names.",
            vec![
                FieldSchema::textarea("quote1", "Quote 1", "\"A wonderful experience!\""),
                FieldSchema::text("name1", "Name 1", "Customer name"),
                FieldSchema::textarea("quote2", "Quote 2", "\"Fantastic service and atmosphere!\""),
                FieldSchema::text("name2", "Name 2", "Customer name"),
            ],
            testimonial_double,
        ),
    ]
}

// ============================================================================
// Steps
// ============================================================================

fn icon_step_fields() -> Vec<FieldSchema> {
    let descriptions = ["Description of step one.", "Description of step two.", "Description of step three."];
    let mut fields = vec![FieldSchema::text("title", "Title", "How does it work?")];
    for (i, desc) in (1..=STEPS).zip(descriptions) {
        fields.push(FieldSchema::text(&format!("icon{i}"), &format!("Step {i} icon URL"), CHECK_ICON));
        fields.push(FieldSchema::text(&format!("step{i}Title"), &format!("Step {i} title"), &format!("Step {i}")));
        fields.push(FieldSchema::textarea(&format!("step{i}Desc"), &format!("Step {i} description"), desc));
    }
    fields
}

/// Steps without a title are left out.
fn icon_step(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for i in 1..=STEPS {
                @let title = nth_infix(v, "step", i, "Title");
                @if !title.is_empty() {
                    tr {
                        td style="width:40px;padding-right:10px;vertical-align:top;" {
                            (icon(nth(v, "icon", i), 40, "border-radius:50%;object-fit:cover;"))
                        }
                        td {
                            div style="font-weight:700;font-size:14px;color:#2b2b2b;" { (text(title)) }
                            div style="font-weight:400;font-size:13px;color:#2b2b2b;" {
                                (multiline(nth_infix(v, "step", i, "Desc")))
                            }
                        }
                    }
                }
            }
        }))
    })
}

// ============================================================================
// Features
// ============================================================================

fn four_feature_fields() -> Vec<FieldSchema> {
    let features = [
        ("Quality", "Only the very best."),
        ("Service", "Outstanding service."),
        ("Atmosphere", "A cosy atmosphere."),
        ("Price", "Affordable prices."),
    ];
    let mut fields = vec![FieldSchema::text("title", "Title", "What sets us apart")];
    for (i, (title, desc)) in (1..=FEATURES).zip(features) {
        fields.push(FieldSchema::text(&format!("icon{i}"), &format!("Icon {i} URL"), CHECK_ICON));
        fields.push(FieldSchema::text(&format!("title{i}"), &format!("Feature {i} title"), title));
        fields.push(FieldSchema::text(&format!("desc{i}"), &format!("Feature {i} text"), desc));
    }
    fields
}

/// All four columns always render, even when empty.
fn four_features(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;color:#2b2b2b;text-align:center;margin-bottom:16px;"))
        (grid(html! {
            tr {
                @for i in 1..=FEATURES {
                    td style="width:25%;vertical-align:top;padding:0 8px;" {
                        div style="text-align:center;" {
                            (icon(nth(v, "icon", i), 36, "border-radius:50%;object-fit:cover;margin-bottom:8px;"))
                            div style="font-weight:700;font-size:14px;color:#2b2b2b;margin-bottom:4px;" {
                                (text(nth(v, "title", i)))
                            }
                            div style="font-weight:400;font-size:12px;color:#2b2b2b;line-height:1.4;" {
                                (text(nth(v, "desc", i)))
                            }
                        }
                    }
                }
            }
        }))
    })
}

// ============================================================================
// Agenda
// ============================================================================

fn calendar_fields() -> Vec<FieldSchema> {
    let items = [("10:00", "Opening"), ("12:00", "Lunch"), ("14:00", "Closing")];
    let mut fields = vec![FieldSchema::text("title", "Title", "Agenda")];
    for (i, (time, desc)) in (1..=AGENDA_ITEMS).zip(items) {
        fields.push(FieldSchema::text(&format!("time{i}"), &format!("Time {i}"), time));
        fields.push(FieldSchema::text(&format!("desc{i}"), &format!("Description {i}"), desc));
    }
    fields
}

/// Every item renders; a rule separates consecutive items.
fn calendar_card(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:20px;color:#2b2b2b;margin-bottom:12px;"))
        (grid(html! {
            @for i in 1..=AGENDA_ITEMS {
                tr {
                    td style="width:60px;padding-right:10px;font-weight:700;font-size:14px;color:#2b2b2b;" {
                        (text(nth(v, "time", i)))
                    }
                    td style="font-weight:500;font-size:14px;color:#2b2b2b;" { (text(nth(v, "desc", i))) }
                }
                @if i < AGENDA_ITEMS {
                    tr {
                        td colspan="2" style="padding:4px 0;" { hr style="border:0;margin:0;"; }
                    }
                }
            }
        }))
    })
}

// ============================================================================
// Plans
// ============================================================================

fn price_fields() -> Vec<FieldSchema> {
    let plans = [
        ("Standard", "€19,95", ["Feature A", "Feature B", "Feature C"]),
        ("Premium", "€29,95", ["Feature X", "Feature Y", "Feature Z"]),
    ];
    let mut fields = vec![FieldSchema::text("title", "Title", "Choose your plan")];
    for (i, (name, price, features)) in (1..).zip(plans) {
        let plan = format!("plan{i}");
        fields.push(FieldSchema::text(&format!("{plan}Name"), &format!("Plan {i} name"), name));
        fields.push(FieldSchema::text(&format!("{plan}Price"), &format!("Plan {i} price"), price));
        for (j, feature) in (1..=PLAN_FEATURES).zip(features) {
            fields.push(FieldSchema::text(
                &format!("{plan}Feature{j}"),
                &format!("Plan {i} feature {j}"),
                feature,
            ));
        }
        fields.push(FieldSchema::text(&format!("{plan}Button"), &format!("Plan {i} button text"), "Select"));
        fields.push(FieldSchema::text(&format!("{plan}Link"), &format!("Plan {i} button link"), "#"));
    }
    fields
}

/// Colors of one plan column. The second plan is the highlighted one.
struct PlanTone {
    background: &'static str,
    text: &'static str,
    features: &'static str,
    button: &'static str,
    button_text: &'static str,
}

impl PlanTone {
    const PLAIN: Self = Self {
        background: WHITE,
        text: INK,
        features: INK,
        button: ACCENT,
        button_text: WHITE,
    };
    const HIGHLIGHTED: Self = Self {
        background: ACCENT,
        text: WHITE,
        features: "#f9f7f2",
        button: WHITE,
        button_text: ACCENT,
    };
}

fn plan_column(v: &Values, i: usize, tone: &PlanTone) -> Markup {
    let field = |suffix: &str| v.get(&format!("plan{i}{suffix}"));
    html! {
        td style=(format!("width:50%;vertical-align:top;padding:20px;border:0;background:{};border-radius:10px;", tone.background)) {
            div style=(format!("font-weight:800;font-size:18px;color:{};margin-bottom:4px;", tone.text)) {
                (text(field("Name")))
            }
            div style=(format!("font-weight:700;font-size:28px;color:{};margin-bottom:12px;", tone.text)) {
                (text(field("Price")))
            }
            ul style=(format!(
                "padding-left:20px;margin:0 0 16px 0;color:{};font-weight:400;font-size:14px;line-height:1.5;list-style-type:disc;",
                tone.features
            )) {
                @for j in 1..=PLAN_FEATURES {
                    li { (text(field(&format!("Feature{j}")))) }
                }
            }
            (styled_link(
                field("Link"),
                field("Button"),
                &format!(
                    "display:inline-block;padding:8px 16px;background:{};color:{};border-radius:999px;font-weight:700;font-size:14px;text-decoration:none;",
                    tone.button, tone.button_text
                ),
            ))
        }
    }
}

fn price_comparison(v: &Values) -> Markup {
    Panel::cream().render(html! {
        (heading(v.get("title"), "font-size:22px;color:#2b2b2b;margin-bottom:16px;"))
        (grid(html! {
            tr {
                (plan_column(v, 1, &PlanTone::PLAIN))
                (plan_column(v, 2, &PlanTone::HIGHLIGHTED))
            }
        }))
    })
}

// ============================================================================
// Testimonials
// ============================================================================

/// Quotes are plain text; line breaks are not kept.
fn testimonial_double(v: &Values) -> Markup {
    Panel::cream().render_rows(html! {
        tr {
            @for i in 1..=2 {
                td style="width:50%;vertical-align:top;padding:20px;" {
                    div style="font-weight:600;font-size:14px;color:#2b2b2b;margin-bottom:4px;" {
                        span style="color:#b48a19;font-size:24px;line-height:0;vertical-align:middle;" { "\u{201c}" }
                        (text(nth(v, "quote", i)))
                    }
                    div style="font-weight:700;font-size:14px;color:#2b2b2b;margin-top:8px;" {
                        "— " (text(nth(v, "name", i)))
                    }
                }
            }
        }
    })
}
