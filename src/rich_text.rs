//! Constrained rich-text markup for multi-line card fields.
//!
//! Editors can type three things that turn into markup:
//!
//! ```text
//! *word*             → <em>word</em>
//! [label](https://…) → <a href="https://…" style="…">label</a>
//! newline            → <br>
//! ```
//!
//! The raw input is escaped first, so the substitutions only ever see
//! already-safe text: the delimiters are plain characters and the captured
//! label and URL cannot carry a raw `<`, `>` or quote. Unmatched delimiters
//! stay literal.

use crate::escape::escape;
use maud::PreEscaped;
use regex::Regex;
use std::sync::LazyLock;

/// Inline style applied to every rendered link. Uses the accent gold so that
/// links follow a card's color variant.
pub const LINK_STYLE: &str = "color:#b48a19;text-decoration:underline;";

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("emphasis pattern is valid"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});

/// Render user text with emphasis, links and line breaks.
pub fn render_rich_text(input: &str) -> String {
    let escaped = escape(input);
    let emphasized = EMPHASIS.replace_all(&escaped, "<em>${1}</em>");
    let linked = LINK.replace_all(
        &emphasized,
        format!(r#"<a href="${{2}}" style="{LINK_STYLE}">${{1}}</a>"#).as_str(),
    );
    line_breaks(&linked)
}

/// Escape user text and keep its line breaks, without emphasis or links.
pub fn render_multiline(input: &str) -> String {
    line_breaks(&escape(input))
}

fn line_breaks(text: &str) -> String {
    text.replace("\r\n", "<br>").replace('\n', "<br>")
}

/// [`render_rich_text`] as maud markup.
pub fn rich(input: &str) -> PreEscaped<String> {
    PreEscaped(render_rich_text(input))
}

/// [`render_multiline`] as maud markup.
pub fn multiline(input: &str) -> PreEscaped<String> {
    PreEscaped(render_multiline(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis() {
        assert_eq!(render_rich_text("*a*"), "<em>a</em>");
    }

    #[test]
    fn link() {
        assert_eq!(
            render_rich_text("[x](y)"),
            r#"<a href="y" style="color:#b48a19;text-decoration:underline;">x</a>"#
        );
    }

    #[test]
    fn newline() {
        assert_eq!(render_rich_text("a\nb"), "a<br>b");
    }

    #[test]
    fn crlf_is_a_single_break() {
        assert_eq!(render_rich_text("a\r\nb"), "a<br>b");
    }

    #[test]
    fn empty_input() {
        assert_eq!(render_rich_text(""), "");
    }

    #[test]
    fn multiple_spans_on_one_line() {
        assert_eq!(
            render_rich_text("*one* and *two*"),
            "<em>one</em> and <em>two</em>"
        );
        let out = render_rich_text("[a](1) [b](2)");
        assert!(out.contains(r#"href="1""#));
        assert!(out.contains(r#"href="2""#));
        assert_eq!(out.matches("<a ").count(), 2);
    }

    #[test]
    fn unmatched_star_is_literal() {
        assert_eq!(render_rich_text("5 * 3"), "5 * 3");
    }

    #[test]
    fn unmatched_brackets_are_literal() {
        assert_eq!(render_rich_text("[label](no close"), "[label](no close");
        assert_eq!(render_rich_text("[label] (x)"), "[label] (x)");
    }

    #[test]
    fn script_tags_are_escaped() {
        let out = render_rich_text("<script>alert(1)</script>");
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(!out.contains("<script"));
    }

    #[test]
    fn link_url_cannot_break_out_of_attribute() {
        let out = render_rich_text(r#"[x](" onmouseover="alert(1))"#);
        assert!(!out.contains(r#"" onmouseover"#));
        assert!(out.contains("&quot; onmouseover=&quot;alert(1"));
    }

    #[test]
    fn emphasis_inside_link_label() {
        let out = render_rich_text("[*hot*](https://example.com)");
        assert_eq!(
            out,
            r#"<a href="https://example.com" style="color:#b48a19;text-decoration:underline;"><em>hot</em></a>"#
        );
    }

    #[test]
    fn multiline_keeps_stars_literal() {
        assert_eq!(render_multiline("*a*\n<b>"), "*a*<br>&lt;b&gt;");
    }
}
