//! HTML escaping for user-supplied card values.
//!
//! Every field value that ends up in a rendered card passes through
//! [`escape`] exactly once, either directly or via the rich-text renderer.
//! The replacement table is:
//!
//! | Char | Entity   |
//! |------|----------|
//! | `&`  | `&amp;`  |
//! | `"`  | `&quot;` |
//! | `'`  | `&#39;`  |
//! | `<`  | `&lt;`   |
//! | `>`  | `&gt;`   |
//!
//! Escaping is done in a single pass over the input, so an entity inserted
//! for one character is never itself re-escaped. Applying [`escape`] twice
//! *does* double-escape; callers must escape raw input exactly once per
//! render.

use maud::PreEscaped;

/// Escape a string for use in HTML text content or a double-quoted attribute.
pub fn escape(input: impl AsRef<str>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value and hand it to maud as already-escaped markup.
///
/// Maud's own escaper leaves `'` alone; wrapping our output in
/// [`PreEscaped`] keeps a single escaping policy for every card and stops
/// maud from escaping the entities a second time.
pub fn text(input: impl AsRef<str>) -> PreEscaped<String> {
    PreEscaped(escape(input))
}
