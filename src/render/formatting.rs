//! Inline formatting composition
//!
//! Wraps a block's text in its formatting markers. Wrappers are always applied
//! in the same order (bold, italic, underline, color), each around the
//! previous result, so color is the outermost wrapper and governs the visible
//! color of every inner emphasis.

use super::escape::ContentMode;
use crate::document::Formatting;

/// Compose `text` with `formatting`, interpolating text untouched.
pub fn compose(text: &str, formatting: Option<&Formatting>) -> String {
    compose_with(text, formatting, ContentMode::Raw)
}

/// Compose `text` with `formatting` using the given content mode.
///
/// In escaped mode both the text and the color value are escaped.
pub fn compose_with(text: &str, formatting: Option<&Formatting>, mode: ContentMode) -> String {
    let mut out = mode.apply(text).into_owned();
    let Some(formatting) = formatting else {
        return out;
    };

    if formatting.bold {
        out = format!("<b>{}</b>", out);
    }
    if formatting.italic {
        out = format!("<i>{}</i>", out);
    }
    if formatting.underline {
        out = format!("<u>{}</u>", out);
    }
    if formatting.has_color() {
        out = format!(
            r#"<span style="color: {}">{}</span>"#,
            mode.apply(&formatting.color),
            out
        );
    }
    out
}
