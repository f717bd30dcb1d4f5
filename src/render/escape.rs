//! Markup escaping
//!
//! Block text is interpolated into the output as raw markup by default: the
//! editor inserts inline tags (`<strong>`, `<em>`, `<u>`, `<span style>`)
//! directly into content. [`ContentMode::Escaped`] instead renders user text
//! literally.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How user-provided text is placed into the generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Interpolate text untouched (trusted, pre-sanitized markup)
    #[default]
    Raw,
    /// Escape markup-significant characters so text displays literally
    Escaped,
}

impl ContentMode {
    /// Apply this mode to a piece of user text.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            ContentMode::Raw => Cow::Borrowed(text),
            ContentMode::Escaped => escape_html(text),
        }
    }
}

/// Escape `& < > " '` for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
