//! Heading anchors
//!
//! An anchor is the opt-in mechanism that puts a heading into the generated
//! navigation menu. Anchors are restricted to `[A-Za-z0-9_-]` so they can be
//! used verbatim as HTML `id` attributes and URL fragments.

use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Pattern every anchor must match in full.
const ANCHOR_PATTERN: &str = r"^[A-Za-z0-9_-]*$";

fn anchor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ANCHOR_PATTERN).expect("anchor pattern is a valid regex"))
}

/// Check whether `value` only contains characters accepted in an anchor.
///
/// The empty string is valid: it means "no anchor".
pub fn is_valid_anchor(value: &str) -> bool {
    anchor_regex().is_match(value)
}

/// A validated heading anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Anchor(String);

impl Anchor {
    /// Validate and wrap an anchor value.
    ///
    /// Invalid characters are never stripped; the whole value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if is_valid_anchor(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAnchor(value))
        }
    }

    /// Get the anchor as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the anchor is empty (and therefore not a navigation target).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
