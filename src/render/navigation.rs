//! Side-menu extraction
//!
//! Navigation entries come from headings that carry a non-empty anchor; a
//! heading without one stays out of the menu. Labels are the raw heading text,
//! never formatting-composed.

use crate::document::Document;
use serde::Serialize;
use std::collections::HashSet;

/// One entry of the generated side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Visible text (the heading's raw content)
    pub label: String,
    /// Fragment target without the leading `#`
    pub anchor: String,
}

/// Extract navigation entries in document order.
///
/// Repeated anchors are kept as-is; see [`duplicate_anchors`].
pub fn extract(document: &Document) -> Vec<NavEntry> {
    document
        .iter()
        .filter(|block| block.kind().is_heading())
        .filter_map(|block| {
            block.navigation_anchor().map(|anchor| NavEntry {
                label: block.content().to_string(),
                anchor: anchor.to_string(),
            })
        })
        .collect()
}

/// Anchors that appear on more than one entry, in first-repeat order.
pub fn duplicate_anchors(entries: &[NavEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    entries
        .iter()
        .map(|entry| entry.anchor.as_str())
        .filter(|anchor| !seen.insert(*anchor) && reported.insert(*anchor))
        .collect()
}
