//! In-progress block composition
//!
//! `BlockDraft` holds what the editing collaborator is filling in before a
//! block is committed to the document: the selected type, content, anchor,
//! formatting flags and the table being composed. Table editing happens here,
//! before the block exists, so committed blocks never change.

use super::anchor::{is_valid_anchor, Anchor};
use super::block::{create_block, Block, BlockType, Formatting};
use super::table::TableData;
use crate::assets::DataUri;
use crate::error::{Error, Result};
use log::debug;

/// A block being composed.
#[derive(Debug, Clone, Default)]
pub struct BlockDraft {
    kind: BlockType,
    content: String,
    anchor: String,
    formatting: Formatting,
    table: TableData,
}

impl BlockDraft {
    /// Start a draft of the given type.
    pub fn new(kind: BlockType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> BlockType {
        self.kind
    }

    /// Change the selected type. Content and anchor are kept.
    pub fn set_type(&mut self, kind: BlockType) {
        self.kind = kind;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Use an uploaded image as the draft content.
    pub fn set_image(&mut self, source: DataUri) {
        self.content = source.into_string();
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Replace the anchor input.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAnchor` when `value` contains a character outside
    /// `[A-Za-z0-9_-]`; the previous anchor is kept unchanged.
    pub fn set_anchor(&mut self, value: &str) -> Result<()> {
        if !is_valid_anchor(value) {
            debug!("Rejected anchor input '{}'", value);
            return Err(Error::InvalidAnchor(value.to_string()));
        }
        self.anchor = value.to_string();
        Ok(())
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    pub fn set_formatting(&mut self, formatting: Formatting) {
        self.formatting = formatting;
    }

    pub fn table(&self) -> &TableData {
        &self.table
    }

    /// Mutable access to the table being composed.
    pub fn table_mut(&mut self) -> &mut TableData {
        &mut self.table
    }

    /// Separators and tables can always be committed. Images need a `data:`
    /// URI; every other type needs non-blank content.
    pub fn can_commit(&self) -> bool {
        match self.kind {
            BlockType::Separator | BlockType::Table => true,
            kind if kind.is_image() => DataUri::parse(self.content.as_str()).is_some(),
            _ => !self.content.trim().is_empty(),
        }
    }

    /// Build the block and reset the per-block inputs.
    ///
    /// Returns `None` when [`can_commit`](Self::can_commit) is false. The draft
    /// table is kept so a similar table can be added next.
    pub fn commit(&mut self) -> Option<Block> {
        if !self.can_commit() {
            debug!("Draft of type {:?} has no content; not committing", self.kind);
            return None;
        }

        let is_table = self.kind == BlockType::Table;
        let content = if is_table {
            String::new()
        } else {
            std::mem::take(&mut self.content)
        };
        let anchor = if self.kind.is_heading() && !self.anchor.is_empty() {
            Anchor::new(self.anchor.clone()).ok()
        } else {
            None
        };
        let table = is_table.then(|| self.table.clone());
        let formatting = (self.kind.accepts_formatting() && !self.formatting.is_plain())
            .then(|| self.formatting.clone());

        let block = create_block(self.kind, content, anchor, None, table, formatting);
        debug!("Committed draft as block {} ({:?})", block.id(), block.kind());

        self.content.clear();
        self.anchor.clear();
        self.formatting = Formatting::default();
        Some(block)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ImageSize;

    #[test]
    fn test_invalid_anchor_keeps_previous_value() {
        let mut draft = BlockDraft::new(BlockType::H1);
        draft.set_anchor("intro").unwrap();
        assert!(draft.set_anchor("intro section").is_err());
        assert_eq!(draft.anchor(), "intro");
    }

    #[test]
    fn test_blank_content_cannot_commit() {
        let mut draft = BlockDraft::new(BlockType::Paragraph);
        draft.set_content("   ");
        assert!(!draft.can_commit());
        assert!(draft.commit().is_none());
    }

    #[test]
    fn test_separator_and_table_commit_without_content() {
        let mut draft = BlockDraft::new(BlockType::Separator);
        assert!(draft.commit().is_some());

        let mut draft = BlockDraft::new(BlockType::Table);
        let block = draft.commit().unwrap();
        assert_eq!(block.kind(), BlockType::Table);
        assert_eq!(block.content(), "");
        assert_eq!(block.table_data(), Some(&TableData::default()));
    }

    #[test]
    fn test_commit_heading_with_anchor() {
        let mut draft = BlockDraft::new(BlockType::H2);
        draft.set_content("Intro");
        draft.set_anchor("intro").unwrap();
        let block = draft.commit().unwrap();

        assert_eq!(block.navigation_anchor(), Some("intro"));
        assert_eq!(block.content(), "Intro");
        assert_eq!(draft.content(), "");
        assert_eq!(draft.anchor(), "");
    }

    #[test]
    fn test_anchor_dropped_for_non_headings() {
        let mut draft = BlockDraft::new(BlockType::H1);
        draft.set_anchor("intro").unwrap();
        draft.set_type(BlockType::Paragraph);
        draft.set_content("Hello");
        let block = draft.commit().unwrap();
        assert!(block.anchor().is_none());
    }

    #[test]
    fn test_formatting_only_for_text_types() {
        let mut draft = BlockDraft::new(BlockType::Paragraph);
        draft.set_content("Hello");
        draft.set_formatting(Formatting::default().bold());
        let block = draft.commit().unwrap();
        assert!(block.formatting().unwrap().bold);
        assert_eq!(draft.formatting(), &Formatting::default());

        let mut draft = BlockDraft::new(BlockType::ImageSmall);
        draft.set_content("data:image/png;base64,AAAA");
        draft.set_formatting(Formatting::default().italic());
        let block = draft.commit().unwrap();
        assert!(block.formatting().is_none());
        assert_eq!(block.image_size(), Some(ImageSize::Small));
    }

    #[test]
    fn test_image_draft_needs_data_uri() {
        let mut draft = BlockDraft::new(BlockType::ImageLarge);
        draft.set_content("https://example.com/x.png");
        assert!(!draft.can_commit());
        assert!(draft.commit().is_none());

        draft.set_image(DataUri::from_bytes("image/png", &[1, 2, 3]));
        assert!(draft.commit().is_some());
    }

    #[test]
    fn test_table_draft_survives_commit() {
        let mut draft = BlockDraft::new(BlockType::Table);
        draft.table_mut().add_column();
        let block = draft.commit().unwrap();
        assert_eq!(block.table_data().unwrap().column_count(), 3);
        assert_eq!(draft.table().column_count(), 3);
    }
}
