//! Block model
//!
//! A [`Block`] is one content unit of a document. Blocks are built once, fully
//! populated, and never edited afterwards: the document only relocates or
//! removes them.

use super::anchor::Anchor;
use super::table::TableData;
use crate::assets::DataUri;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Neutral text color; a formatting color equal to this is not emitted.
pub const NEUTRAL_COLOR: &str = "#000000";

// ─────────────────────────────────────────────────────────────────────────────
// Block Identity
// ─────────────────────────────────────────────────────────────────────────────

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a block, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BlockId(u64);

impl BlockId {
    /// Allocate a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block Type
// ─────────────────────────────────────────────────────────────────────────────

/// The closed set of block variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum BlockType {
    H1,
    H2,
    H3,
    #[default]
    Paragraph,
    ListItem,
    Separator,
    ImageSmall,
    ImageMedium,
    ImageLarge,
    Table,
}

impl BlockType {
    /// Heading level (1-3) for heading types.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockType::H1 => Some(1),
            BlockType::H2 => Some(2),
            BlockType::H3 => Some(3),
            _ => None,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Image size for image types.
    pub fn image_size(&self) -> Option<ImageSize> {
        match self {
            BlockType::ImageSmall => Some(ImageSize::Small),
            BlockType::ImageMedium => Some(ImageSize::Medium),
            BlockType::ImageLarge => Some(ImageSize::Large),
            _ => None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.image_size().is_some()
    }

    /// Whether inline formatting applies to this type.
    pub fn accepts_formatting(&self) -> bool {
        matches!(
            self,
            BlockType::H1
                | BlockType::H2
                | BlockType::H3
                | BlockType::Paragraph
                | BlockType::ListItem
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Size
// ─────────────────────────────────────────────────────────────────────────────

/// Rendered width class of an image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// CSS class carrying the width of this size.
    pub fn class_name(&self) -> &'static str {
        match self {
            ImageSize::Small => "img-small",
            ImageSize::Medium => "img-medium",
            ImageSize::Large => "img-large",
        }
    }

    /// The block type that renders an image at this size.
    pub fn block_type(&self) -> BlockType {
        match self {
            ImageSize::Small => BlockType::ImageSmall,
            ImageSize::Medium => BlockType::ImageMedium,
            ImageSize::Large => BlockType::ImageLarge,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Whole-block inline formatting flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// CSS color value; `#000000` means "unset"
    pub color: String,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            color: NEUTRAL_COLOR.to_string(),
        }
    }
}

impl Formatting {
    /// Whether a color wrapper should be emitted for this formatting.
    pub fn has_color(&self) -> bool {
        !self.color.is_empty() && !self.color.eq_ignore_ascii_case(NEUTRAL_COLOR)
    }

    /// Whether this formatting produces no wrappers at all.
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.underline && !self.has_color()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block
// ─────────────────────────────────────────────────────────────────────────────

/// One content unit of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    id: BlockId,
    #[serde(rename = "type")]
    kind: BlockType,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchor: Option<Anchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<TableData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatting: Option<Formatting>,
}

/// Build a fully populated block with a fresh id.
///
/// Fields that are not meaningful for `kind` are stored as given and ignored by
/// the renderer. When `image_size` is omitted for an image type it is derived
/// from the type.
pub fn create_block(
    kind: BlockType,
    content: impl Into<String>,
    anchor: Option<Anchor>,
    image_size: Option<ImageSize>,
    table: Option<TableData>,
    formatting: Option<Formatting>,
) -> Block {
    Block {
        id: BlockId::next(),
        kind,
        content: content.into(),
        anchor,
        image_size: image_size.or_else(|| kind.image_size()),
        table,
        formatting,
    }
}

impl Block {
    /// A heading block of `level` 1-3.
    ///
    /// Out-of-range levels are clamped: `0` builds an `H1` and anything above
    /// `3` builds an `H3`. Pass the exact type to [`create_block`] when a
    /// clamp is not wanted.
    pub fn heading(level: u8, content: impl Into<String>, anchor: Option<Anchor>) -> Self {
        let kind = match level {
            0 | 1 => BlockType::H1,
            2 => BlockType::H2,
            _ => BlockType::H3,
        };
        create_block(kind, content, anchor, None, None, None)
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        create_block(BlockType::Paragraph, content, None, None, None, None)
    }

    pub fn list_item(content: impl Into<String>) -> Self {
        create_block(BlockType::ListItem, content, None, None, None, None)
    }

    pub fn separator() -> Self {
        create_block(BlockType::Separator, String::new(), None, None, None, None)
    }

    pub fn image(size: ImageSize, source: DataUri) -> Self {
        create_block(
            size.block_type(),
            source.into_string(),
            None,
            Some(size),
            None,
            None,
        )
    }

    pub fn table(table: TableData) -> Self {
        create_block(BlockType::Table, String::new(), None, None, Some(table), None)
    }

    /// Attach formatting while the block is still being built.
    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = Some(formatting);
        self
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockType {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    /// The anchor when it is present and non-empty.
    pub fn navigation_anchor(&self) -> Option<&str> {
        self.anchor
            .as_ref()
            .filter(|anchor| !anchor.is_empty())
            .map(Anchor::as_str)
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn table_data(&self) -> Option<&TableData> {
        self.table.as_ref()
    }

    pub fn formatting(&self) -> Option<&Formatting> {
        self.formatting.as_ref()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
