//! Document statistics
//!
//! Counts shown next to a document: blocks, navigation targets, headings,
//! images and tables.

use super::block::BlockType;
use super::sequence::Document;
use serde::Serialize;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// DocumentStats
// ─────────────────────────────────────────────────────────────────────────────

/// Block counts for a document.
///
/// # Example
///
/// ```ignore
/// let stats = DocumentStats::from_document(&doc);
/// println!("{} blocks, {} navigation items", stats.blocks, stats.navigation);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Total number of blocks
    pub blocks: usize,
    /// Blocks carrying a non-empty anchor
    pub navigation: usize,
    /// H1-H3 headings, anchored or not
    pub headings: usize,
    /// Image blocks of any size
    pub images: usize,
    /// Table blocks
    pub tables: usize,
}

impl DocumentStats {
    /// Count everything in a single pass over the blocks.
    pub fn from_document(document: &Document) -> Self {
        document.iter().fold(Self::default(), |mut stats, block| {
            let kind = block.kind();
            stats.blocks += 1;
            if block.navigation_anchor().is_some() {
                stats.navigation += 1;
            }
            if kind.is_heading() {
                stats.headings += 1;
            }
            if kind.is_image() {
                stats.images += 1;
            }
            if kind == BlockType::Table {
                stats.tables += 1;
            }
            stats
        })
    }
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total de blocos: {}", self.blocks)?;
        writeln!(f, "Itens de navegação: {}", self.navigation)?;
        writeln!(f, "Títulos (H1-H3): {}", self.headings)?;
        writeln!(f, "Imagens: {}", self.images)?;
        write!(f, "Tabelas: {}", self.tables)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
