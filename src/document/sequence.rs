//! Ordered block sequence
//!
//! [`Document`] is the authoritative order of blocks. Every lookup goes through
//! the block id (first match wins), and every mutation is a single transition
//! under `&mut self`: a move or removal either happens completely or not at all.

use super::block::{Block, BlockId};
use super::stats::DocumentStats;
use log::debug;
use serde::Serialize;

/// An ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block at the end.
    ///
    /// Ids must be unique in the sequence; with duplicates every id-based
    /// operation acts on the first match.
    pub fn append(&mut self, block: Block) {
        debug!("Appending block {} ({:?})", block.id(), block.kind());
        self.blocks.push(block);
    }

    /// Position of the first block with `id`.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.position(id).map(|index| &self.blocks[index])
    }

    /// Swap the block with its predecessor.
    ///
    /// Returns `false` (and leaves the sequence untouched) when the id is
    /// unknown or the block is already first.
    pub fn move_up(&mut self, id: BlockId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.blocks.swap(index - 1, index);
                debug!("Moved block {} up to position {}", id, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Swap the block with its successor.
    ///
    /// Returns `false` (and leaves the sequence untouched) when the id is
    /// unknown or the block is already last.
    pub fn move_down(&mut self, id: BlockId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.blocks.len() => {
                self.blocks.swap(index, index + 1);
                debug!("Moved block {} down to position {}", id, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Remove the block with `id`, keeping the relative order of the others.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let index = self.position(id)?;
        debug!("Removing block {} at position {}", id, index);
        Some(self.blocks.remove(index))
    }

    /// Remove every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block counts by kind.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::from_document(self)
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
