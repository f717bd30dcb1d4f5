//! Document model
//!
//! This module holds the data side of blockdoc: the block record, the ordered
//! block sequence, and the editing-time helpers that build blocks.
//!
//! # Architecture
//!
//! - `block.rs` - `Block`, `BlockType`, `Formatting`, `ImageSize`, block ids
//! - `anchor.rs` - validated heading anchors
//! - `table.rs` - rectangular table payload and its structural operations
//! - `sequence.rs` - `Document`, the ordered sequence with move/remove by id
//! - `draft.rs` - `BlockDraft`, a block being composed before commit
//! - `source.rs` - loading documents from JSON/YAML/TOML description files
//! - `stats.rs` - block counts by kind

mod anchor;
mod block;
mod draft;
mod sequence;
pub mod source;
mod stats;
mod table;

pub use anchor::{is_valid_anchor, Anchor};
pub use block::{create_block, Block, BlockId, BlockType, Formatting, ImageSize, NEUTRAL_COLOR};
pub use draft::BlockDraft;
pub use sequence::Document;
pub use source::{load_document, LoadedDocument, SourceFormat};
pub use stats::DocumentStats;
pub use table::TableData;
