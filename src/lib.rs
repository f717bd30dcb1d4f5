//! blockdoc - block-based documents rendered to standalone HTML
//!
//! A document is an ordered sequence of typed blocks (headings, paragraphs,
//! list items, separators, images, tables). It renders to a single HTML file
//! with inline CSS, an optional logo, and a side navigation built from the
//! anchored headings.

pub mod assets;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod render;

pub use assets::{upload_image, DataUri, Logo};
pub use document::{create_block, Block, BlockDraft, BlockId, BlockType, Document, Formatting, TableData};
pub use error::{Error, Result};
pub use export::{export, ExportFormat, ExportOptions, ExportOutcome};
pub use render::{assemble, ContentMode, PageOptions};
