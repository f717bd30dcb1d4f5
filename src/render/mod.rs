//! Rendering pipeline
//!
//! Turns a [`Document`](crate::document::Document) into HTML.
//!
//! # Architecture
//!
//! - `formatting.rs` - inline formatting wrappers (bold, italic, underline, color)
//! - `block.rs` - one block to one markup fragment
//! - `navigation.rs` - side-menu entries from anchored headings
//! - `html.rs` - the complete self-contained document
//! - `escape.rs` - raw vs escaped interpolation of user text

pub mod block;
pub mod escape;
pub mod formatting;
pub mod html;
pub mod navigation;

pub use block::{render, render_with};
pub use escape::{escape_html, ContentMode};
pub use formatting::{compose, compose_with};
pub use html::{assemble, render_content, PageOptions};
pub use navigation::{extract, NavEntry};
