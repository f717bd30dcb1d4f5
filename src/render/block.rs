//! Per-block markup
//!
//! Maps one block to its HTML fragment. Rendering is a pure, total function:
//! every block type has a defined output and degenerate input (a table block
//! without table data) renders to an empty string.

use super::escape::ContentMode;
use super::formatting::compose_with;
use crate::document::{Block, BlockType, ImageSize, TableData};

/// Alt text of content images.
const IMAGE_ALT: &str = "Imagem";

/// Render a block, interpolating its text untouched.
pub fn render(block: &Block) -> String {
    render_with(block, ContentMode::Raw)
}

/// Render a block using the given content mode.
pub fn render_with(block: &Block, mode: ContentMode) -> String {
    match block.kind() {
        BlockType::H1 => heading(1, block, mode),
        BlockType::H2 => heading(2, block, mode),
        BlockType::H3 => heading(3, block, mode),
        BlockType::Paragraph => format!("<p>{}</p>", text(block, mode)),
        BlockType::ListItem => format!("<ul><li>{}</li></ul>", text(block, mode)),
        BlockType::Separator => "<hr>".to_string(),
        BlockType::ImageSmall => image(ImageSize::Small, block, mode),
        BlockType::ImageMedium => image(ImageSize::Medium, block, mode),
        BlockType::ImageLarge => image(ImageSize::Large, block, mode),
        BlockType::Table => block
            .table_data()
            .map(|table| render_table(table, mode))
            .unwrap_or_default(),
    }
}

fn text(block: &Block, mode: ContentMode) -> String {
    compose_with(block.content(), block.formatting(), mode)
}

fn heading(level: u8, block: &Block, mode: ContentMode) -> String {
    // Anchors are restricted to [A-Za-z0-9_-] and need no escaping.
    let id_attr = block
        .navigation_anchor()
        .map(|anchor| format!(r#" id="{}""#, anchor))
        .unwrap_or_default();
    format!("<h{level}{id_attr}>{}</h{level}>", text(block, mode))
}

fn image(size: ImageSize, block: &Block, mode: ContentMode) -> String {
    format!(
        r#"<img src="{}" class="{} content-image" alt="{}">"#,
        mode.apply(block.content()),
        size.class_name(),
        IMAGE_ALT
    )
}

fn render_table(table: &TableData, mode: ContentMode) -> String {
    let header_row: String = table
        .headers()
        .iter()
        .map(|header| format!("<th>{}</th>", mode.apply(header)))
        .collect();
    let body_rows: String = table
        .rows()
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| format!("<td>{}</td>", mode.apply(cell)))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect();
    format!(
        "<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>",
        header_row, body_rows
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
