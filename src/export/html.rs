//! HTML File Export
//!
//! Applies the export precondition (a document must have at least one block)
//! and writes the assembled document to disk as UTF-8.

use crate::assets::Logo;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::render::{assemble, PageOptions};
use log::info;
use std::fs;
use std::path::Path;

/// Assemble the document for export.
///
/// # Errors
///
/// Returns `Error::EmptyDocument` without rendering anything when the
/// document has no blocks.
pub fn render_export(document: &Document, logo: Option<&Logo>, page: &PageOptions) -> Result<String> {
    if document.is_empty() {
        return Err(Error::EmptyDocument);
    }
    Ok(assemble(document, logo, page))
}

/// Export the document to an HTML file.
///
/// # Arguments
///
/// * `document` - The block sequence to export
/// * `logo` - Optional sidebar logo
/// * `page` - Page labels and content mode
/// * `output_path` - Path of the HTML file to write
///
/// # Returns
///
/// Ok(()) on success, or an error.
pub fn export_to_html_file(
    document: &Document,
    logo: Option<&Logo>,
    page: &PageOptions,
    output_path: &Path,
) -> Result<()> {
    let html = render_export(document, logo, page)?;

    fs::write(output_path, html).map_err(|source| Error::FileWrite {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!("Exported HTML to: {}", output_path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
