//! Document Export Module for blockdoc
//!
//! This module hands a finished HTML document to one of its sinks.
//!
//! # Supported Export Formats
//!
//! - **HTML File**: Complete self-contained document written as UTF-8
//! - **Clipboard**: The same HTML source copied as text
//!
//! # Architecture
//!
//! - `options.rs` - Export configuration and options
//! - `html.rs` - Export precondition and file writing
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;
pub mod html;
pub mod options;

pub use clipboard::{copy_document_to_clipboard, copy_text_to_clipboard};
pub use html::{export_to_html_file, render_export};
pub use options::{ExportFormat, ExportOptions, DEFAULT_FILE_NAME};

use crate::assets::Logo;
use crate::document::Document;
use crate::error::Result;
use log::warn;
use std::path::{Path, PathBuf};

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The document was written to this file
    File(PathBuf),
    /// The document was copied to the clipboard
    Clipboard,
}

/// Export a document according to `options`.
///
/// For file exports `output` overrides the path derived from the options.
/// Failing to open the written file is logged, not returned.
pub fn export(
    document: &Document,
    logo: Option<&Logo>,
    options: &ExportOptions,
    output: Option<&Path>,
) -> Result<ExportOutcome> {
    match options.format {
        ExportFormat::HtmlFile => {
            let path = options.output_path(output);
            export_to_html_file(document, logo, &options.page, &path)?;

            if options.open_after_export {
                if let Err(e) = open::that(&path) {
                    warn!("Failed to open exported file: {}", e);
                }
            }
            Ok(ExportOutcome::File(path))
        }
        ExportFormat::Clipboard => {
            copy_document_to_clipboard(document, logo, &options.page)?;
            Ok(ExportOutcome::Clipboard)
        }
    }
}
