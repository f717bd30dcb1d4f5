//! Export Options and Configuration
//!
//! This module defines the export targets and the options that travel with
//! an export request.

use crate::render::PageOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suggested file name of the exported document.
pub const DEFAULT_FILE_NAME: &str = "documento-html-dinamico.html";

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// Where an exported document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Write a standalone HTML file
    #[default]
    HtmlFile,
    /// Copy the same HTML string to the clipboard
    Clipboard,
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Options
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration of a single export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// The export target
    pub format: ExportFormat,

    /// File name used when no explicit output path is given
    pub file_name: String,

    /// Directory the file is written to when no explicit path is given
    pub directory: Option<PathBuf>,

    /// Page labels and content mode
    pub page: PageOptions,

    /// Whether to open the exported file afterwards
    pub open_after_export: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            directory: None,
            page: PageOptions::default(),
            open_after_export: false,
        }
    }
}

impl ExportOptions {
    /// Resolve the output path: an explicit path wins, otherwise the file
    /// name inside the export directory (or the current directory).
    pub fn output_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self
                .directory
                .as_deref()
                .unwrap_or_else(|| Path::new("."))
                .join(&self.file_name),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
