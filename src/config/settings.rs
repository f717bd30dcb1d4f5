//! User settings and preferences for blockdoc
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence.

use crate::export::{ExportFormat, ExportOptions, DEFAULT_FILE_NAME};
use crate::render::PageOptions;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Labels and content mode of generated pages
    pub page: PageOptions,

    /// File name suggested for HTML exports
    pub export_file_name: String,

    /// Last directory an HTML file was exported to (always absolute)
    pub last_export_directory: Option<PathBuf>,

    /// Open the exported file with the system viewer
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page: PageOptions::default(),
            export_file_name: DEFAULT_FILE_NAME.to_string(),
            last_export_directory: None,
            open_after_export: false,
        }
    }
}

impl Settings {
    /// Remember the directory of an exported file.
    ///
    /// The directory is stored canonicalized, so a later run from another
    /// working directory still writes next to this export.
    pub fn record_export(&mut self, output: &Path) {
        let parent = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        match parent.canonicalize() {
            Ok(dir) => self.last_export_directory = Some(dir),
            Err(e) => warn!(
                "Not remembering export directory {}: {}",
                parent.display(),
                e
            ),
        }
    }

    /// Build export options for `format` from these settings.
    pub fn export_options(&self, format: ExportFormat) -> ExportOptions {
        ExportOptions {
            format,
            file_name: self.export_file_name.clone(),
            directory: self.last_export_directory.clone(),
            page: self.page.clone(),
            open_after_export: self.open_after_export,
        }
    }

    /// Clamp or replace values that would produce broken output.
    pub fn sanitize(&mut self) {
        let defaults = PageOptions::default();
        if self.page.title.trim().is_empty() {
            self.page.title = defaults.title;
        }
        if self.page.lang.trim().is_empty() {
            self.page.lang = defaults.lang;
        }
        if self.page.nav_empty_label.trim().is_empty() {
            self.page.nav_empty_label = defaults.nav_empty_label;
        }
        if self
            .page
            .footer
            .as_deref()
            .is_some_and(|footer| footer.trim().is_empty())
        {
            self.page.footer = None;
        }

        // Keep only the final path component of the export file name
        let file_name = Path::new(self.export_file_name.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
            .to_string();
        self.export_file_name = if file_name.is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else if file_name.to_lowercase().ends_with(".html") {
            file_name
        } else {
            format!("{}.html", file_name)
        };

        // Only absolute export directories are kept
        if self
            .last_export_directory
            .as_deref()
            .is_some_and(Path::is_relative)
        {
            self.last_export_directory = None;
        }
    }

    /// Parse settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
