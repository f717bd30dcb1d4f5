//! Clipboard Operations for HTML Export
//!
//! This module copies the exported HTML source to the system clipboard using
//! the arboard crate. The clipboard receives exactly the string the file
//! export would write.

use super::html::render_export;
use crate::assets::Logo;
use crate::document::Document;
use crate::error::Result;
use crate::render::PageOptions;
use arboard::Clipboard;
use log::info;

/// Copy the exported document to the clipboard.
///
/// The empty-document check runs before the clipboard is touched. On Linux
/// this blocks until another program takes the selection; see
/// [`copy_text_to_clipboard`].
pub fn copy_document_to_clipboard(
    document: &Document,
    logo: Option<&Logo>,
    page: &PageOptions,
) -> Result<()> {
    let html = render_export(document, logo, page)?;
    copy_text_to_clipboard(&html)?;
    info!("Copied {} bytes of HTML to clipboard", html.len());
    Ok(())
}

/// Copy plain text to clipboard.
///
/// X11 and Wayland only serve a selection while its owner is alive, so on
/// Linux the text is handed over with `wait()`: the call returns once a
/// clipboard manager or another program has taken ownership. Elsewhere the
/// system keeps the contents after the process exits.
pub fn copy_text_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        info!("Holding the clipboard selection until another program takes it");
        clipboard.set().wait().text(text)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text)?;
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
