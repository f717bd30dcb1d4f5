//! Complete HTML document assembly
//!
//! This module combines the rendered blocks, the navigation menu, the optional
//! logo and one embedded stylesheet into a single self-contained HTML
//! document. Output depends only on the block sequence, the logo and the page
//! options: block ids never reach the markup.

use super::block::render_with;
use super::escape::{escape_html, ContentMode};
use super::navigation::{duplicate_anchors, extract, NavEntry};
use crate::assets::Logo;
use crate::document::Document;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Separator between content fragments (newline plus container indentation).
const CONTENT_SEPARATOR: &str = "\n    ";

// ─────────────────────────────────────────────────────────────────────────────
// Page Options
// ─────────────────────────────────────────────────────────────────────────────

/// Page-level text and rendering choices of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Document `<title>`
    pub title: String,
    /// Value of the root `lang` attribute
    pub lang: String,
    /// Heading shown above the navigation links
    pub nav_title: String,
    /// Placeholder shown when no heading has an anchor
    pub nav_empty_label: String,
    /// Optional footer line at the bottom of the content region
    pub footer: Option<String>,
    /// How block text is interpolated
    pub content_mode: ContentMode,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Documento HTML Dinâmico".to_string(),
            lang: "pt-BR".to_string(),
            nav_title: "☰ Menu de Navegação".to_string(),
            nav_empty_label: "Nenhuma navegação disponível".to_string(),
            footer: None,
            content_mode: ContentMode::Raw,
        }
    }
}

impl PageOptions {
    /// Set the content mode.
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    /// Set the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Render every block in sequence order, one fragment per line.
pub fn render_content(document: &Document, mode: ContentMode) -> String {
    document
        .iter()
        .map(|block| render_with(block, mode))
        .collect::<Vec<_>>()
        .join(CONTENT_SEPARATOR)
}

/// Build the complete HTML document.
///
/// # Arguments
///
/// * `document` - The block sequence, rendered in order
/// * `logo` - Optional logo placed above the navigation menu
/// * `options` - Page labels and content mode
///
/// # Returns
///
/// A UTF-8 document starting with `<!DOCTYPE html>` and ending with `</html>`.
pub fn assemble(document: &Document, logo: Option<&Logo>, options: &PageOptions) -> String {
    let entries = extract(document);
    for anchor in duplicate_anchors(&entries) {
        warn!("Anchor '{}' is used by more than one heading", anchor);
    }
    debug!(
        "Assembling document: {} blocks, {} navigation entries, logo: {}",
        document.len(),
        entries.len(),
        logo.is_some()
    );

    let content = render_content(document, options.content_mode);
    let navigation = navigation_html(&entries, options);
    let logo_html = logo.map(logo_html).unwrap_or_default();
    let footer = options
        .footer
        .as_deref()
        .map(|text| {
            format!(
                "\n    \n    <div class=\"footer\">\n      <p>{}</p>\n    </div>",
                escape_html(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="blockdoc">
  <title>{title}</title>
  <style>
{stylesheet}
  </style>
</head>
<body>
  <div id="sidebar">
{logo}
    <div class="nav-body">
      <div class="nav-title" onclick="window.scrollTo({{ top: 0, behavior: 'smooth' }})">{nav_title}</div>
{navigation}
    </div>
  </div>

  <div class="container">
    {content}{footer}
  </div>
</body>
</html>"#,
        lang = escape_html(&options.lang),
        title = escape_html(&options.title),
        stylesheet = STYLESHEET,
        logo = logo_html,
        nav_title = escape_html(&options.nav_title),
        navigation = navigation,
        content = content,
        footer = footer,
    )
}

/// One link per entry, or a single placeholder when there are none.
fn navigation_html(entries: &[NavEntry], options: &PageOptions) -> String {
    if entries.is_empty() {
        return format!(
            r#"      <div class="nav-empty">{}</div>"#,
            escape_html(&options.nav_empty_label)
        );
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                r##"      <a href="#{}" class="button">{}</a>"##,
                entry.anchor,
                options.content_mode.apply(&entry.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn logo_html(logo: &Logo) -> String {
    format!(
        "    <div class=\"nav-header\">\n      <img src=\"{}\" alt=\"Logo\">\n    </div>",
        escape_html(logo.as_str())
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Stylesheet
// ─────────────────────────────────────────────────────────────────────────────

/// The single embedded stylesheet. Blocks are styled only through structural
/// class names (image sizes, `content-image`).
const STYLESHEET: &str = r#"    #sidebar {
      display: flex;
      flex-direction: column;
      height: 100%;
      width: 240px;
      position: fixed;
      top: 0;
      left: 0;
      bottom: 0;
      background: linear-gradient(180deg, #fdfdfd, #f0f0f0);
      border-right: 1px solid #ddd;
      box-shadow: 2px 0 5px rgba(0,0,0,0.05);
      font-family: "Segoe UI", sans-serif;
      z-index: 1000;
      overflow-y: auto;
    }

    #sidebar .nav-header {
      text-align: center;
      padding: 2px 0;
    }

    #sidebar .nav-header img {
      width: 220px;
      opacity: 0.9;
      transition: 0.3s;
    }

    #sidebar .nav-header img:hover {
      opacity: 1;
    }

    #sidebar .nav-body {
      flex-grow: 1;
      display: flex;
      flex-direction: column;
      justify-content: flex-start;
    }

    #sidebar .nav-title {
      text-align: center;
      font-weight: bold;
      color: #333;
      margin: 10px 0;
      font-size: 1.1em;
      cursor: pointer;
      user-select: none;
    }

    #sidebar .nav-empty {
      text-align: center;
      color: #888;
      font-style: italic;
      padding: 10px;
    }

    #sidebar a.button {
      display: block;
      width: 80%;
      margin: 4px auto;
      padding: 10px;
      text-align: center;
      border: none;
      border-radius: 8px;
      background-color: #10608F;
      color: white;
      font-weight: 500;
      text-decoration: none;
      transition: background 0.3s, transform 0.1s;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }

    #sidebar a.button:hover {
      background-color: #0e5078;
      transform: scale(1.03);
      cursor: pointer;
    }

    body {
      font-family: Arial, sans-serif;
      line-height: 1.6;
      margin: 20px;
      padding: 20px;
      background-color: #f4f4f4;
    }

    h1, h2, h3 {
      color: #333;
    }

    p {
      margin-bottom: 10px;
    }

    .container {
      max-width: 900px;
      margin: auto;
      margin-left: 280px;
      background: white;
      padding: 20px 20px 20px 40px;
      border-radius: 8px;
      box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      padding: 10px;
      border: 1px solid #ddd;
      text-align: left;
    }

    th {
      background: #007bff;
      color: white;
    }

    a {
      color: #007bff;
      text-decoration: none;
      font-weight: bold;
    }

    a:hover {
      text-decoration: underline;
    }

    .content-image {
      display: block;
      max-width: 100%;
      height: auto;
      margin: 10px auto;
      border: 1px solid #ccc;
      border-radius: 6px;
      box-shadow: 0 2px 6px rgba(0,0,0,0.3);
    }

    .img-small { width: 250px; }
    .img-medium { width: 600px; }
    .img-large { width: 700px; }

    .footer {
      margin-top: 40px;
      padding: 20px 0;
      border-top: 1px solid #ddd;
      text-align: center;
    }

    .footer p {
      margin: 0;
      color: #666;
      font-size: 0.9em;
      font-style: italic;
    }

    @media (max-width: 768px) {
      #sidebar {
        position: relative;
        width: 100%;
        height: auto;
        border-right: none;
        border-bottom: 1px solid #ddd;
        box-shadow: 0 2px 10px rgba(0,0,0,0.1);
      }

      .container {
        margin-left: 0;
        padding: 20px;
      }
    }"#;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
