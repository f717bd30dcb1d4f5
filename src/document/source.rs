//! Document description files
//!
//! A description file lists the blocks of a document (and optionally a logo)
//! in JSON, YAML or TOML. Loading one plays the part of the editing
//! collaborator: every block goes through the same constructors and
//! validation an interactive editor would use.
//!
//! ```toml
//! logo = "assets/logo.png"
//!
//! [[blocks]]
//! type = "h1"
//! content = "Introdução"
//! anchor = "intro"
//!
//! [[blocks]]
//! type = "image_medium"
//! image = "assets/diagram.png"
//! ```

use super::anchor::Anchor;
use super::block::{create_block, Block, BlockType, Formatting};
use super::sequence::Document;
use super::table::TableData;
use crate::assets::{load_image_file, DataUri, Logo};
use crate::error::{Error, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Source Format
// ─────────────────────────────────────────────────────────────────────────────

/// Supported description file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Toml,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            "toml" => Some(SourceFormat::Toml),
            _ => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Description Schema
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentSource {
    #[serde(default)]
    logo: Option<PathBuf>,
    #[serde(default)]
    blocks: Vec<BlockSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockSource {
    #[serde(rename = "type")]
    kind: BlockType,
    #[serde(default)]
    content: String,
    #[serde(default)]
    image: Option<PathBuf>,
    #[serde(default)]
    anchor: Option<String>,
    #[serde(default)]
    formatting: Option<Formatting>,
    #[serde(default)]
    table: Option<TableSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableSource {
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

/// A document and logo built from a description file.
#[derive(Debug, Clone, Default)]
pub struct LoadedDocument {
    pub document: Document,
    pub logo: Option<Logo>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load a description file, resolving image and logo paths relative to it.
///
/// # Errors
///
/// - `Error::UnsupportedSource` for unknown extensions
/// - `Error::FileRead` / `Error::SourceParse` for unreadable or malformed files
/// - validation errors (`InvalidAnchor`, `InvalidTable`, `InvalidImageSource`,
///   logo and image errors) for blocks that an editor would have refused
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| Error::UnsupportedSource(path.to_path_buf()))?;

    debug!("Loading document description from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let loaded = parse_document(&contents, format, base_dir).map_err(|err| match err {
        Error::SourceParse { source, .. } => Error::SourceParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(
        "Loaded {} blocks from {}{}",
        loaded.document.len(),
        path.display(),
        if loaded.logo.is_some() { " (with logo)" } else { "" }
    );
    Ok(loaded)
}

/// Parse description text. Relative image and logo paths resolve against
/// `base_dir`.
pub fn parse_document(contents: &str, format: SourceFormat, base_dir: &Path) -> Result<LoadedDocument> {
    let source = deserialize(contents, format)?;

    let logo = source
        .logo
        .map(|logo_path| Logo::from_file(&base_dir.join(logo_path)))
        .transpose()?;

    let document = source
        .blocks
        .into_iter()
        .map(|block| build_block(block, base_dir))
        .collect::<Result<Document>>()?;

    Ok(LoadedDocument { document, logo })
}

fn deserialize(contents: &str, format: SourceFormat) -> Result<DocumentSource> {
    let parsed: std::result::Result<DocumentSource, Box<dyn std::error::Error + Send + Sync>> =
        match format {
            SourceFormat::Json => serde_json::from_str(contents).map_err(Into::into),
            SourceFormat::Yaml => serde_yaml::from_str(contents).map_err(Into::into),
            SourceFormat::Toml => toml::from_str(contents).map_err(Into::into),
        };
    parsed.map_err(|source| Error::SourceParse {
        path: PathBuf::new(),
        source,
    })
}

fn build_block(source: BlockSource, base_dir: &Path) -> Result<Block> {
    let anchor = source
        .anchor
        .filter(|anchor| !anchor.is_empty())
        .map(Anchor::new)
        .transpose()?;

    let content = match (source.image, source.kind.is_image()) {
        (Some(image_path), true) => load_image_file(&base_dir.join(image_path))?.into_string(),
        (Some(image_path), false) => {
            return Err(Error::InvalidImageSource(format!(
                "'{}' given for a {:?} block, which does not take an image file",
                image_path.display(),
                source.kind
            )));
        }
        // Inline image content must already be a data URI.
        (None, true) => DataUri::parse(source.content)
            .ok_or_else(|| {
                Error::InvalidImageSource(format!(
                    "{:?} block content must be a data: URI or an `image` file path",
                    source.kind
                ))
            })?
            .into_string(),
        (None, false) => source.content,
    };

    let table = source
        .table
        .map(|table| TableData::new(table.headers, table.rows))
        .transpose()?;

    Ok(create_block(
        source.kind,
        content,
        anchor,
        None,
        table,
        source.formatting,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
