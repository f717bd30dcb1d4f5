//! Embedded image assets
//!
//! Images and the logo travel through the document as data URIs so the
//! exported HTML has no external references. This module turns raw image bytes
//! into [`DataUri`] values and applies the logo's acceptance rules.
//!
//! The core never decodes image payloads: only the leading magic bytes are
//! inspected to name the MIME type.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use image::ImageFormat;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;

/// Largest accepted logo, in bytes (5 MB).
pub const MAX_LOGO_BYTES: u64 = 5 * 1024 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Data URI
// ─────────────────────────────────────────────────────────────────────────────

/// An opaque `data:` URI carrying an inline payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUri(String);

impl DataUri {
    /// Encode `bytes` as a base64 data URI with the given MIME type.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// Wrap an existing URI string. Returns `None` unless it uses the `data:`
    /// scheme.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        value.starts_with("data:").then_some(Self(value))
    }

    /// The declared MIME type, if any.
    pub fn mime(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ',']).unwrap_or(rest.len());
        let mime = &rest[..end];
        (!mime.is_empty()).then_some(mime)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Upload
// ─────────────────────────────────────────────────────────────────────────────

/// Sniff the image format from its leading bytes.
fn sniff_format(bytes: &[u8]) -> Result<ImageFormat> {
    image::guess_format(bytes).map_err(|_| Error::UnreadableImage)
}

/// Convert raw image bytes into a data URI.
///
/// # Errors
///
/// Returns `Error::UnreadableImage` if the bytes are not a recognised image.
pub fn upload_image(bytes: &[u8]) -> Result<DataUri> {
    let format = sniff_format(bytes)?;
    debug!("Encoding {} byte {:?} image", bytes.len(), format);
    Ok(DataUri::from_bytes(format.to_mime_type(), bytes))
}

/// Read an image file and convert it into a data URI.
pub fn load_image_file(path: &Path) -> Result<DataUri> {
    let bytes = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    upload_image(&bytes)
}

// ─────────────────────────────────────────────────────────────────────────────
// Logo
// ─────────────────────────────────────────────────────────────────────────────

/// The document logo shown above the navigation menu.
///
/// A `Logo` only exists once its source passed validation, so a rejected
/// upload can never replace the logo the caller already holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo(DataUri);

impl Logo {
    /// Validate logo bytes and encode them.
    ///
    /// # Errors
    ///
    /// - `Error::LogoTooLarge` when the input exceeds [`MAX_LOGO_BYTES`]
    /// - `Error::UnsupportedLogoFormat` when the image is not PNG or JPEG
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_logo_size(bytes.len() as u64)?;

        let format = image::guess_format(bytes).map_err(|_| Error::UnsupportedLogoFormat {
            detected: None,
        })?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
            return Err(Error::UnsupportedLogoFormat {
                detected: Some(format.to_mime_type().to_string()),
            });
        }

        info!("Logo accepted ({:?}, {} bytes)", format, bytes.len());
        Ok(Self(DataUri::from_bytes(format.to_mime_type(), bytes)))
    }

    /// Validate and encode a logo file.
    ///
    /// The size limit is checked against the file metadata before reading.
    pub fn from_file(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        check_logo_size(metadata.len())?;

        let bytes = fs::read(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn data_uri(&self) -> &DataUri {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn check_logo_size(size: u64) -> Result<()> {
    if size > MAX_LOGO_BYTES {
        return Err(Error::LogoTooLarge {
            size,
            max: MAX_LOGO_BYTES,
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
    const GIF_MAGIC: &[u8] = b"GIF89a\x01\x00\x01\x00";

    #[test]
    fn test_data_uri_from_bytes() {
        let uri = DataUri::from_bytes("image/png", b"abc");
        assert_eq!(uri.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(uri.mime(), Some("image/png"));
    }

    #[test]
    fn test_data_uri_parse() {
        assert!(DataUri::parse("data:image/jpeg;base64,AAAA").is_some());
        assert!(DataUri::parse("https://example.com/a.png").is_none());
        assert_eq!(DataUri::parse("data:,hello").unwrap().mime(), None);
    }

    #[test]
    fn test_upload_image_detects_mime() {
        let uri = upload_image(PNG_MAGIC).unwrap();
        assert!(uri.as_str().starts_with("data:image/png;base64,"));

        let uri = upload_image(GIF_MAGIC).unwrap();
        assert_eq!(uri.mime(), Some("image/gif"));
    }

    #[test]
    fn test_upload_image_rejects_non_image() {
        let err = upload_image(b"just some text").unwrap_err();
        assert!(matches!(err, Error::UnreadableImage));
    }

    #[test]
    fn test_logo_accepts_png_and_jpeg() {
        let logo = Logo::from_bytes(PNG_MAGIC).unwrap();
        assert_eq!(logo.data_uri().mime(), Some("image/png"));

        let logo = Logo::from_bytes(JPEG_MAGIC).unwrap();
        assert_eq!(logo.data_uri().mime(), Some("image/jpeg"));
    }

    #[test]
    fn test_logo_rejects_other_formats() {
        let err = Logo::from_bytes(GIF_MAGIC).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedLogoFormat { detected: Some(ref m) } if m == "image/gif"
        ));

        let err = Logo::from_bytes(b"plain text").unwrap_err();
        assert!(matches!(err, Error::UnsupportedLogoFormat { detected: None }));
    }

    #[test]
    fn test_logo_rejects_oversized_input() {
        let mut bytes = PNG_MAGIC.to_vec();
        bytes.resize(MAX_LOGO_BYTES as usize + 1, 0);
        let err = Logo::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::LogoTooLarge { .. }));
    }

    #[test]
    fn test_rejected_logo_leaves_current_logo() {
        let mut current = Some(Logo::from_bytes(PNG_MAGIC).unwrap());
        let before = current.clone();
        if let Ok(logo) = Logo::from_bytes(GIF_MAGIC) {
            current = Some(logo);
        }
        assert_eq!(current, before);
    }

    #[test]
    fn test_logo_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PNG_MAGIC).unwrap();
        let logo = Logo::from_file(file.path()).unwrap();
        assert!(logo.as_str().starts_with("data:image/png"));
    }

    #[test]
    fn test_load_missing_image_file() {
        let err = load_image_file(Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
