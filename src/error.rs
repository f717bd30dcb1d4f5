//! Centralized error handling for blockdoc
//!
//! This module provides a unified error type that covers every failure the
//! crate can surface: input validation (anchors, logo, images), export
//! preconditions, description file loading, configuration, and the sinks.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the crate.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Anchor contains characters outside `[A-Za-z0-9_-]`
    InvalidAnchor(String),

    /// Logo is not a PNG or JPEG image
    UnsupportedLogoFormat { detected: Option<String> },

    /// Logo exceeds the maximum accepted size
    LogoTooLarge { size: u64, max: u64 },

    /// Bytes could not be recognised as an image
    UnreadableImage,

    /// Image content is not an inline `data:` URI, or an image file was
    /// given for a block that is not an image
    InvalidImageSource(String),

    /// Table rows do not all match the header count
    InvalidTable { row: usize, expected: usize, found: usize },

    // ─────────────────────────────────────────────────────────────────────────
    // Export Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Attempted to export a document without blocks
    EmptyDocument,

    /// Clipboard could not be accessed or written
    Clipboard(String),

    // ─────────────────────────────────────────────────────────────────────────
    // File I/O Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to read file contents
    FileRead { path: PathBuf, source: io::Error },

    /// Failed to write file contents
    FileWrite { path: PathBuf, source: io::Error },

    // ─────────────────────────────────────────────────────────────────────────
    // Document Source Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Description file has an extension we cannot parse
    UnsupportedSource(PathBuf),

    /// Description file could not be parsed
    SourceParse {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to load configuration file
    ConfigLoad {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to save configuration file
    ConfigSave {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse configuration (invalid JSON/format)
    ConfigParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration directory not found or inaccessible
    ConfigDirNotFound,
}

// Implement From traits for convenient error conversion
impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Error::Clipboard(err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display trait implementation for user-friendly error messages
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Validation Errors
            Error::InvalidAnchor(value) => write!(
                f,
                "Invalid anchor '{}': only letters, digits, '_' and '-' are allowed",
                value
            ),
            Error::UnsupportedLogoFormat { detected } => match detected {
                Some(mime) => write!(
                    f,
                    "Unsupported logo format '{}': only PNG and JPEG are accepted",
                    mime
                ),
                None => write!(f, "Unsupported logo format: only PNG and JPEG are accepted"),
            },
            Error::LogoTooLarge { size, max } => write!(
                f,
                "Logo is too large ({} bytes): the maximum is {} bytes",
                size, max
            ),
            Error::UnreadableImage => write!(f, "The data is not a readable image"),
            Error::InvalidImageSource(msg) => write!(f, "Invalid image source: {}", msg),
            Error::InvalidTable {
                row,
                expected,
                found,
            } => write!(
                f,
                "Table row {} has {} cells but the table has {} columns",
                row, found, expected
            ),

            // Export Errors
            Error::EmptyDocument => {
                write!(f, "Nothing to export: add at least one block first")
            }
            Error::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),

            // File I/O Errors
            Error::FileRead { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            Error::FileWrite { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }

            // Document Source Errors
            Error::UnsupportedSource(path) => write!(
                f,
                "Unsupported document source '{}': expected .json, .yaml, .yml or .toml",
                path.display()
            ),
            Error::SourceParse { path, source } => {
                write!(f, "Failed to parse '{}': {}", path.display(), source)
            }

            // Configuration Errors
            Error::ConfigLoad { path, source } => {
                write!(
                    f,
                    "Failed to load configuration from '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::ConfigSave { path, source } => {
                write!(
                    f,
                    "Failed to save configuration to '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::ConfigParse { message, .. } => {
                write!(f, "Invalid configuration format: {}", message)
            }
            Error::ConfigDirNotFound => {
                write!(f, "Configuration directory not found")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// std::error::Error trait implementation for error chaining
// ─────────────────────────────────────────────────────────────────────────────
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileRead { source, .. } | Error::FileWrite { source, .. } => Some(source),
            Error::SourceParse { source, .. }
            | Error::ConfigLoad { source, .. }
            | Error::ConfigSave { source, .. } => Some(source.as_ref()),
            Error::ConfigParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::InvalidAnchor(_)
            | Error::UnsupportedLogoFormat { .. }
            | Error::LogoTooLarge { .. }
            | Error::UnreadableImage
            | Error::InvalidImageSource(_)
            | Error::InvalidTable { .. }
            | Error::EmptyDocument
            | Error::Clipboard(_)
            | Error::UnsupportedSource(_)
            | Error::ConfigDirNotFound => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_write_error() {
        let path = PathBuf::from("/test/documento.html");
        let io_err = io::Error::new(io::ErrorKind::Other, "write failed");
        let err = Error::FileWrite {
            path: path.clone(),
            source: io_err,
        };
        assert!(matches!(err, Error::FileWrite { path: p, .. } if p == path));
    }

    #[test]
    fn test_display_invalid_anchor() {
        let err = Error::InvalidAnchor("intro!".to_string());
        let msg = err.to_string();
        assert!(msg.contains("intro!"));
        assert!(msg.contains("letters, digits"));
    }

    #[test]
    fn test_display_logo_errors() {
        let err = Error::UnsupportedLogoFormat {
            detected: Some("image/gif".to_string()),
        };
        assert!(err.to_string().contains("image/gif"));

        let err = Error::LogoTooLarge {
            size: 6_000_000,
            max: 5_242_880,
        };
        let msg = err.to_string();
        assert!(msg.contains("6000000"));
        assert!(msg.contains("5242880"));
    }

    #[test]
    fn test_display_empty_document() {
        let msg = Error::EmptyDocument.to_string();
        assert!(msg.contains("Nothing to export"));
    }

    #[test]
    fn test_display_file_read_error() {
        let err = Error::FileRead {
            path: PathBuf::from("guia.yaml"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("guia.yaml"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_display_invalid_image_source() {
        let err = Error::InvalidImageSource("not a data: URI".to_string());
        assert!(err.to_string().contains("not a data: URI"));
    }

    #[test]
    fn test_display_config_dir_not_found() {
        let err = Error::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Configuration directory not found");
    }

    #[test]
    fn test_error_source_file_write() {
        use std::error::Error as StdError;
        let err = Error::FileWrite {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_none_for_simple_variants() {
        use std::error::Error as StdError;
        assert!(Error::EmptyDocument.source().is_none());
        assert!(Error::UnreadableImage.source().is_none());
        assert!(Error::ConfigDirNotFound.source().is_none());
    }

    #[test]
    fn test_unwrap_or_warn_default_ok() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.unwrap_or_warn_default(0, "test context"), 42);
    }

    #[test]
    fn test_unwrap_or_warn_default_err() {
        let result: Result<i32> = Err(Error::EmptyDocument);
        assert_eq!(result.unwrap_or_warn_default(0, "test context"), 0);
    }
}
