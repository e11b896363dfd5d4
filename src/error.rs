//! Error types for mdocx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting or inspecting documents.
///
/// Malformed Markdown tables are not errors: they are resolved by the
/// parser's row policy and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// The source file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing the ZIP container of a .docx package.
    #[error("Archive error: {0}")]
    Archive(String),

    /// The WordprocessingML part could not be parsed.
    #[error("XML error: {0}")]
    Xml(String),

    /// The file format is not handled by any converter.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering (DOCX, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an error for a failed read of `path`, mapping a missing file
    /// to [`Error::NotFound`].
    pub fn from_read(err: io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path.into())
        } else {
            Error::Io(err)
        }
    }

    /// Wrap any XML reader error.
    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        Error::Xml(err.to_string())
    }

    /// Whether this error means the source was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound(PathBuf::from("missing.md"));
        assert_eq!(err.to_string(), "File not found: missing.md");

        let err = Error::UnsupportedFormat("pdf".to_string());
        assert_eq!(err.to_string(), "Unsupported format: pdf");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_read_maps_not_found() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::from_read(io_err, "a.md");
        assert!(err.is_not_found());

        let io_err = io::Error::new(io::ErrorKind::InvalidData, "bad utf-8");
        let err = Error::from_read(io_err, "a.md");
        assert!(matches!(err, Error::Io(_)));
    }
}
