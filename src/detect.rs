//! Source format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Formats mdocx knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Markdown text (`.md`, `.markdown`)
    Markdown,
    /// Word document package (`.docx`)
    Docx,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Markdown => write!(f, "Markdown"),
            SourceFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Markdown file extensions (lowercase, no dot).
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Detect the source format of a file.
///
/// Markdown is recognized by extension; a `.docx` file must also start with
/// the ZIP magic bytes.
///
/// # Example
/// ```no_run
/// use mdocx::detect::{detect_format_from_path, SourceFormat};
///
/// let format = detect_format_from_path("matrix.docx").unwrap();
/// assert_eq!(format, SourceFormat::Docx);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if MARKDOWN_EXTENSIONS.contains(&ext.as_str()) {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        return Ok(SourceFormat::Markdown);
    }

    if ext == "docx" {
        let file = File::open(path).map_err(|e| Error::from_read(e, path))?;
        let mut reader = BufReader::new(file);
        let mut header = [0u8; 4];
        reader.read_exact(&mut header)?;
        if is_zip_bytes(&header) {
            return Ok(SourceFormat::Docx);
        }
    }

    Err(Error::UnsupportedFormat(path.display().to_string()))
}

/// Check if data starts with the ZIP magic bytes.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
