//! # mdocx
//!
//! Markdown to Word (`.docx`) conversion for QA documentation.
//!
//! This library parses a restricted, line-oriented Markdown subset into an
//! ordered document model and writes it as a WordprocessingML package. It
//! also reads table cells back out of existing `.docx` files (to extract
//! requirement ids from a traceability matrix) and renders a static
//! requirement to OWASP Top 10 mapping report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdocx::{parse_file, render};
//!
//! fn main() -> mdocx::Result<()> {
//!     // Parse a Markdown file
//!     let doc = parse_file("test-plan.md")?;
//!
//!     // Write it as a Word document
//!     render::write_docx(&doc, "test-plan.docx", &render::RenderOptions::default())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown subset**: `#`/`##`/`###` headings, whole-line bold, paragraphs, pipe tables
//! - **Row policies**: drop (default), pad or reject table rows with the wrong cell count
//! - **Multiple output formats**: DOCX, plain text, JSON
//! - **Batch conversion**: per-file reporting, optionally parallel with Rayon
//! - **Requirement extraction**: table cells from existing `.docx` files

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_batch, output_path_for, BatchReport, ConvertOptions, ConvertResult,
    ConverterRegistry, DocumentConverter, MarkdownConverter, OutputFormat,
};
pub use detect::{detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use extract::{extract_requirements, read_tables, RequirementIndex};
pub use model::{Block, Document, HeadingLevel, Metadata, Table};
pub use parser::{MarkdownParser, ParseOptions, ParseReport, RowPolicy};
pub use render::{ConversionStats, FontSizes, JsonFormat, RenderOptions};

use std::path::Path;

/// Parse a Markdown file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use mdocx::parse_file;
///
/// let doc = parse_file("test-plan.md").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = MarkdownParser::open(path)?;
    Ok(parser.parse())
}

/// Parse a Markdown file with custom options.
///
/// # Example
///
/// ```no_run
/// use mdocx::{parse_file_with_options, ParseOptions, RowPolicy};
///
/// let options = ParseOptions::new().with_row_policy(RowPolicy::Pad);
/// let doc = parse_file_with_options("test-plan.md", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = MarkdownParser::open_with_options(path, options)?;
    Ok(parser.parse())
}

/// Parse Markdown text held in memory.
///
/// # Example
///
/// ```
/// use mdocx::{parse_str, Block, HeadingLevel};
///
/// let doc = parse_str("# Title\n\nSome text.");
/// assert_eq!(doc.blocks[0], Block::heading(HeadingLevel::H1, "Title"));
/// ```
pub fn parse_str(source: &str) -> Document {
    MarkdownParser::from_text(source).parse()
}

/// Parse Markdown from UTF-8 bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = MarkdownParser::from_bytes_with_options(data, ParseOptions::default())?;
    Ok(parser.parse())
}

/// Convert a Markdown file to a `.docx` file at `output`.
///
/// # Example
///
/// ```no_run
/// use mdocx::convert_file;
///
/// convert_file("test-plan.md", "test-plan.docx").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertResult> {
    convert::convert_file(input.as_ref(), output.as_ref(), &ConvertOptions::default())
}

/// Convert a Markdown file to in-memory `.docx` bytes.
pub fn to_docx<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let doc = parse_file(path)?;
    render::to_docx(&doc, &RenderOptions::default())
}

/// Convert a Markdown file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc))
}

/// Convert a Markdown file to JSON.
///
/// # Example
///
/// ```no_run
/// use mdocx::{to_json, JsonFormat};
///
/// let json = to_json("test-plan.md", JsonFormat::Pretty).unwrap();
/// std::fs::write("test-plan.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting Markdown documents.
///
/// # Example
///
/// ```no_run
/// use mdocx::{Mdocx, RowPolicy};
///
/// Mdocx::new()
///     .with_row_policy(RowPolicy::Pad)
///     .with_title("Test Plan")
///     .parse("test-plan.md")?
///     .write_docx("test-plan.docx")?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub struct Mdocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set how table rows with the wrong cell count are handled.
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.parse_options = self.parse_options.with_row_policy(policy);
        self
    }

    /// NFC-normalize the source before parsing.
    pub fn normalize_unicode(mut self) -> Self {
        self.parse_options = self.parse_options.with_unicode_normalization(true);
        self
    }

    /// Set the document title written to the package properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the font size tiers.
    pub fn with_sizes(mut self, sizes: FontSizes) -> Self {
        self.render_options = self.render_options.with_sizes(sizes);
        self
    }

    /// Set the table style id.
    pub fn with_table_style(mut self, style: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_table_style(style);
        self
    }

    /// Parse a Markdown file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<MdocxResult> {
        let parser = MarkdownParser::open_with_options(path, self.parse_options)?;
        let (document, report) = parser.parse_with_report();
        Ok(MdocxResult {
            document,
            report,
            render_options: self.render_options,
        })
    }

    /// Parse Markdown text held in memory.
    pub fn parse_str(self, source: &str) -> MdocxResult {
        let parser = MarkdownParser::from_text_with_options(source, self.parse_options);
        let (document, report) = parser.parse_with_report();
        MdocxResult {
            document,
            report,
            render_options: self.render_options,
        }
    }
}

impl Default for Mdocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a Markdown document.
pub struct MdocxResult {
    /// The parsed document
    pub document: Document,
    /// What the table rules dropped or altered
    pub report: ParseReport,
    /// Render options to use
    render_options: RenderOptions,
}

impl MdocxResult {
    /// Render to `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.document, &self.render_options)
    }

    /// Write a `.docx` file.
    pub fn write_docx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::write_docx(&self.document, path, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Block and parse statistics.
    pub fn stats(&self) -> ConversionStats {
        let mut stats = ConversionStats::from_document(&self.document);
        stats.add_parse_report(&self.report);
        stats
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
