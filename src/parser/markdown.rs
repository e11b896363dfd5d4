//! Line classifier and Markdown parser.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::{parse_table, ParseOptions};
use crate::error::{Error, Result};
use crate::model::{Block, Document, HeadingLevel};

/// Counts of content the parser let go of while building a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Table rows omitted because their cell count differed from the header
    pub dropped_rows: usize,

    /// Table rows padded or truncated to the header width
    pub padded_rows: usize,

    /// Table blocks that produced no table
    pub discarded_tables: usize,
}

impl ParseReport {
    /// Merge another report into this one.
    pub fn merge(&mut self, other: &ParseReport) {
        self.dropped_rows += other.dropped_rows;
        self.padded_rows += other.padded_rows;
        self.discarded_tables += other.discarded_tables;
    }

    /// Whether anything was lost or altered.
    pub fn is_clean(&self) -> bool {
        *self == ParseReport::default()
    }
}

/// Result of classifying the line at a cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Emitted block, if the consumed lines produced one
    pub block: Option<Block>,

    /// Number of lines consumed (always at least one)
    pub consumed: usize,

    /// What the table sub-parser dropped, if this step was a table
    pub report: ParseReport,
}

impl Step {
    fn emit(block: Block) -> Self {
        Self {
            block: Some(block),
            consumed: 1,
            report: ParseReport::default(),
        }
    }

    fn skip() -> Self {
        Self {
            block: None,
            consumed: 1,
            report: ParseReport::default(),
        }
    }
}

/// Classify the line at `cursor` and produce the next block.
///
/// Rules are tried in order: headings by raw prefix, table blocks, whole-line
/// bold, paragraphs; anything else is skipped. A table consumes every
/// following line whose trimmed form starts with `|`.
///
/// # Panics
///
/// Panics if `cursor` is out of bounds.
pub fn next_block(lines: &[&str], cursor: usize, options: &ParseOptions) -> Step {
    let line = lines[cursor];

    for level in HeadingLevel::ALL {
        if let Some(rest) = line.strip_prefix(level.marker()) {
            return Step::emit(Block::heading(level, rest.trim()));
        }
    }

    let trimmed = line.trim();

    if trimmed.starts_with('|') {
        let end = lines[cursor + 1..]
            .iter()
            .position(|l| !l.trim().starts_with('|'))
            .map_or(lines.len(), |offset| cursor + 1 + offset);
        let (table, report) = parse_table(&lines[cursor..end], options.row_policy);
        return Step {
            block: table.map(Block::Table),
            consumed: end - cursor,
            report,
        };
    }

    if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return Step::emit(Block::bold_line(&trimmed[2..trimmed.len() - 2]));
    }

    if !trimmed.is_empty()
        && !trimmed.starts_with('|')
        && !trimmed.starts_with('#')
        && !trimmed.starts_with("---")
    {
        return Step::emit(Block::paragraph(trimmed));
    }

    Step::skip()
}

/// Parse already-split lines into blocks.
pub fn parse_lines(lines: &[&str], options: &ParseOptions) -> (Vec<Block>, ParseReport) {
    let mut blocks = Vec::new();
    let mut report = ParseReport::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let step = next_block(lines, cursor, options);
        report.merge(&step.report);
        blocks.extend(step.block);
        cursor += step.consumed;
    }

    (blocks, report)
}

/// Markdown document parser.
///
/// Holds the whole source in memory; every call to [`parse`](Self::parse)
/// starts from fresh state.
pub struct MarkdownParser {
    source: String,
    path: Option<PathBuf>,
    modified: Option<DateTime<Utc>>,
    options: ParseOptions,
}

impl MarkdownParser {
    /// Open a Markdown file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a Markdown file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::from_read(e, path))?;
        let mut parser = Self::from_text_with_options(source, options);
        parser.path = Some(path.to_path_buf());
        parser.modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);
        Ok(parser)
    }

    /// Create a parser over in-memory text.
    pub fn from_text(source: impl Into<String>) -> Self {
        Self::from_text_with_options(source, ParseOptions::default())
    }

    /// Create a parser over in-memory text with custom options.
    pub fn from_text_with_options(source: impl Into<String>, options: ParseOptions) -> Self {
        let source = source.into();
        let source = if options.normalize_unicode {
            source.nfc().collect()
        } else {
            source
        };
        Self {
            source,
            path: None,
            modified: None,
            options,
        }
    }

    /// Create a parser over raw bytes, which must be UTF-8.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let source = std::str::from_utf8(data)
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        Ok(Self::from_text_with_options(source, options))
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the source into a document.
    pub fn parse(&self) -> Document {
        self.parse_with_report().0
    }

    /// Parse the source and report what the table rules dropped.
    pub fn parse_with_report(&self) -> (Document, ParseReport) {
        let lines: Vec<&str> = self.source.split('\n').collect();
        let (blocks, report) = parse_lines(&lines, &self.options);

        if !report.is_clean() {
            log::debug!(
                "{}: {} rows dropped, {} rows padded, {} tables discarded",
                self.display_name(),
                report.dropped_rows,
                report.padded_rows,
                report.discarded_tables
            );
        }

        let mut doc = Document::from_blocks(blocks);
        doc.metadata.source = self.path.clone();
        doc.metadata.created = self.modified;
        (doc, report)
    }

    fn display_name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}
