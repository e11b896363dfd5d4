//! Rendering result with metadata and statistics.

use crate::model::{Block, Document, Metadata};
use crate::parser::ParseReport;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The rendered content (a .docx package, UTF-8 text, etc.)
    pub content: Vec<u8>,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: Vec<u8>, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while converting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of whole-line bold paragraphs rendered
    pub bold_line_count: u32,

    /// Number of plain paragraphs rendered
    pub paragraph_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of table data rows rendered
    pub table_row_count: u32,

    /// Table rows dropped by the parser
    pub dropped_row_count: u32,

    /// Table rows padded or truncated to the header width
    pub padded_row_count: u32,

    /// Table blocks that produced no table
    pub discarded_table_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every block of a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { text, .. } => {
                self.heading_count += 1;
                self.count_text(text);
            }
            Block::BoldLine { text } => {
                self.bold_line_count += 1;
                self.count_text(text);
            }
            Block::Paragraph { text } => {
                self.paragraph_count += 1;
                self.count_text(text);
            }
            Block::Table(table) => {
                self.table_count += 1;
                self.table_row_count += table.row_count() as u32;
                self.count_text(&table.plain_text());
            }
        }
    }

    /// Record what the parser dropped.
    pub fn add_parse_report(&mut self, report: &ParseReport) {
        self.dropped_row_count += report.dropped_rows as u32;
        self.padded_row_count += report.padded_rows as u32;
        self.discarded_table_count += report.discarded_tables as u32;
    }

    /// Add word count from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count + self.bold_line_count + self.paragraph_count + self.table_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.heading_count += other.heading_count;
        self.bold_line_count += other.bold_line_count;
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.dropped_row_count += other.dropped_row_count;
        self.padded_row_count += other.padded_row_count;
        self.discarded_table_count += other.discarded_table_count;
        self.word_count += other.word_count;
    }
}
