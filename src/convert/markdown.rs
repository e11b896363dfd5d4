//! Markdown document converter implementation.

use crate::error::Result;
use crate::model::Document;
use crate::parser::{MarkdownParser, ParseReport};
use crate::render::{to_docx, to_json, to_text, ConversionStats, JsonFormat};
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter, OutputFormat};

/// Markdown document converter.
///
/// Converts Markdown documents to .docx packages, plain text, or JSON.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    _private: (),
}

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_document(
        &self,
        doc: Document,
        report: ParseReport,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let mut stats = ConversionStats::from_document(&doc);
        stats.add_parse_report(&report);

        let format = options.output_format;
        let content = match format {
            OutputFormat::Docx => to_docx(&doc, &options.render)?,
            OutputFormat::Text => to_text(&doc).into_bytes(),
            OutputFormat::Json => to_json(&doc, JsonFormat::Pretty)?.into_bytes(),
        };

        Ok(ConvertResult::new(content, doc)
            .with_stats(stats)
            .with_mime_type(format.mime_type()))
    }
}

impl DocumentConverter for MarkdownConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = MarkdownParser::open_with_options(path, options.parse.clone())?;
        let (doc, report) = parser.parse_with_report();
        self.convert_document(doc, report, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = MarkdownParser::from_bytes_with_options(bytes, options.parse.clone())?;
        let (doc, report) = parser.parse_with_report();
        self.convert_document(doc, report, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::{ParseOptions, RowPolicy};

    const SOURCE: &str = "# Plan\n\n| A | B |\n|---|---|\n| 1 | 2 |\n| 3 |\n\n**Scope**\nText.";

    #[test]
    fn test_markdown_converter_extensions() {
        let converter = MarkdownConverter::new();
        assert_eq!(converter.supported_extensions(), &["md", "markdown"]);
        assert!(converter.supports_extension("MD"));
        assert!(converter.supports_extension("markdown"));
        assert!(!converter.supports_extension("docx"));
        assert_eq!(converter.name(), "markdown");
    }

    #[test]
    fn test_convert_bytes_to_docx() {
        let converter = MarkdownConverter::new();
        let result = converter
            .convert_bytes(SOURCE.as_bytes(), &ConvertOptions::default())
            .unwrap();

        assert!(result.content.starts_with(b"PK\x03\x04"));
        assert_eq!(result.mime_type, OutputFormat::Docx.mime_type());
        assert_eq!(result.document.len(), 4);
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.stats.table_row_count, 1);
        assert_eq!(result.stats.dropped_row_count, 1);
    }

    #[test]
    fn test_convert_bytes_to_text_and_json() {
        let converter = MarkdownConverter::new();

        let options = ConvertOptions::new().with_format(OutputFormat::Text);
        let text = converter.convert_bytes(SOURCE.as_bytes(), &options).unwrap();
        let text = String::from_utf8(text.content).unwrap();
        assert!(text.starts_with("Plan\n\nA\tB\n1\t2"));

        let options = ConvertOptions::new().with_format(OutputFormat::Json);
        let json = converter.convert_bytes(SOURCE.as_bytes(), &options).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json.content).unwrap();
        assert_eq!(value["blocks"][0]["type"], "heading");
    }

    #[test]
    fn test_row_policy_flows_through() {
        let converter = MarkdownConverter::new();
        let options = ConvertOptions::new()
            .with_parse_options(ParseOptions::new().with_row_policy(RowPolicy::Pad))
            .with_format(OutputFormat::Json);
        let result = converter.convert_bytes(SOURCE.as_bytes(), &options).unwrap();
        assert_eq!(result.stats.table_row_count, 2);
        assert_eq!(result.stats.dropped_row_count, 0);
        assert_eq!(result.stats.padded_row_count, 1);
    }

    #[test]
    fn test_invalid_utf8() {
        let converter = MarkdownConverter::new();
        let result = converter.convert_bytes(&[0xff, 0xfe, b'#'], &ConvertOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
