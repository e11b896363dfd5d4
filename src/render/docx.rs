//! DOCX (WordprocessingML) rendering.
//!
//! Blocks map onto `docx-rs` builders. The package carries a style sheet
//! defining `Heading1`-`Heading3` and the table style, A4 page setup and the
//! title and creator as custom document properties.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use docx_rs::{
    AlignmentType, Docx, PageMargin, Paragraph, Run, Style, StyleType, Table as DocxTable,
    TableCell, TableRow, WidthType,
};
use quick_xml::escape::escape;

use super::{ConversionStats, FontSizes, RenderOptions, RenderResult};
use crate::error::{Error, Result};
use crate::model::{Block, Document, HeadingLevel, Table};

/// Usable text width of an A4 page with 1" margins, in twentieths of a point.
const TEXT_WIDTH_TWIPS: usize = 9026;

const A4_WIDTH_TWIPS: u32 = 11906;
const A4_HEIGHT_TWIPS: u32 = 16838;
const MARGIN_TWIPS: i32 = 1440;

/// Render a document to an in-memory .docx package.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    DocxWriter::new(options.clone()).render(doc)
}

/// Render a document to a .docx package and collect statistics.
pub fn to_docx_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    DocxWriter::new(options.clone()).render_with_stats(doc)
}

/// Render a document straight to a .docx file.
pub fn write_docx<P: AsRef<Path>>(doc: &Document, path: P, options: &RenderOptions) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    DocxWriter::new(options.clone()).write_to(doc, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// WordprocessingML package writer.
pub struct DocxWriter {
    options: RenderOptions,
    stats: ConversionStats,
}

impl DocxWriter {
    /// Create a new writer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Render a document to package bytes.
    pub fn render(mut self, doc: &Document) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.write_package(doc, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Render a document to package bytes with conversion statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let mut cursor = Cursor::new(Vec::new());
        self.write_package(doc, &mut cursor)?;
        Ok(RenderResult::new(
            cursor.into_inner(),
            doc.metadata.clone(),
            self.stats,
        ))
    }

    /// Write the package to any seekable sink.
    pub fn write_to<W: Write + Seek>(mut self, doc: &Document, writer: W) -> Result<()> {
        self.write_package(doc, writer)
    }

    fn write_package<W: Write + Seek>(&mut self, doc: &Document, writer: W) -> Result<()> {
        self.document(doc)
            .build()
            .pack(writer)
            .map_err(|e| Error::Archive(e.to_string()))
    }

    /// Assemble the `docx-rs` document for `doc`.
    pub fn document(&mut self, doc: &Document) -> Docx {
        let mut docx = self.package(doc);

        for block in &doc.blocks {
            if self.options.collect_stats {
                self.stats.add_block(block);
            }
            docx = match block {
                Block::Table(table) => docx.add_table(self.table(table)),
                _ => docx.add_paragraph(self.paragraph(block)),
            };
        }

        // A table may not be the last thing before the section properties.
        if matches!(doc.blocks.last(), Some(Block::Table(_))) {
            docx = docx.add_paragraph(Paragraph::new());
        }
        docx
    }

    fn package(&self, doc: &Document) -> Docx {
        let sizes = &self.options.sizes;
        let created = self
            .options
            .created
            .or(doc.metadata.created)
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut docx = Docx::new()
            .page_size(A4_WIDTH_TWIPS, A4_HEIGHT_TWIPS)
            .page_margin(
                PageMargin::new()
                    .top(MARGIN_TWIPS)
                    .right(MARGIN_TWIPS)
                    .bottom(MARGIN_TWIPS)
                    .left(MARGIN_TWIPS),
            )
            .default_size(half_points(sizes.body))
            .created_at(&created)
            .updated_at(&created)
            .custom_property("Creator", property_value(&self.options.creator));

        if let Some(title) = self.options.title.as_deref().or_else(|| doc.title()) {
            docx = docx.custom_property("Title", property_value(title));
        }

        for level in HeadingLevel::ALL {
            docx = docx.add_style(
                Style::new(level.style_id(), StyleType::Paragraph)
                    .name(format!("heading {}", level.as_u8()))
                    .based_on("Normal")
                    .next("Normal")
                    .bold()
                    .size(half_points(sizes.heading(level)))
                    .outline_lvl(usize::from(level.as_u8() - 1)),
            );
        }
        docx.add_style(
            Style::new(self.options.table_style.as_str(), StyleType::Table)
                .name(self.options.table_style.as_str()),
        )
    }

    fn paragraph(&self, block: &Block) -> Paragraph {
        let sizes = &self.options.sizes;
        match block {
            Block::Heading { level, text } => {
                let paragraph = Paragraph::new().style(level.style_id()).keep_next(true);
                let paragraph = match level {
                    HeadingLevel::H1 => paragraph.align(AlignmentType::Center),
                    _ => paragraph,
                };
                with_run(paragraph, text, true, sizes.heading(*level))
            }
            Block::BoldLine { text } => with_run(Paragraph::new(), text, true, sizes.body),
            Block::Paragraph { text } => with_run(Paragraph::new(), text, false, sizes.body),
            Block::Table(_) => Paragraph::new(),
        }
    }

    fn table(&self, table: &Table) -> DocxTable {
        let columns = table.column_count().max(1);
        let col_width = TEXT_WIDTH_TWIPS / columns;
        let sizes = &self.options.sizes;

        let mut rows = Vec::with_capacity(table.rows.len() + 1);
        rows.push(table_row(&table.headers, col_width, true, sizes.table_header));
        for row in &table.rows {
            rows.push(table_row(row, col_width, false, sizes.table_body));
        }

        DocxTable::new(rows)
            .style(self.options.table_style.as_str())
            .set_grid(vec![col_width; columns])
    }
}

fn table_row(cells: &[String], width: usize, bold: bool, size: f32) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .map(|text| {
                TableCell::new()
                    .width(width, WidthType::Dxa)
                    .add_paragraph(with_run(Paragraph::new(), text, bold, size))
            })
            .collect(),
    )
}

fn with_run(paragraph: Paragraph, text: &str, bold: bool, size: f32) -> Paragraph {
    if text.is_empty() {
        return paragraph;
    }
    let run = Run::new().add_text(sanitize(text)).size(half_points(size));
    let run = if bold { run.bold() } else { run };
    paragraph.add_run(run)
}

/// Custom property values are written without escaping.
fn property_value(text: &str) -> String {
    escape(sanitize(text).as_str()).into_owned()
}

fn half_points(points: f32) -> usize {
    FontSizes::half_points(points) as usize
}

/// Remove characters XML 1.0 cannot carry.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= '\u{20}')
        .filter(|&c| !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::read_tables_from_bytes;
    use chrono::TimeZone;
    use std::io::Read;

    fn sample() -> Document {
        let mut table = Table::new(["Id", "Name"]);
        table.push_strings(["1", "Login"]).unwrap();
        Document::from_blocks(vec![
            Block::heading(HeadingLevel::H1, "Plan & Scope"),
            Block::heading(HeadingLevel::H2, "Section"),
            Block::bold_line("Important"),
            Block::paragraph("a < b"),
            Block::Table(table),
        ])
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    fn document_xml(doc: &Document) -> String {
        let bytes = to_docx(doc, &RenderOptions::default()).unwrap();
        read_part(&bytes, "word/document.xml")
    }

    /// Slice of `xml` holding the paragraph that contains `text`.
    fn paragraph_with<'a>(xml: &'a str, text: &str) -> &'a str {
        let at = xml.find(text).unwrap();
        let start = xml[..at].rfind("<w:p ").max(xml[..at].rfind("<w:p>")).unwrap();
        let end = at + xml[at..].find("</w:p>").unwrap();
        &xml[start..end]
    }

    fn is_bold(para: &str) -> bool {
        para.contains("<w:b/>") || para.contains("<w:b />")
    }

    #[test]
    fn test_heading_one_is_centered_bold_16pt() {
        let xml = document_xml(&sample());
        let para = paragraph_with(&xml, "Plan &amp; Scope");
        assert!(para.contains(r#"w:val="Heading1""#));
        assert!(para.contains(r#"w:val="center""#));
        assert!(is_bold(para));
        assert!(para.contains(r#"w:val="32""#));
    }

    #[test]
    fn test_heading_two_left_aligned_14pt() {
        let xml = document_xml(&sample());
        let para = paragraph_with(&xml, ">Section<");
        assert!(para.contains(r#"w:val="Heading2""#));
        assert!(!para.contains(r#"w:val="center""#));
        assert!(para.contains(r#"w:val="28""#));
    }

    #[test]
    fn test_bold_line_and_paragraph_runs() {
        let xml = document_xml(&sample());
        let bold = paragraph_with(&xml, ">Important<");
        assert!(is_bold(bold));
        assert!(bold.contains(r#"w:val="22""#));

        let plain = paragraph_with(&xml, "a &lt; b");
        assert!(!is_bold(plain));
        assert!(plain.contains(r#"w:val="22""#));
    }

    #[test]
    fn test_table_header_and_body_sizes() {
        let xml = document_xml(&sample());
        assert!(xml.contains(r#"w:val="LightGridAccent1""#));
        assert_eq!(xml.matches("<w:gridCol ").count(), 2);
        assert_eq!(xml.matches("<w:tr>").count() + xml.matches("<w:tr ").count(), 2);

        let header = paragraph_with(&xml, ">Id<");
        assert!(is_bold(header));
        assert!(header.contains(r#"w:val="20""#));
        let body = paragraph_with(&xml, ">Login<");
        assert!(!is_bold(body));
        assert!(body.contains(r#"w:val="18""#));

        // trailing table gets a closing paragraph
        let after_table = &xml[xml.rfind("</w:tbl>").unwrap()..];
        assert!(after_table.contains("<w:p "));
    }

    #[test]
    fn test_block_order_preserved() {
        let xml = document_xml(&sample());
        let h1 = xml.find("Plan &amp; Scope").unwrap();
        let h2 = xml.find(">Section<").unwrap();
        let bold = xml.find(">Important<").unwrap();
        let table = xml.find("<w:tbl>").unwrap();
        assert!(h1 < h2 && h2 < bold && bold < table);
    }

    #[test]
    fn test_table_cells_read_back() {
        let bytes = to_docx(&sample(), &RenderOptions::default()).unwrap();
        let tables = read_tables_from_bytes(&bytes).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0][0], vec!["Id", "Name"]);
        assert_eq!(tables[0][1], vec!["1", "Login"]);
    }

    #[test]
    fn test_sanitize_drops_control_chars() {
        assert_eq!(sanitize("a\u{1}b\tc"), "ab\tc");
    }

    #[test]
    fn test_package_parts() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let options = RenderOptions::new().with_created(created);
        let bytes = to_docx(&sample(), &options).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/custom.xml",
            "word/document.xml",
            "word/styles.xml",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("2024-05-01T12:00:00Z"));

        let custom = read_part(&bytes, "docProps/custom.xml");
        assert!(custom.contains("Plan &amp; Scope"));
        assert!(custom.contains("mdocx"));

        let styles = read_part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"w:styleId="Heading3""#));
        assert!(styles.contains(r#"w:styleId="LightGridAccent1""#));
    }

    #[test]
    fn test_created_falls_back_to_metadata() {
        let mut doc = sample();
        doc.metadata.created = Some(Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap());
        let bytes = to_docx(&doc, &RenderOptions::default()).unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("2023-01-02T03:04:05Z"));
    }

    #[test]
    fn test_render_with_stats() {
        let result = to_docx_with_stats(&sample(), &RenderOptions::default()).unwrap();
        assert_eq!(result.stats.heading_count, 2);
        assert_eq!(result.stats.table_count, 1);
        assert!(result.content_len() > 0);
    }

    #[test]
    fn test_stats_skipped_without_flag() {
        let mut writer = DocxWriter::new(RenderOptions::default());
        let _ = writer.document(&sample());
        assert_eq!(writer.stats.heading_count, 0);
    }

    #[test]
    fn test_empty_document_renders() {
        let bytes = to_docx(&Document::new(), &RenderOptions::default()).unwrap();
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("<w:body>"));
        assert!(!xml.contains("<w:tbl>"));
    }
}
