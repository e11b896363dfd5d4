//! Table cell extraction from WordprocessingML.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Rows of cell texts for one table.
pub type TableCells = Vec<Vec<String>>;

const DOCUMENT_PART: &str = "word/document.xml";

/// Read the cell texts of every top-level table in a .docx file.
///
/// Cells spanning several grid columns are repeated once per column, so
/// column indexes stay aligned with the grid. Nested tables are ignored.
pub fn read_tables<P: AsRef<Path>>(path: P) -> Result<Vec<TableCells>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_read(e, path))?;
    read_tables_from_reader(BufReader::new(file))
}

/// Read table cell texts from in-memory .docx bytes.
pub fn read_tables_from_bytes(data: &[u8]) -> Result<Vec<TableCells>> {
    read_tables_from_reader(Cursor::new(data))
}

fn read_tables_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<TableCells>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    tables_from_document_xml(&xml)
}

/// Extract table cell texts from the main document part.
pub fn tables_from_document_xml(xml: &str) -> Result<Vec<TableCells>> {
    let mut reader = Reader::from_str(xml);
    let mut collector = TableCollector::default();

    loop {
        match reader.read_event().map_err(Error::xml)? {
            Event::Start(e) => collector.start(&e),
            Event::Empty(e) => collector.empty(&e),
            Event::End(e) => collector.end(e.local_name().as_ref()),
            Event::Text(t) => {
                if collector.in_text {
                    let text = t.unescape().map_err(Error::xml)?;
                    collector.paragraph.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collector.tables)
}

/// Event-driven state for one pass over `word/document.xml`.
#[derive(Default)]
struct TableCollector {
    tables: Vec<TableCells>,
    depth: usize,
    rows: TableCells,
    row: Vec<String>,
    paragraphs: Vec<String>,
    paragraph: String,
    span: usize,
    in_cell: bool,
    in_run: bool,
    in_text: bool,
}

impl TableCollector {
    fn top_level(&self) -> bool {
        self.depth == 1
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"tbl" => {
                self.depth += 1;
                if self.top_level() {
                    self.rows.clear();
                }
            }
            b"tr" if self.top_level() => self.row.clear(),
            b"tc" if self.top_level() => {
                self.in_cell = true;
                self.span = 1;
                self.paragraphs.clear();
            }
            b"p" if self.top_level() && self.in_cell => self.paragraph.clear(),
            b"r" if self.top_level() && self.in_cell => self.in_run = true,
            b"t" if self.top_level() && self.in_cell => self.in_text = true,
            _ => {}
        }
    }

    fn empty(&mut self, e: &BytesStart<'_>) {
        if !(self.top_level() && self.in_cell) {
            return;
        }
        match e.local_name().as_ref() {
            b"gridSpan" => {
                self.span = val_attr(e)
                    .and_then(|v| v.parse().ok())
                    .filter(|&n: &usize| n > 0)
                    .unwrap_or(1);
            }
            b"p" => self.paragraphs.push(String::new()),
            // tab stops in w:pPr/w:tabs share the element name
            b"tab" if self.in_run => self.paragraph.push('\t'),
            b"br" | b"cr" if self.in_run => self.paragraph.push('\n'),
            _ => {}
        }
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"tbl" => {
                if self.top_level() {
                    self.tables.push(std::mem::take(&mut self.rows));
                }
                self.depth = self.depth.saturating_sub(1);
            }
            b"tr" if self.top_level() => self.rows.push(std::mem::take(&mut self.row)),
            b"tc" if self.top_level() => {
                let text = self.paragraphs.join("\n").trim().to_string();
                for _ in 0..self.span {
                    self.row.push(text.clone());
                }
                self.in_cell = false;
            }
            b"p" if self.top_level() && self.in_cell => {
                self.paragraphs.push(std::mem::take(&mut self.paragraph));
            }
            b"r" => self.in_run = false,
            b"t" => self.in_text = false,
            _ => {}
        }
    }
}

fn val_attr(e: &BytesStart<'_>) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == b"val")
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}
