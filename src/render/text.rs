//! Plain text rendering.

use crate::model::Document;

/// Convert a document to plain text. Tables are tab-separated.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, HeadingLevel, Table};

    #[test]
    fn test_to_text() {
        let mut table = Table::new(["A", "B"]);
        table.push_strings(["1", "2"]).unwrap();
        let doc = Document::from_blocks(vec![
            Block::heading(HeadingLevel::H2, "Scope"),
            Block::paragraph("Second paragraph."),
            Block::Table(table),
        ]);

        assert_eq!(to_text(&doc), "Scope\n\nSecond paragraph.\n\nA\tB\n1\t2");
    }
}
