//! Block-level types.

use super::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading level. Only three tiers exist in the supported Markdown subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    /// `# ` heading
    H1,
    /// `## ` heading
    H2,
    /// `### ` heading
    H3,
}

impl HeadingLevel {
    /// All levels, outermost first.
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Markdown line marker including the trailing space, e.g. `"## "`.
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "# ",
            HeadingLevel::H2 => "## ",
            HeadingLevel::H3 => "### ",
        }
    }

    /// WordprocessingML paragraph style id.
    pub fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "Heading1",
            HeadingLevel::H2 => "Heading2",
            HeadingLevel::H3 => "Heading3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1-3, got {}", other)),
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.as_u8())
    }
}

/// One semantic unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading line (`#`, `##`, `###`).
    Heading {
        /// Heading tier
        level: HeadingLevel,
        /// Heading text with the marker stripped
        text: String,
    },

    /// A line wrapped entirely in `**`.
    BoldLine {
        /// Text between the markers
        text: String,
    },

    /// Any other non-empty line.
    Paragraph {
        /// Trimmed line text
        text: String,
    },

    /// A pipe-delimited table.
    Table(Table),
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a bold line block.
    pub fn bold_line(text: impl Into<String>) -> Self {
        Block::BoldLine { text: text.into() }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Get the heading level or None.
    pub fn heading_level(&self) -> Option<HeadingLevel> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::BoldLine { text } | Block::Paragraph { text } => {
                text.clone()
            }
            Block::Table(table) => table.plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_conversion() {
        assert_eq!(u8::from(HeadingLevel::H2), 2);
        assert_eq!(HeadingLevel::try_from(3), Ok(HeadingLevel::H3));
        assert!(HeadingLevel::try_from(4).is_err());
        assert!(HeadingLevel::try_from(0).is_err());
    }

    #[test]
    fn test_heading_markers() {
        assert_eq!(HeadingLevel::H1.marker(), "# ");
        assert_eq!(HeadingLevel::H3.marker(), "### ");
        assert_eq!(HeadingLevel::H2.style_id(), "Heading2");
    }

    #[test]
    fn test_block_accessors() {
        let h = Block::heading(HeadingLevel::H1, "Title");
        assert!(h.is_heading());
        assert_eq!(h.heading_level(), Some(HeadingLevel::H1));
        assert_eq!(h.plain_text(), "Title");

        let p = Block::paragraph("Body");
        assert!(!p.is_heading());
        assert!(p.as_table().is_none());
    }

    #[test]
    fn test_block_serde_tagging() {
        let json = serde_json::to_string(&Block::heading(HeadingLevel::H2, "S")).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":2,"text":"S"}"#);

        let back: Block = serde_json::from_str(r#"{"type":"bold_line","text":"x"}"#).unwrap();
        assert_eq!(back, Block::bold_line("x"));
    }
}
