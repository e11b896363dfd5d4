//! Rendering options and configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::HeadingLevel;

/// Table style applied to every rendered table.
pub const DEFAULT_TABLE_STYLE: &str = "LightGridAccent1";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Font size tiers
    pub sizes: FontSizes,

    /// Style id for tables
    pub table_style: String,

    /// Title for the package properties (defaults to the first H1)
    pub title: Option<String>,

    /// Creation timestamp for the package properties (defaults to now)
    pub created: Option<DateTime<Utc>>,

    /// Author written into the package properties
    pub creator: String,

    /// Collect conversion statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size tiers.
    pub fn with_sizes(mut self, sizes: FontSizes) -> Self {
        self.sizes = sizes;
        self
    }

    /// Set the table style id.
    pub fn with_table_style(mut self, style: impl Into<String>) -> Self {
        self.table_style = style.into();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pin the creation timestamp (useful for reproducible output).
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the author recorded in the package.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sizes: FontSizes::default(),
            table_style: DEFAULT_TABLE_STYLE.to_string(),
            title: None,
            created: None,
            creator: "mdocx".to_string(),
            collect_stats: false,
        }
    }
}

/// Font sizes in points for each block tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Level-1 headings
    pub heading1: f32,
    /// Level-2 headings
    pub heading2: f32,
    /// Level-3 headings
    pub heading3: f32,
    /// Paragraphs and bold lines
    pub body: f32,
    /// Table header row
    pub table_header: f32,
    /// Table data rows
    pub table_body: f32,
}

impl FontSizes {
    /// Size for a heading level.
    pub fn heading(&self, level: HeadingLevel) -> f32 {
        match level {
            HeadingLevel::H1 => self.heading1,
            HeadingLevel::H2 => self.heading2,
            HeadingLevel::H3 => self.heading3,
        }
    }

    /// Convert points to the half-point unit used by WordprocessingML.
    pub fn half_points(points: f32) -> u32 {
        (points * 2.0).round().max(1.0) as u32
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading1: 16.0,
            heading2: 14.0,
            heading3: 12.0,
            body: 11.0,
            table_header: 10.0,
            table_body: 9.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.table_style, DEFAULT_TABLE_STYLE);
        assert!(options.title.is_none());
        assert!(!options.collect_stats);
    }

    #[test]
    fn test_default_size_tiers() {
        let sizes = FontSizes::default();
        assert_eq!(sizes.heading(HeadingLevel::H1), 16.0);
        assert_eq!(sizes.heading(HeadingLevel::H2), 14.0);
        assert_eq!(sizes.heading(HeadingLevel::H3), 12.0);
        assert_eq!(sizes.body, 11.0);
        assert_eq!(sizes.table_header, 10.0);
        assert_eq!(sizes.table_body, 9.0);
    }

    #[test]
    fn test_half_points() {
        assert_eq!(FontSizes::half_points(16.0), 32);
        assert_eq!(FontSizes::half_points(10.5), 21);
        assert_eq!(FontSizes::half_points(0.0), 1);
    }

    #[test]
    fn test_builder_chain() {
        let options = RenderOptions::new()
            .with_title("Plan")
            .with_table_style("TableGrid")
            .with_stats(true);
        assert_eq!(options.title.as_deref(), Some("Plan"));
        assert_eq!(options.table_style, "TableGrid");
        assert!(options.collect_stats);
    }
}
