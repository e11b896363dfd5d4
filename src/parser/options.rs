//! Parsing options and configuration.

use serde::{Deserialize, Serialize};

/// Options for parsing Markdown documents.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// What to do with table rows whose cell count differs from the header
    pub row_policy: RowPolicy,

    /// Normalize the source text to Unicode NFC before classification
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row policy.
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

/// Handling of table rows whose cell count differs from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Omit the row and keep the rest of the table
    #[default]
    Drop,
    /// Pad short rows with empty cells and truncate long rows
    Pad,
    /// Discard the whole table
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_row_policy(RowPolicy::Pad)
            .with_unicode_normalization(true);

        assert_eq!(options.row_policy, RowPolicy::Pad);
        assert!(options.normalize_unicode);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.row_policy, RowPolicy::Drop);
        assert!(!options.normalize_unicode);
    }
}
