//! Requirement id/description extraction.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use regex::Regex;
use serde::Serialize;

use super::TableCells;

/// Requirement id prefix used by the traceability matrix.
pub const DEFAULT_PREFIX: &str = "REQ-";

/// Placeholder printed for ids missing from the matrix.
pub const NOT_FOUND: &str = "Not found";

/// Format a requirement id with a three-digit number, e.g. `REQ-007`.
pub fn requirement_id(prefix: &str, number: u32) -> String {
    format!("{}{:03}", prefix, number)
}

/// Requirement descriptions keyed by id, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementIndex {
    prefix: String,
    entries: BTreeMap<String, String>,
}

impl RequirementIndex {
    /// Create an empty index for ids starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Record a description unless the id is already known.
    pub fn insert(&mut self, id: impl Into<String>, description: impl Into<String>) -> bool {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, description.into());
        true
    }

    /// Look up a description.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Number of requirements found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(id, description)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Highest number among ids of the form `<prefix><digits>`.
    pub fn max_number(&self) -> Option<u32> {
        let pattern = Regex::new(&format!(r"^{}(\d+)$", regex::escape(&self.prefix))).ok()?;
        self.entries
            .keys()
            .filter_map(|id| pattern.captures(id))
            .filter_map(|caps| caps[1].parse().ok())
            .max()
    }

    /// One `id|description` line per number in `range`, using
    /// [`NOT_FOUND`] for ids the matrix does not contain.
    pub fn listing(&self, range: RangeInclusive<u32>) -> Vec<String> {
        range
            .map(|n| {
                let id = requirement_id(&self.prefix, n);
                let description = self.get(&id).unwrap_or(NOT_FOUND);
                format!("{}|{}", id, description)
            })
            .collect()
    }
}

/// Build a requirement index from table cells.
///
/// Every row with at least two cells whose first cell starts with `prefix`
/// contributes `first cell -> second cell`, with line breaks in the
/// description flattened to spaces. The first occurrence of an id wins.
pub fn extract_requirements(tables: &[TableCells], prefix: &str) -> RequirementIndex {
    let mut index = RequirementIndex::new(prefix);

    for row in tables.iter().flatten() {
        if row.len() < 2 {
            continue;
        }
        let id = row[0].trim();
        if id.is_empty() || !id.starts_with(prefix) {
            continue;
        }
        let description = row[1].trim().replace('\n', " ");
        if !index.insert(id, description.trim()) {
            log::debug!("ignoring repeated requirement {}", id);
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requirement_id_padding() {
        assert_eq!(requirement_id("REQ-", 1), "REQ-001");
        assert_eq!(requirement_id("REQ-", 27), "REQ-027");
        assert_eq!(requirement_id("REQ-", 1234), "REQ-1234");
    }

    #[test]
    fn test_extract_first_occurrence_wins() {
        let tables = vec![
            vec![
                row(&["Requirement ID", "Description"]),
                row(&["REQ-002", "Logo click\nredirects home"]),
                row(&["REQ-001", "Homepage access"]),
            ],
            vec![row(&["REQ-001", "Duplicate entry"]), row(&["REQ-003"])],
        ];

        let index = extract_requirements(&tables, DEFAULT_PREFIX);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("REQ-001"), Some("Homepage access"));
        assert_eq!(index.get("REQ-002"), Some("Logo click redirects home"));
        assert_eq!(index.get("REQ-003"), None);

        let ids: Vec<_> = index.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["REQ-001", "REQ-002"]);
    }

    #[test]
    fn test_extract_trims_id_cell() {
        let tables = vec![vec![row(&["  REQ-010 ", "  Temporary cart  "])]];
        let index = extract_requirements(&tables, DEFAULT_PREFIX);
        assert_eq!(index.get("REQ-010"), Some("Temporary cart"));
    }

    #[test]
    fn test_listing_marks_missing() {
        let mut index = RequirementIndex::new(DEFAULT_PREFIX);
        index.insert("REQ-002", "Logo redirect");

        assert_eq!(
            index.listing(1..=3),
            vec!["REQ-001|Not found", "REQ-002|Logo redirect", "REQ-003|Not found"]
        );
    }

    #[test]
    fn test_max_number() {
        let mut index = RequirementIndex::new(DEFAULT_PREFIX);
        assert_eq!(index.max_number(), None);

        index.insert("REQ-009", "a");
        index.insert("REQ-027", "b");
        index.insert("REQ-X1", "c");
        assert_eq!(index.max_number(), Some(27));
    }
}
