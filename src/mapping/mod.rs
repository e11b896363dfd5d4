//! Static requirement-to-security-risk mapping report.
//!
//! A hand-authored table links each requirement to OWASP Top 10 categories,
//! a risk area and a risk level. The report groups requirements by risk
//! area and lists every requirement in detail.

mod data;

pub use data::{OWASP_TOP_10_2025, REQUIREMENT_MAPPINGS};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Width of the `=` banner lines in the text report.
const BANNER_WIDTH: usize = 150;

/// Test-focus entries shown per risk area in the summary table.
const SUMMARY_FOCUS_ITEMS: usize = 3;

/// Risk level assigned to a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Must be tested first
    Critical,
    /// High priority
    High,
    /// Medium priority
    Medium,
    /// Low priority
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// One requirement and its security classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequirementMapping {
    /// Requirement id, e.g. `REQ-014`
    pub id: &'static str,
    /// Short requirement name
    pub name: &'static str,
    /// OWASP category ids, e.g. `A01`
    pub owasp: &'static [&'static str],
    /// Requirement description
    pub description: &'static str,
    /// Risk area used for grouping
    pub risk_area: &'static str,
    /// Risk level
    pub risk_level: RiskLevel,
    /// What testing should concentrate on
    pub test_focus: &'static str,
}

/// Requirements sharing one risk area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskGroup {
    /// Risk area name
    pub risk_area: &'static str,
    /// Member requirement ids, in table order
    pub requirements: Vec<&'static str>,
    /// Union of the members' OWASP categories
    pub owasp: BTreeSet<&'static str>,
    /// Risk level of the first member
    pub risk_level: RiskLevel,
    /// Members' test focus, in table order
    pub test_focus: Vec<&'static str>,
}

/// Title of an OWASP Top 10 2025 category.
pub fn owasp_category(id: &str) -> Option<&'static str> {
    OWASP_TOP_10_2025
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, title)| *title)
}

/// Group mappings by risk area, keyed (and so sorted) by area name.
pub fn group_by_risk_area(mappings: &[RequirementMapping]) -> BTreeMap<&'static str, RiskGroup> {
    let mut groups: BTreeMap<&'static str, RiskGroup> = BTreeMap::new();

    for mapping in mappings {
        let group = groups
            .entry(mapping.risk_area)
            .or_insert_with(|| RiskGroup {
                risk_area: mapping.risk_area,
                requirements: Vec::new(),
                owasp: BTreeSet::new(),
                risk_level: mapping.risk_level,
                test_focus: Vec::new(),
            });
        group.requirements.push(mapping.id);
        group.owasp.extend(mapping.owasp.iter().copied());
        group.test_focus.push(mapping.test_focus);
    }

    groups
}

/// Render the per-risk-area summary table.
pub fn render_summary_table(mappings: &[RequirementMapping]) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    out.push_str("OWASP Top 10 2025 - REQUIREMENTS MAPPING TABLE\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    for group in group_by_risk_area(mappings).values() {
        let mut ids = group.requirements.clone();
        ids.sort_unstable();
        let owasp = group.owasp.iter().copied().collect::<Vec<_>>().join(", ");
        let focus = group
            .test_focus
            .iter()
            .take(SUMMARY_FOCUS_ITEMS)
            .copied()
            .collect::<Vec<_>>()
            .join("; ");

        out.push_str(&format!(
            "| {} | {} | {} | OWASP {} | {} |\n\n",
            group.risk_area,
            ids.join(", "),
            group.risk_level,
            owasp,
            focus
        ));
    }

    out
}

/// Render one detail block per requirement, in id order.
pub fn render_detailed_listing(mappings: &[RequirementMapping]) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut out = String::new();
    out.push_str(&banner);
    out.push_str("\nDETAILED REQUIREMENTS LISTING\n");
    out.push_str(&banner);
    out.push_str("\n\n");

    let mut sorted: Vec<&RequirementMapping> = mappings.iter().collect();
    sorted.sort_by_key(|m| m.id);

    for mapping in sorted {
        let mut codes = mapping.owasp.to_vec();
        codes.sort_unstable();
        let links = codes
            .iter()
            .map(|code| format!("[{0}](#OWASP-{0})", code))
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!("{}: {}\n", mapping.id, mapping.name));
        out.push_str(&format!("  Description: {}\n", mapping.description));
        out.push_str(&format!("  OWASP: {}\n", links));
        out.push_str(&format!("  Risk Level: {}\n", mapping.risk_level));
        out.push_str(&format!("  Test Focus: {}\n\n", mapping.test_focus));
    }

    out
}

/// Render the full text report: summary table, then detailed listing.
pub fn render_report(mappings: &[RequirementMapping]) -> String {
    format!(
        "{}\n{}",
        render_summary_table(mappings),
        render_detailed_listing(mappings)
    )
}

/// Export mappings and groups as pretty JSON.
pub fn to_json(mappings: &[RequirementMapping]) -> Result<String> {
    #[derive(Serialize)]
    struct Export<'a> {
        requirements: &'a [RequirementMapping],
        risk_areas: Vec<RiskGroup>,
    }

    let export = Export {
        requirements: mappings,
        risk_areas: group_by_risk_area(mappings).into_values().collect(),
    };
    serde_json::to_string_pretty(&export)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
