//! Types for the analysis report
//!
//! The wire shape is fixed: camelCase field names, `type` for the rule
//! category, and an error report that carries `error` instead of the
//! `issues`/`totalIssues` pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{RuleDefinition, Severity};
use crate::scan::Occurrence;

/// Fixed message for null or non-string input
pub const INVALID_INPUT_ERROR: &str = "No code provided or input is not a string";

/// Outcome of one analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Input was not analyzable text
    Error,
    /// Analyzed, nothing found
    Clean,
    /// Analyzed, at least one issue survived filtering
    IssuesFound,
}

/// An occurrence enriched with its defining rule's descriptive fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub why: String,
    pub fix: String,
    pub severity: Severity,
    pub occurrence: Occurrence,
}

impl Issue {
    /// Pair a surviving occurrence with its rule's static text
    pub fn from_rule(rule: &RuleDefinition, occurrence: Occurrence) -> Self {
        Self {
            id: rule.id.to_string(),
            kind: rule.kind.to_string(),
            title: rule.title.to_string(),
            why: rule.why.to_string(),
            fix: rule.fix.to_string(),
            severity: rule.severity,
            occurrence,
        }
    }
}

/// The externally visible result of `analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_issues: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Error-shaped report; carries no issues fields at all
    pub fn error(message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            status: ReportStatus::Error,
            total_issues: None,
            issues: None,
            error: Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_report_serializes_without_issue_fields() {
        let report = Report::error(INVALID_INPUT_ERROR);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "Error");
        assert_eq!(json["error"], INVALID_INPUT_ERROR);
        assert!(json.get("issues").is_none());
        assert!(json.get("totalIssues").is_none());
    }

    #[test]
    fn test_issue_wire_field_names() {
        let issue = Issue {
            id: "A001".to_string(),
            kind: "missing-effect-deps".to_string(),
            title: "t".to_string(),
            why: "w".to_string(),
            fix: "f".to_string(),
            severity: Severity::High,
            occurrence: Occurrence {
                line_number: 3,
                snippet: "useEffect(() => {})".to_string(),
                char_start: 10,
                char_end: 29,
                capture: Some("hidden".to_string()),
            },
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "missing-effect-deps");
        assert_eq!(json["severity"], "High");
        assert_eq!(json["occurrence"]["lineNumber"], 3);
        assert_eq!(json["occurrence"]["charStart"], 10);
        assert_eq!(json["occurrence"]["charEnd"], 29);
        // The capture is engine-internal and must not leak to the wire.
        assert!(json["occurrence"].get("capture").is_none());
    }
}
