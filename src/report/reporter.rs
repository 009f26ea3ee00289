//! Report assembly and ranking
//!
//! Collects the surviving issues into a report sorted by severity rank
//! descending, then line number ascending. The sort is stable, so issues
//! tied on both keys keep the order they were produced in: catalog order
//! first, then scan position within a rule.

use chrono::Utc;

use super::types::{Issue, Report, ReportStatus};

/// Builds the final report from the aggregated issue list
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Sort, count, and stamp the issue list into a report
    pub fn build(&self, mut issues: Vec<Issue>) -> Report {
        issues.sort_by(|a, b| {
            b.severity
                .rank()
                .cmp(&a.severity.rank())
                .then(a.occurrence.line_number.cmp(&b.occurrence.line_number))
        });

        let status = if issues.is_empty() {
            ReportStatus::Clean
        } else {
            ReportStatus::IssuesFound
        };

        Report {
            timestamp: Utc::now(),
            status,
            total_issues: Some(issues.len()),
            issues: Some(issues),
            error: None,
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
