//! Suppression filter
//!
//! Per-rule allow-list check on the first capture group. Case-sensitive
//! exact membership; a suppressed occurrence contributes nothing to the
//! report, not even a count. The filter only accepts or drops; it never
//! rewrites occurrence content.

use crate::rules::RuleDefinition;
use super::types::Occurrence;

/// Drops occurrences whose captured value is on the rule's allow-list
pub struct SuppressionFilter;

impl SuppressionFilter {
    pub fn new() -> Self {
        Self
    }

    /// Keep the occurrences the rule does not suppress
    pub fn retain(&self, rule: &RuleDefinition, occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
        let Some(allowed) = rule.suppress_capture_in else {
            return occurrences;
        };
        occurrences
            .into_iter()
            .filter(|occ| match occ.capture.as_deref() {
                Some(value) => !allowed.contains(&value),
                None => true,
            })
            .collect()
    }
}

impl Default for SuppressionFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleDefinition, Severity};

    const ALLOWED: &[&str] = &["Number", "String"];

    fn occurrence(capture: Option<&str>) -> Occurrence {
        Occurrence {
            line_number: 1,
            snippet: "useState(x)".to_string(),
            char_start: 0,
            char_end: 11,
            capture: capture.map(str::to_string),
        }
    }

    fn suppressing_rule() -> RuleDefinition {
        RuleDefinition::new("T001", "t", "T", "w", "f", Severity::Low, r"useState\((\w+)\)")
            .unwrap()
            .suppress_capture_in(ALLOWED)
    }

    #[test]
    fn test_allowed_capture_is_dropped() {
        let filter = SuppressionFilter::new();
        let kept = filter.retain(&suppressing_rule(), vec![occurrence(Some("Number"))]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_other_capture_is_kept() {
        let filter = SuppressionFilter::new();
        let kept = filter.retain(&suppressing_rule(), vec![occurrence(Some("myInitializerRef"))]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let filter = SuppressionFilter::new();
        let kept = filter.retain(&suppressing_rule(), vec![occurrence(Some("number"))]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_rule_without_list_passes_everything() {
        let filter = SuppressionFilter::new();
        let rule =
            RuleDefinition::new("T002", "t", "T", "w", "f", Severity::Low, r"useState").unwrap();
        let kept = filter.retain(&rule, vec![occurrence(Some("Number")), occurrence(None)]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_captureless_occurrence_is_kept() {
        let filter = SuppressionFilter::new();
        let kept = filter.retain(&suppressing_rule(), vec![occurrence(None)]);
        assert_eq!(kept.len(), 1);
    }
}
