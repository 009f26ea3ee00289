//! Match extraction
//!
//! Applies one rule's pattern to the raw input, producing occurrences with
//! position data. Every rule scans the whole input from offset 0; rules
//! never see each other's scan positions. The compiled patterns are shared
//! immutably, so concurrent calls cannot corrupt a cursor: all scan state
//! lives in the call-local iterator.

use crate::context::ContextFacts;
use crate::rules::RuleDefinition;
use super::types::Occurrence;

/// Extracts occurrences of a rule from the input
pub struct MatchExtractor;

impl MatchExtractor {
    pub fn new() -> Self {
        Self
    }

    /// All occurrences of `rule` in `source`, left to right
    ///
    /// If the rule is gated on a context fact that is false or absent, no
    /// extraction work happens at all. Zero-length matches cannot stall the
    /// scan: the regex iterator advances past an empty match by one
    /// character, so the sequence is bounded by the input length.
    pub fn extract(
        &self,
        rule: &RuleDefinition,
        facts: &ContextFacts,
        source: &str,
    ) -> Vec<Occurrence> {
        if let Some(fact) = rule.requires_fact {
            if !facts.is_set(fact) {
                return Vec::new();
            }
        }

        rule.pattern
            .captures_iter(source)
            .map(|caps| {
                let m = caps.get(0).expect("group 0 is the whole match");
                Occurrence {
                    line_number: line_of(source, m.start()),
                    snippet: m.as_str().trim().to_string(),
                    char_start: m.start(),
                    char_end: m.end(),
                    capture: caps.get(1).map(|g| g.as_str().to_string()),
                }
            })
            .collect()
    }
}

impl Default for MatchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based line number of a byte offset
fn line_of(source: &str, offset: usize) -> u32 {
    source.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextDetector, MEMOIZED_COMPONENT};
    use crate::rules::{RuleDefinition, Severity};

    fn rule(pattern: &str) -> RuleDefinition {
        RuleDefinition::new("T001", "test-rule", "Test", "why", "fix", Severity::Low, pattern)
            .unwrap()
    }

    fn no_facts() -> ContextFacts {
        ContextDetector::new().detect("")
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let extractor = MatchExtractor::new();
        let source = "aaa\nbbb\nccc";
        let occurrences = extractor.extract(&rule("bbb"), &no_facts(), source);
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].line_number, 2);

        let occurrences = extractor.extract(&rule("aaa"), &no_facts(), source);
        assert_eq!(occurrences[0].line_number, 1);
    }

    #[test]
    fn test_char_span_is_half_open() {
        let extractor = MatchExtractor::new();
        let occurrences = extractor.extract(&rule("bc"), &no_facts(), "abcd");
        assert_eq!(occurrences[0].char_start, 1);
        assert_eq!(occurrences[0].char_end, 3);
    }

    #[test]
    fn test_snippet_is_trimmed() {
        let extractor = MatchExtractor::new();
        let occurrences = extractor.extract(&rule(r"\s+mid\s+"), &no_facts(), "a  mid  b");
        assert_eq!(occurrences[0].snippet, "mid");
    }

    #[test]
    fn test_match_spanning_lines_reports_start_line() {
        let extractor = MatchExtractor::new();
        let source = "first\nuseEffect(() => {\n  tick();\n});";
        let occurrences = extractor.extract(
            &rule(r"useEffect\(\s*\(\s*\)\s*=>\s*\{[^{}]*\}\s*\)"),
            &no_facts(),
            source,
        );
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].line_number, 2);
    }

    #[test]
    fn test_multiple_matches_left_to_right() {
        let extractor = MatchExtractor::new();
        let occurrences = extractor.extract(&rule("x"), &no_facts(), "x.x.x");
        assert_eq!(occurrences.len(), 3);
        assert!(occurrences.windows(2).all(|w| w[0].char_start < w[1].char_start));
    }

    #[test]
    fn test_first_capture_is_extracted() {
        let extractor = MatchExtractor::new();
        let occurrences =
            extractor.extract(&rule(r"useState\((\w+)\)"), &no_facts(), "useState(seed)");
        assert_eq!(occurrences[0].capture.as_deref(), Some("seed"));
    }

    #[test]
    fn test_zero_capture_rule_has_no_capture() {
        let extractor = MatchExtractor::new();
        let occurrences = extractor.extract(&rule("abc"), &no_facts(), "abc");
        assert_eq!(occurrences[0].capture, None);
    }

    #[test]
    fn test_zero_length_matches_terminate() {
        // A pattern that matches the empty string at every position must
        // still produce a finite, bounded sequence.
        let extractor = MatchExtractor::new();
        let occurrences = extractor.extract(&rule("b*"), &no_facts(), "aaa");
        assert_eq!(occurrences.len(), 4);
    }

    #[test]
    fn test_gated_rule_skips_extraction_without_fact() {
        let extractor = MatchExtractor::new();
        let gated = rule("always").gated_on(MEMOIZED_COMPONENT);
        let occurrences = extractor.extract(&gated, &no_facts(), "always matches otherwise");
        assert!(occurrences.is_empty());
    }

    #[test]
    fn test_gated_rule_runs_with_fact() {
        let extractor = MatchExtractor::new();
        let gated = rule("always").gated_on(MEMOIZED_COMPONENT);
        let facts = ContextDetector::new().detect("React.memo(X); always");
        let occurrences = extractor.extract(&gated, &facts, "React.memo(X); always");
        assert_eq!(occurrences.len(), 1);
    }
}
