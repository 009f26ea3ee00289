//! Analysis orchestration
//!
//! One call is a pure function of (input, static catalog, static
//! allow-lists): facts are computed once, every active rule scans the whole
//! input independently, suppression drops allow-listed captures, and the
//! reporter ranks whatever survived. No state outlives the call, so the
//! analyzer is freely shareable across threads.

use rayon::prelude::*;
use serde_json::Value;

use crate::context::ContextDetector;
use crate::report::{Issue, Report, Reporter, INVALID_INPUT_ERROR};
use crate::rules::RuleCatalog;
use crate::scan::{MatchExtractor, SuppressionFilter};

/// The analysis engine
pub struct Analyzer {
    catalog: &'static RuleCatalog,
    context: ContextDetector,
    extractor: MatchExtractor,
    suppression: SuppressionFilter,
    reporter: Reporter,
}

impl Analyzer {
    /// Create an analyzer over the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: RuleCatalog::global(),
            context: ContextDetector::new(),
            extractor: MatchExtractor::new(),
            suppression: SuppressionFilter::new(),
            reporter: Reporter::new(),
        }
    }

    /// Analyze one fragment of component source
    ///
    /// Always returns a well-formed report; empty input is Clean, never an
    /// error. Callers feeding untrusted input of unbounded size should cap
    /// it at their boundary; the engine itself scans whatever it is given.
    pub fn analyze(&self, code: &str) -> Report {
        let facts = self.context.detect(code);

        let mut issues: Vec<Issue> = Vec::new();
        for rule in self.catalog.rules() {
            let occurrences = self.extractor.extract(rule, &facts, code);
            let kept = self.suppression.retain(rule, occurrences);
            issues.extend(kept.into_iter().map(|occ| Issue::from_rule(rule, occ)));
        }

        tracing::debug!(
            input_bytes = code.len(),
            rules = self.catalog.len(),
            issues = issues.len(),
            "analysis complete"
        );

        self.reporter.build(issues)
    }

    /// Boundary adapter for loosely typed input
    ///
    /// Transport shells hand over whatever JSON field the caller sent;
    /// anything but a string becomes the fixed Error report.
    pub fn analyze_value(&self, input: &Value) -> Report {
        match input {
            Value::String(code) => self.analyze(code),
            _ => Report::error(INVALID_INPUT_ERROR),
        }
    }

    /// Analyze independent fragments in parallel
    ///
    /// Pure fan-out over the shared immutable catalog; output order matches
    /// input order.
    pub fn analyze_batch(&self, codes: &[&str]) -> Vec<Report> {
        codes.par_iter().map(|code| self.analyze(code)).collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze one fragment with a throwaway analyzer
pub fn analyze(code: &str) -> Report {
    Analyzer::new().analyze(code)
}
