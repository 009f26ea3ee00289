//! Types for the rule catalog
//!
//! Defines the rule record, its severity scale, and the errors that can
//! surface while building the catalog at startup.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a reported issue
///
/// Variants are declared in ascending order so the derived `Ord`
/// matches the fixed ranking Info=0, Low=1, Medium=2, High=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Worth knowing, rarely worth changing
    Info,
    /// Minor cost or hygiene problem
    Low,
    /// Likely re-render or accessibility cost
    Medium,
    /// Almost certainly hurting the component
    High,
}

impl Severity {
    /// Fixed rank used by report ordering
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::Info => 0,
        }
    }
}

/// A single heuristic rule
///
/// Plain data record: the engine interprets the optional fields uniformly,
/// there is no per-rule behavior beyond the pattern itself.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    /// Short stable identifier, unique across the catalog
    pub id: &'static str,
    /// Machine-readable category slug (serialized as `type`)
    pub kind: &'static str,
    /// One-line description of the defect
    pub title: &'static str,
    /// Why the matched code is a problem
    pub why: &'static str,
    /// Suggested remediation
    pub fix: &'static str,
    /// Severity assigned to every occurrence of this rule
    pub severity: Severity,
    /// Compiled pattern, applied to the raw input
    pub pattern: Regex,
    /// Context fact that must be true for the rule to run at all
    pub requires_fact: Option<&'static str>,
    /// Allow-list for the first capture group; members are not reported
    pub suppress_capture_in: Option<&'static [&'static str]>,
}

impl RuleDefinition {
    /// Build a rule, compiling its pattern
    pub fn new(
        id: &'static str,
        kind: &'static str,
        title: &'static str,
        why: &'static str,
        fix: &'static str,
        severity: Severity,
        pattern: &str,
    ) -> Result<Self, CatalogError> {
        if id.is_empty() {
            return Err(CatalogError::MissingField { id: kind, field: "id" });
        }
        if title.is_empty() {
            return Err(CatalogError::MissingField { id, field: "title" });
        }
        let pattern = Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern {
            id,
            source: Box::new(source),
        })?;
        Ok(Self {
            id,
            kind,
            title,
            why,
            fix,
            severity,
            pattern,
            requires_fact: None,
            suppress_capture_in: None,
        })
    }

    /// Gate this rule on a context fact
    pub fn gated_on(mut self, fact: &'static str) -> Self {
        self.requires_fact = Some(fact);
        self
    }

    /// Suppress occurrences whose first capture is in `values`
    pub fn suppress_capture_in(mut self, values: &'static [&'static str]) -> Self {
        self.suppress_capture_in = Some(values);
        self
    }
}

/// Errors raised while building the rule catalog
///
/// All of these are startup-fatal configuration errors; none can occur on
/// the per-request path.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A rule's pattern failed to compile
    #[error("rule {id}: invalid pattern: {source}")]
    InvalidPattern {
        id: &'static str,
        source: Box<regex::Error>,
    },
    /// Two rules share the same id
    #[error("duplicate rule id: {0}")]
    DuplicateId(&'static str),
    /// A required field was left empty
    #[error("rule {id}: missing required field `{field}`")]
    MissingField { id: &'static str, field: &'static str },
}
