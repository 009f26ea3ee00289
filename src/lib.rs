//! perfscope: heuristic scanner for React component source
//!
//! This crate provides the rule-based analysis engine:
//! - Rules: the ordered, immutable catalog of heuristic patterns
//! - Context: whole-input boolean facts that gate context-sensitive rules
//! - Scan: per-rule match extraction and capture allow-list suppression
//! - Report: issue records, severity ranking, and the report envelope
//! - Analyzer: the one-call orchestration tying the stages together
//!
//! One call analyzes one fragment of text, statelessly. This is pattern
//! matching, not parsing: findings are heuristic, and false positives are
//! an accepted trade for zero build/runtime dependencies on the code under
//! analysis.

pub mod analyzer;
pub mod context;
pub mod report;
pub mod rules;
pub mod scan;

// Re-exports for convenience
pub use analyzer::{analyze, Analyzer};
pub use context::{ContextDetector, ContextFacts, CLASS_COMPONENT, MEMOIZED_COMPONENT};
pub use report::{Issue, Report, ReportStatus, Reporter, INVALID_INPUT_ERROR};
pub use rules::{CatalogError, RuleCatalog, RuleDefinition, Severity, BUILTIN_INITIALIZERS};
pub use scan::{MatchExtractor, Occurrence, SuppressionFilter};
