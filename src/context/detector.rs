//! Context detection over the whole input
//!
//! Each fact is one independent containment test against the full text,
//! run once per call before rule evaluation. Facts never change mid-scan,
//! which is what keeps gating deterministic regardless of rule order.

use super::types::{ContextFacts, CLASS_COMPONENT, MEMOIZED_COMPONENT};

/// Call signatures recognized as memoization wrappers
const MEMO_WRAPPERS: &[&str] = &["React.memo(", "memo("];

/// Declarations recognized as class components
const CLASS_SIGNATURES: &[&str] = &[
    "extends React.Component",
    "extends Component",
    "extends React.PureComponent",
    "extends PureComponent",
];

type FactPredicate = fn(&str) -> bool;

/// Fact table: additive, one entry per fact
static FACT_DETECTORS: &[(&str, FactPredicate)] = &[
    (MEMOIZED_COMPONENT, has_memoized_component),
    (CLASS_COMPONENT, has_class_component),
];

fn has_memoized_component(source: &str) -> bool {
    MEMO_WRAPPERS.iter().any(|sig| source.contains(sig))
}

fn has_class_component(source: &str) -> bool {
    CLASS_SIGNATURES.iter().any(|sig| source.contains(sig))
}

/// Computes context facts for one input
pub struct ContextDetector;

impl ContextDetector {
    pub fn new() -> Self {
        Self
    }

    /// Run every fact predicate against the input
    pub fn detect(&self, source: &str) -> ContextFacts {
        let mut facts = ContextFacts::default();
        for (name, predicate) in FACT_DETECTORS {
            facts.set(name, predicate(source));
        }
        facts
    }
}

impl Default for ContextDetector {
    fn default() -> Self {
        Self::new()
    }
}
