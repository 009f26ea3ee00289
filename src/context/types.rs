//! Types for context detection
//!
//! Fact names are plain string keys so adding a fact is additive: a new
//! entry in the detector table, a new key in the map, and nothing else.

use rustc_hash::FxHashMap;

/// Input references a memoization wrapper invocation (`React.memo(...)`)
pub const MEMOIZED_COMPONENT: &str = "memoized-component";

/// Input declares a class component (`extends React.Component`)
pub const CLASS_COMPONENT: &str = "class-component";

/// Boolean facts about the whole input, computed once before any rule runs
///
/// Read-only after detection; an absent fact reads as false.
#[derive(Debug, Clone, Default)]
pub struct ContextFacts {
    facts: FxHashMap<&'static str, bool>,
}

impl ContextFacts {
    pub(crate) fn set(&mut self, name: &'static str, value: bool) {
        self.facts.insert(name, value);
    }

    /// Whether the named fact was detected as true
    pub fn is_set(&self, name: &str) -> bool {
        self.facts.get(name).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fact_is_false() {
        let facts = ContextFacts::default();
        assert!(!facts.is_set("never-computed"));
    }

    #[test]
    fn test_set_and_read() {
        let mut facts = ContextFacts::default();
        facts.set(MEMOIZED_COMPONENT, true);
        facts.set(CLASS_COMPONENT, false);
        assert!(facts.is_set(MEMOIZED_COMPONENT));
        assert!(!facts.is_set(CLASS_COMPONENT));
    }
}
