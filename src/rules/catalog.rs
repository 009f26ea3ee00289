//! The built-in rule catalog
//!
//! Heuristic patterns for common React performance and accessibility
//! defects. Catalog order is significant: it is the final tie-break when
//! two issues share a severity and a line.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::context::{CLASS_COMPONENT, MEMOIZED_COMPONENT};
use super::types::{CatalogError, RuleDefinition, Severity};

/// Identifiers accepted as a `useState` initial value without complaint.
///
/// These are JS globals that are cheap to evaluate; passing one is almost
/// always intentional, unlike passing a user-defined function reference.
pub const BUILTIN_INITIALIZERS: &[&str] = &[
    "Number", "String", "Boolean", "Object", "Array", "Symbol", "BigInt",
    "Date", "Map", "Set", "WeakMap", "WeakSet", "Infinity", "NaN", "undefined",
];

static CATALOG: Lazy<RuleCatalog> =
    Lazy::new(|| RuleCatalog::load().expect("built-in rule catalog is invalid"));

/// Ordered, immutable collection of rule definitions
pub struct RuleCatalog {
    rules: Vec<RuleDefinition>,
}

impl RuleCatalog {
    /// The process-wide catalog, built and validated on first use
    pub fn global() -> &'static RuleCatalog {
        &CATALOG
    }

    /// Build the catalog, compiling every pattern and checking id uniqueness
    pub fn load() -> Result<Self, CatalogError> {
        let rules = vec![
            // Hooks
            RuleDefinition::new(
                "A001",
                "missing-effect-deps",
                "useEffect without a dependency array",
                "An effect with no dependency array runs after every render, \
                 repeating work and re-subscribing listeners each time.",
                "Add a dependency array as the second argument, listing the \
                 values the effect reads.",
                Severity::High,
                r"use(?:Layout)?Effect\(\s*(?:async\s*)?\(\s*\)\s*=>\s*\{[^{}]*\}\s*\)",
            )?,
            RuleDefinition::new(
                "A002",
                "memoized-inline-fn",
                "Inline function prop passed to a memoized tree",
                "This file memoizes a component, but an inline handler creates \
                 a new function identity every render, so the memoized child \
                 re-renders anyway.",
                "Wrap the handler in useCallback, or hoist it out of render.",
                Severity::High,
                r"on[A-Z][A-Za-z]*\s*=\s*\{\s*(?:async\s*)?(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*=>",
            )?
            .gated_on(MEMOIZED_COMPONENT),
            RuleDefinition::new(
                "A003",
                "non-lazy-state-init",
                "Function reference as useState initial value",
                "A bare function reference passed to useState is evaluated on \
                 every render to produce the (ignored) initial value.",
                "Use the lazy form: useState(() => myInitializer()).",
                Severity::Medium,
                r"useState\(\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\)",
            )?
            .suppress_capture_in(BUILTIN_INITIALIZERS),
            // JSX props
            RuleDefinition::new(
                "A004",
                "inline-fn-prop",
                "Inline function in a JSX prop",
                "An arrow function in a prop position is re-created on every \
                 render, breaking referential equality for the child.",
                "Hoist the handler or wrap it in useCallback.",
                Severity::Medium,
                r"on[A-Z][A-Za-z]*\s*=\s*\{\s*(?:async\s*)?(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*=>",
            )?,
            RuleDefinition::new(
                "A005",
                "inline-object-prop",
                "Inline object literal in a JSX prop",
                "An object literal in a prop position is a new object every \
                 render, defeating shallow prop comparison downstream.",
                "Hoist the object to module scope or memoize it with useMemo.",
                Severity::Medium,
                r"[A-Za-z_][A-Za-z0-9_]*\s*=\s*\{\{",
            )?,
            RuleDefinition::new(
                "A006",
                "inline-array-prop",
                "Inline array literal in a JSX prop",
                "An array literal in a prop position is a new array every \
                 render, defeating shallow prop comparison downstream.",
                "Hoist the array to module scope or memoize it with useMemo.",
                Severity::Medium,
                r"[A-Za-z_][A-Za-z0-9_]*\s*=\s*\{\s*\[",
            )?,
            // Keys
            RuleDefinition::new(
                "A007",
                "random-key",
                "Math.random() used as a list key",
                "A random key changes on every render, forcing React to \
                 unmount and remount the element each time.",
                "Key on a stable identifier from the data.",
                Severity::High,
                r"key\s*=\s*\{\s*Math\.random\(\)",
            )?,
            RuleDefinition::new(
                "A008",
                "index-as-key",
                "Array index used as a list key",
                "Index keys misattribute state and DOM nodes when the list is \
                 reordered, inserted into, or filtered.",
                "Key on a stable identifier from the data.",
                Severity::Low,
                r"key\s*=\s*\{\s*(?:index|idx|i)\s*\}",
            )?,
            // Class components
            RuleDefinition::new(
                "A009",
                "bind-in-render",
                ".bind(this) inside render",
                "Binding in render allocates a new function on every render \
                 and passes a fresh identity to the child.",
                "Bind once in the constructor, or use a class property arrow \
                 function.",
                Severity::Medium,
                r"\.bind\(\s*this\b",
            )?
            .gated_on(CLASS_COMPONENT),
            // DOM hygiene
            RuleDefinition::new(
                "A010",
                "raw-dom-query",
                "Direct DOM query inside a component",
                "document.getElementById / querySelector bypasses React's \
                 rendering model and breaks when the tree is re-rendered or \
                 server-rendered.",
                "Use a ref (useRef) to reach the underlying element.",
                Severity::Medium,
                r"document\.(?:getElementById|querySelector(?:All)?)\s*\(",
            )?,
            RuleDefinition::new(
                "A011",
                "dangerous-html",
                "dangerouslySetInnerHTML in component markup",
                "Raw HTML injection skips React's escaping; with non-constant \
                 input this is an XSS vector, and it always forces a full \
                 subtree replacement on change.",
                "Render the content as JSX, or sanitize it before injection.",
                Severity::High,
                r"dangerouslySetInnerHTML",
            )?,
            RuleDefinition::new(
                "A012",
                "console-in-component",
                "console call left in component code",
                "Console calls run on every render, and string formatting of \
                 large props is surprisingly expensive.",
                "Remove the call or put it behind a debug flag.",
                Severity::Low,
                r"console\.(?:log|debug|info)\s*\(",
            )?,
            // Accessibility
            RuleDefinition::new(
                "A013",
                "autofocus-prop",
                "autoFocus attribute on an element",
                "Stealing focus on mount disorients screen-reader and keyboard \
                 users, who lose their place in the page.",
                "Move focus in response to a user action instead.",
                Severity::Info,
                r"\bautoFocus\b",
            )?,
            RuleDefinition::new(
                "A014",
                "javascript-url",
                "javascript: URL in an href",
                "javascript: URLs are unreachable for assistive technology and \
                 are blocked by strict content security policies.",
                "Use a button with an onClick handler instead of a fake link.",
                Severity::Low,
                r#"href\s*=\s*["']javascript:"#,
            )?,
        ];

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id) {
                return Err(CatalogError::DuplicateId(rule.id));
            }
        }

        Ok(Self { rules })
    }

    /// Rules in authored order
    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
