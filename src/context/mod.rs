//! Context detection module
//!
//! Derives whole-input boolean facts used to gate context-sensitive rules.

mod detector;
mod types;

pub use detector::ContextDetector;
pub use types::{ContextFacts, CLASS_COMPONENT, MEMOIZED_COMPONENT};
