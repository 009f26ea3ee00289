//! Types for match extraction

use serde::{Deserialize, Serialize};

/// A single match of one rule against the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// 1-based line of the match start (newlines strictly before it)
    pub line_number: u32,
    /// Trimmed matched text
    pub snippet: String,
    /// Byte offset of the match start in the original input
    pub char_start: usize,
    /// Byte offset one past the match end (half-open)
    pub char_end: usize,
    /// First capture group text, consumed by suppression; not serialized
    #[serde(skip)]
    pub capture: Option<String>,
}
