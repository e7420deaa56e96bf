//! Output records produced by a conversion.

use serde::{Deserialize, Serialize};

use crate::language::LanguageHint;

/// Ordered key/value metadata attached to a record.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Heuristic analysis of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub has_questions: bool,
    pub has_instructions: bool,
    pub sentences: usize,
    pub contains_code: bool,
    pub language_hints: Vec<LanguageHint>,
}

/// Structured form of a prompt.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    /// The prompt with surrounding whitespace removed.
    pub prompt: String,
    /// Character count of `prompt`.
    pub length: usize,
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub analysis: AnalysisRecord,
}

impl PromptRecord {
    /// Look up a metadata value, if metadata was included.
    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref().and_then(|metadata| metadata.get(key))
    }
}
