//! Language hint labels.

use serde::{Deserialize, Serialize};

/// Programming language or technology inferred from prompt keywords.
///
/// Declaration order is the order hints are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageHint {
    Python,
    JavaScript,
    Java,
    Html,
    Sql,
    Json,
}

impl LanguageHint {
    /// All labels in reporting order.
    pub const ALL: [LanguageHint; 6] = [
        LanguageHint::Python,
        LanguageHint::JavaScript,
        LanguageHint::Java,
        LanguageHint::Html,
        LanguageHint::Sql,
        LanguageHint::Json,
    ];

    /// The label as it appears in serialized records.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            LanguageHint::Python => "python",
            LanguageHint::JavaScript => "javascript",
            LanguageHint::Java => "java",
            LanguageHint::Html => "html",
            LanguageHint::Sql => "sql",
            LanguageHint::Json => "json",
        }
    }
}

impl std::fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
