//! Keyword tables and language hint detection.

use std::sync::LazyLock;

use prompt2json_core::LanguageHint;
use regex::Regex;

/// Words that mark a prompt as an instruction.
pub const INSTRUCTION_KEYWORDS: &[&str] = &["please", "create", "make", "generate", "write", "build"];

/// Keywords that suggest a language or technology.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRule {
    pub hint: LanguageHint,
    pub keywords: &'static [&'static str],
}

/// Language rules in reporting order.
pub const LANGUAGE_RULES: &[LanguageRule] = &[
    LanguageRule {
        hint: LanguageHint::Python,
        keywords: &["python", "py", "pip", "django", "flask", "pandas"],
    },
    LanguageRule {
        hint: LanguageHint::JavaScript,
        keywords: &["javascript", "js", "node", "npm", "react", "vue"],
    },
    LanguageRule {
        hint: LanguageHint::Java,
        keywords: &["java", "maven", "gradle", "spring"],
    },
    LanguageRule {
        hint: LanguageHint::Html,
        keywords: &["html", "css", "web", "website"],
    },
    LanguageRule {
        hint: LanguageHint::Sql,
        keywords: &["sql", "database", "mysql", "postgresql"],
    },
    LanguageRule {
        hint: LanguageHint::Json,
        keywords: &["json", "api", "rest"],
    },
];

/// Case-insensitive whole-word alternation over `keywords`.
pub(crate) fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("keyword pattern is valid")
}

static COMPILED_RULES: LazyLock<Vec<(LanguageHint, Regex)>> = LazyLock::new(|| {
    LANGUAGE_RULES
        .iter()
        .map(|rule| (rule.hint, keyword_pattern(rule.keywords)))
        .collect()
});

/// Detect language hints in `text`.
///
/// Each hint is reported at most once, in `LANGUAGE_RULES` order regardless
/// of where its keywords appear in the text.
pub fn detect_language_hints(text: &str) -> Vec<LanguageHint> {
    COMPILED_RULES
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(hint, _)| *hint)
        .collect()
}
