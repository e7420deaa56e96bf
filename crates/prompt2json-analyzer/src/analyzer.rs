//! Prompt analysis.

use std::sync::LazyLock;

use prompt2json_core::{trim_prompt, AnalysisRecord};
use regex::Regex;

use crate::patterns::{detect_language_hints, keyword_pattern, INSTRUCTION_KEYWORDS};

static INSTRUCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern(INSTRUCTION_KEYWORDS));

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

// A fence marker, or an inline span with at least one non-backtick character.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```|`[^`]+`").expect("code pattern is valid"));

/// Analyze the structure of a prompt.
///
/// Pure and deterministic: the same text always yields the same record.
pub fn analyze(text: &str) -> AnalysisRecord {
    let analysis = AnalysisRecord {
        has_questions: has_questions(text),
        has_instructions: has_instructions(text),
        sentences: count_sentences(text),
        contains_code: contains_code(text),
        language_hints: detect_language_hints(text),
    };

    log::debug!(
        "Analyzed prompt: {} sentences, questions={}, instructions={}, code={}, hints={:?}",
        analysis.sentences,
        analysis.has_questions,
        analysis.has_instructions,
        analysis.contains_code,
        analysis.language_hints
    );

    analysis
}

pub fn has_questions(text: &str) -> bool {
    text.contains('?')
}

pub fn has_instructions(text: &str) -> bool {
    INSTRUCTION_PATTERN.is_match(text)
}

/// Count segments of the trimmed text separated by runs of `.`, `!` or `?`.
///
/// Empty segments count too, so `""` is one sentence and `"Hi."` is two.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_BREAK.split(trim_prompt(text)).count()
}

pub fn contains_code(text: &str) -> bool {
    CODE_PATTERN.is_match(text)
}
