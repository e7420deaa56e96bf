//! Whitespace rules shared by the converter and the analyzer.

/// Unicode `White_Space` plus the ASCII separators `\x1c` to `\x1f`.
pub fn is_prompt_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Strip leading and trailing prompt whitespace.
pub fn trim_prompt(text: &str) -> &str {
    text.trim_matches(is_prompt_whitespace)
}

/// Number of whitespace-delimited tokens in `text`.
pub fn count_words(text: &str) -> usize {
    text.split(is_prompt_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}
