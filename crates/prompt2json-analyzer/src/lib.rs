//! Heuristic prompt analysis for prompt2json.
//!
//! This crate provides:
//! - Prompt analysis (questions, instructions, sentences, code)
//! - Keyword-based language hint detection
//!
//! # Example
//!
//! ```rust
//! use prompt2json_analyzer::analyze;
//! use prompt2json_core::LanguageHint;
//!
//! let analysis = analyze("How do I create a Flask app?");
//! assert!(analysis.has_questions);
//! assert!(analysis.has_instructions);
//! assert_eq!(analysis.language_hints, vec![LanguageHint::Python]);
//! ```

mod analyzer;
mod patterns;

pub use analyzer::{analyze, contains_code, count_sentences, has_instructions, has_questions};
pub use patterns::{detect_language_hints, LanguageRule, INSTRUCTION_KEYWORDS, LANGUAGE_RULES};
