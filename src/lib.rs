pub mod cli;
pub mod config;
pub mod converter;

pub use converter::{
    convert_prompt_to_json, records_to_json_string, to_json_string_with_indent, PromptConverter,
    DEFAULT_INDENT, VERSION,
};

// Re-export core and analyzer types for convenience
pub use prompt2json_analyzer::{analyze, detect_language_hints};
pub use prompt2json_core::{
    AnalysisRecord, Clock, ConvertError, FixedClock, LanguageHint, Metadata, PromptRecord,
    SystemClock,
};
