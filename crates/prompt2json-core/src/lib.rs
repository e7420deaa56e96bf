//! Core types for prompt2json.
//!
//! This crate provides the types shared by the analyzer and the converter:
//! - Language hint labels (LanguageHint)
//! - Output records (PromptRecord, AnalysisRecord)
//! - The conversion error (ConvertError)
//! - The clock capability used for metadata timestamps
//! - Whitespace rules for trimming and word counting

mod clock;
mod error;
mod language;
mod record;
mod text;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock};
pub use error::{json_type_name, ConvertError};
pub use language::LanguageHint;
pub use record::{AnalysisRecord, Metadata, PromptRecord};
pub use text::{count_words, is_prompt_whitespace, trim_prompt};
