//! Prompt to record conversion.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use prompt2json_analyzer::analyze;
use prompt2json_core::{
    count_words, format_timestamp, trim_prompt, Clock, ConvertError, Metadata, PromptRecord,
    SystemClock,
};

/// Version string stamped into record metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Indentation used when the caller does not pick one.
pub const DEFAULT_INDENT: usize = 2;

/// Converts prompts into `PromptRecord`s.
///
/// Whether metadata is attached is fixed at construction. Timestamps come
/// from the converter's clock, which defaults to the system clock.
#[derive(Debug, Clone)]
pub struct PromptConverter<C = SystemClock> {
    include_metadata: bool,
    clock: C,
}

impl PromptConverter<SystemClock> {
    pub fn new(include_metadata: bool) -> Self {
        Self::with_clock(include_metadata, SystemClock)
    }
}

impl Default for PromptConverter<SystemClock> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C: Clock> PromptConverter<C> {
    /// Create a converter reading timestamps from `clock`.
    pub fn with_clock(include_metadata: bool, clock: C) -> Self {
        Self {
            include_metadata,
            clock,
        }
    }

    pub fn include_metadata(&self) -> bool {
        self.include_metadata
    }

    /// Convert a prompt into a record.
    ///
    /// `extra` is merged over the built-in `timestamp` and `version` keys when
    /// metadata is enabled and ignored otherwise.
    pub fn convert(&self, prompt: &str, extra: &Metadata) -> PromptRecord {
        let trimmed = trim_prompt(prompt);

        let metadata = if self.include_metadata {
            Some(self.build_metadata(extra))
        } else {
            None
        };

        let record = PromptRecord {
            prompt: trimmed.to_string(),
            length: trimmed.chars().count(),
            word_count: count_words(trimmed),
            metadata,
            analysis: analyze(prompt),
        };

        log::debug!(
            "Converted prompt: {} chars, {} words",
            record.length,
            record.word_count
        );

        record
    }

    /// Convert a dynamically typed prompt.
    ///
    /// Fails with `ConvertError::InvalidInput` unless `prompt` is a string.
    pub fn convert_value(&self, prompt: &Value, extra: &Metadata) -> Result<PromptRecord, ConvertError> {
        match prompt {
            Value::String(text) => Ok(self.convert(text, extra)),
            other => Err(ConvertError::invalid_input(other)),
        }
    }

    /// Convert each prompt in order.
    pub fn convert_batch<S: AsRef<str>>(&self, prompts: &[S], extra: &Metadata) -> Vec<PromptRecord> {
        prompts
            .iter()
            .map(|prompt| self.convert(prompt.as_ref(), extra))
            .collect()
    }

    /// Convert each value in order, stopping at the first non-string.
    ///
    /// No partial result is returned on failure.
    pub fn convert_value_batch(
        &self,
        prompts: &[Value],
        extra: &Metadata,
    ) -> Result<Vec<PromptRecord>, ConvertError> {
        prompts
            .iter()
            .map(|prompt| self.convert_value(prompt, extra))
            .collect()
    }

    /// Convert a prompt and serialize the record.
    ///
    /// See [`to_json_string_with_indent`] for the meaning of `indent`.
    pub fn to_json_string(
        &self,
        prompt: &str,
        indent: Option<usize>,
        extra: &Metadata,
    ) -> Result<String, ConvertError> {
        let record = self.convert(prompt, extra);
        to_json_string_with_indent(&record, indent)
    }

    fn build_metadata(&self, extra: &Metadata) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert(
            "timestamp".to_string(),
            Value::String(format_timestamp(self.clock.now())),
        );
        metadata.insert("version".to_string(), Value::String(VERSION.to_string()));

        // Caller keys win; an overwritten key keeps its position.
        for (key, value) in extra {
            metadata.insert(key.clone(), value.clone());
        }
        metadata
    }
}

/// Serialize `value` as JSON.
///
/// `Some(n)` pretty-prints with `n` spaces per level, `None` writes compact
/// JSON. Non-ASCII characters are written as-is.
pub fn to_json_string_with_indent<T: Serialize + ?Sized>(
    value: &T,
    indent: Option<usize>,
) -> Result<String, ConvertError> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };

    let indent = " ".repeat(width);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

/// Serialize a batch of records as a JSON array.
pub fn records_to_json_string(
    records: &[PromptRecord],
    indent: Option<usize>,
) -> Result<String, ConvertError> {
    to_json_string_with_indent(records, indent)
}

/// Convert a single prompt with a throwaway converter.
pub fn convert_prompt_to_json(prompt: &str, include_metadata: bool, extra: &Metadata) -> PromptRecord {
    PromptConverter::new(include_metadata).convert(prompt, extra)
}
