//! Conversion errors.

use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Prompt must be a string, got {found}")]
    InvalidInput { found: &'static str },

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Serialized JSON is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ConvertError {
    /// Build an `InvalidInput` error describing the offending value.
    pub fn invalid_input(value: &Value) -> Self {
        ConvertError::InvalidInput {
            found: json_type_name(value),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ConvertError::InvalidInput { .. })
    }
}

/// Name of the JSON type of `value`, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
