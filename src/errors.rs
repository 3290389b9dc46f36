//! Error types
//!
//! Summarization itself is total and never fails. Errors only surface when
//! loading or validating a [`SummarizerConfig`](crate::types::SummarizerConfig).

use thiserror::Error;

/// Errors produced while building a summarizer from configuration
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// A config field holds a value the summarizer cannot use
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The requested stopword language has no list
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),

    /// Config JSON could not be parsed
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummarizerError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible summarizer operations
pub type Result<T> = std::result::Result<T, SummarizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = SummarizerError::invalid_config("num_sentences", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid config field `num_sentences`: must be at least 1"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: SummarizerError = parse.unwrap_err().into();
        assert!(matches!(err, SummarizerError::Json(_)));
    }
}
