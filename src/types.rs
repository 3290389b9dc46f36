//! Core data types
//!
//! Sentences produced by segmentation, the summarizer configuration, and the
//! summary returned to callers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizerError};
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::selector::SelectedSentence;

/// Number of sentences kept when the caller does not ask for a specific count
pub const DEFAULT_NUM_SENTENCES: usize = 5;

/// Posts at or below this many words are passed through unsummarized
pub const DEFAULT_MIN_WORDS: usize = 50;

/// Stored in place of a summary when a post has no body
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "[No text content]";

/// A sentence in the source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Original text, trimmed of surrounding whitespace
    pub text: String,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Position in the document (0-based)
    pub index: usize,
    /// Lowercased tokens with stopwords removed
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a sentence with no tokens yet
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens: Vec::new(),
        }
    }

    /// Attach filtered tokens
    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }

    /// True when every word was filtered out
    pub fn has_no_content(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The extract produced for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined with single spaces, or the original text
    /// when it was returned unchanged
    pub text: String,
    /// Selected sentences in document order (empty on passthrough)
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences found in the document
    pub num_input_sentences: usize,
    /// True when the document had too few sentences to rank
    pub passthrough: bool,
    /// PageRank iterations performed (0 when nothing was ranked)
    pub iterations: usize,
    /// Whether PageRank converged
    pub converged: bool,
}

impl Summary {
    /// Summary of a document with no sentences
    pub fn empty() -> Self {
        Self {
            converged: true,
            ..Default::default()
        }
    }

    /// The document returned unchanged
    pub fn passthrough(text: &str, num_input_sentences: usize) -> Self {
        Self {
            text: text.to_string(),
            num_input_sentences,
            passthrough: true,
            converged: true,
            ..Default::default()
        }
    }

    /// Indices of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

/// Configuration for the summarizer
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only needs to name what it changes:
///
/// ```json
/// { "num_sentences": 3, "language": "de" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences in the extract
    pub num_sentences: usize,
    /// Stopword language code (e.g. "en", "de")
    pub language: String,
    /// Word count a post must exceed before it is summarized
    pub min_words: usize,
    /// Text returned for posts with an empty body
    pub empty_placeholder: String,
    /// Words filtered out on top of the language's stopword list
    pub extra_stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
            language: "en".to_string(),
            min_words: DEFAULT_MIN_WORDS,
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Set the number of sentences to extract
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the post word-count threshold
    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Set the empty-post placeholder
    pub fn with_empty_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = placeholder.into();
        self
    }

    /// Filter additional words (e.g. forum slang) on top of the language list
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that every field is usable
    pub fn validate(&self) -> Result<()> {
        if self.num_sentences == 0 {
            return Err(SummarizerError::invalid_config(
                "num_sentences",
                "must be at least 1",
            ));
        }
        if !StopwordFilter::is_supported(&self.language) {
            return Err(SummarizerError::UnsupportedLanguage(self.language.clone()));
        }
        if self.extra_stopwords.iter().any(|w| w.trim().is_empty()) {
            return Err(SummarizerError::invalid_config(
                "extra_stopwords",
                "entries must not be blank",
            ));
        }
        Ok(())
    }
}
