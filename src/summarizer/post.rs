//! Post summarization policy
//!
//! Forum posts are only summarized when they are long. Short posts are kept
//! verbatim and posts with no body get a placeholder, so every post ends up
//! with a displayable summary string.

use super::Summarizer;
use crate::types::SummarizerConfig;

/// Applies the word-count threshold before summarizing a post body
#[derive(Debug, Clone, Default)]
pub struct PostSummarizer {
    summarizer: Summarizer,
}

impl PostSummarizer {
    /// Create with the default config (5 sentences, 50-word threshold)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a config
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            summarizer: Summarizer::with_config(config),
        }
    }

    /// Wrap an existing summarizer
    pub fn from_summarizer(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }

    /// Whether a body is long enough to summarize
    pub fn needs_summary(&self, body: &str) -> bool {
        word_count(body) > self.summarizer.config().min_words
    }

    /// Summary text to store for a post body
    ///
    /// - empty body: the configured placeholder
    /// - body of at most `min_words` words (including whitespace-only
    ///   bodies): the body unchanged
    /// - anything longer: the extractive summary
    pub fn summarize_post(&self, body: &str) -> String {
        let config = self.summarizer.config();
        if body.is_empty() {
            return config.empty_placeholder.clone();
        }
        if !self.needs_summary(body) {
            return body.to_string();
        }
        self.summarizer.summarize(body).text
    }
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
