//! Word tokenization for sentence similarity
//!
//! Tokens are whitespace-separated words, lowercased, with stopwords removed.
//! Punctuation is left attached to its word, so `"rust."` and `"rust"` are
//! different terms.

use std::borrow::Cow;

use super::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Lowercasing, stopword-filtering word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    stopwords: Cow<'a, StopwordFilter>,
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Tokenizer<'static> {
    /// Tokenizer backed by the shared stopword list for `language`
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Cow::Borrowed(StopwordFilter::shared(language)),
        }
    }

    /// Tokenizer that owns its stopword filter
    pub fn owned(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords: Cow::Owned(stopwords),
        }
    }
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer backed by a caller-provided stopword filter
    pub fn with_filter(stopwords: &'a StopwordFilter) -> Self {
        Self {
            stopwords: Cow::Borrowed(stopwords),
        }
    }

    /// Split a sentence into filtered lowercase tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|w| !self.stopwords.is_stopword(w))
            .map(str::to_string)
            .collect()
    }

    /// Fill in the tokens of each sentence
    pub fn tokenize_sentences(&self, sentences: Vec<Sentence>) -> Vec<Sentence> {
        sentences
            .into_iter()
            .map(|s| {
                let tokens = self.tokenize(&s.text);
                s.with_tokens(tokens)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_filters() {
        let tokenizer = Tokenizer::new("en");
        let tokens = tokenizer.tokenize("The Volcano and the Guitar");
        assert_eq!(tokens, vec!["volcano", "guitar"]);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokenizer = Tokenizer::new("en");
        let tokens = tokenizer.tokenize("Volcano, guitar.");
        assert_eq!(tokens, vec!["volcano,", "guitar."]);
    }

    #[test]
    fn test_only_stopwords_yields_empty() {
        let tokenizer = Tokenizer::new("en");
        assert!(tokenizer.tokenize("and the of").is_empty());
        assert!(tokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn test_custom_filter() {
        let filter = StopwordFilter::from_list(&["volcano"]);
        let tokenizer = Tokenizer::with_filter(&filter);
        assert_eq!(tokenizer.tokenize("the volcano erupts"), vec!["the", "erupts"]);
    }

    #[test]
    fn test_content_words_survive() {
        let tokenizer = Tokenizer::new("en");
        assert_eq!(
            tokenizer.tokenize("Our case shows the same problem again"),
            vec!["case", "shows", "problem"]
        );
        assert_eq!(
            tokenizer.tokenize("This case is a real problem for everyone"),
            vec!["case", "real", "problem", "everyone"]
        );
    }

    #[test]
    fn test_owned_filter() {
        let mut filter = StopwordFilter::new("en");
        filter.add_stopwords(["lol"]);
        let tokenizer = Tokenizer::owned(filter);
        assert_eq!(tokenizer.tokenize("lol the volcano"), vec!["volcano"]);
    }

    #[test]
    fn test_repeated_words_kept() {
        let filter = StopwordFilter::empty();
        let tokenizer = Tokenizer::with_filter(&filter);
        assert_eq!(tokenizer.tokenize("lava Lava LAVA"), vec!["lava", "lava", "lava"]);
    }

    #[test]
    fn test_tokenize_sentences() {
        let tokenizer = Tokenizer::new("en");
        let sentences = vec![
            Sentence::new("The volcano erupted.", 0, 20, 0),
            Sentence::new("And the.", 21, 29, 1),
        ];
        let sentences = tokenizer.tokenize_sentences(sentences);
        assert_eq!(sentences[0].tokens, vec!["volcano", "erupted."]);
        // "the." keeps its period and so is not a stopword
        assert_eq!(sentences[1].tokens, vec!["the."]);
    }
}
