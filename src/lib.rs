//! # rapid_summarizer
//!
//! Extractive summarization of forum-style posts with TextRank.
//!
//! A document is split into sentences, each sentence is reduced to its
//! lowercase non-stopword tokens, every sentence pair is scored by cosine
//! similarity over a vocabulary local to that pair, and PageRank over the
//! resulting graph decides which sentences are most central. The top
//! sentences are returned in their original order.
//!
//! ```
//! let post = "Rust compilers check borrow rules. Gardeners water tomato plants. \
//!             Rust compilers enforce borrow rules strictly. Pilots land airplanes.";
//! let summary = rapid_summarizer::summarize(post, 2);
//! assert!(summary.contains("borrow rules"));
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{Sentence, Summary, SummarizerConfig, DEFAULT_NUM_SENTENCES};

// Re-export main functionality
pub use graph::{builder::SentenceGraphBuilder, csr::CsrGraph, matrix::SimilarityMatrix};
pub use nlp::{segmenter::Segmenter, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::observer::{NoopObserver, PipelineObserver, RecordingObserver};
pub use pipeline::runner::SummaryPipeline;
pub use summarizer::{
    post::PostSummarizer, selector::SentenceSelector, term_vector::pair_similarity, Summarizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` down to at most `target_sentence_count` sentences
///
/// Returns the text unchanged when it has no more sentences than requested,
/// an empty string for blank input or a count of zero, and otherwise the
/// most central sentences joined by single spaces in document order.
pub fn summarize(text: &str, target_sentence_count: usize) -> String {
    SummaryPipeline::new("en", target_sentence_count)
        .run(text, &mut NoopObserver)
        .text
}
