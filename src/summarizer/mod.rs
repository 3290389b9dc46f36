//! Summarization components
//!
//! Provides extractive summarization: sentences are ranked by PageRank
//! centrality over a cosine-similarity graph and the top ones are kept in
//! document order.

pub mod post;
pub mod selector;
pub mod term_vector;

use rayon::prelude::*;

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::SummaryPipeline;
use crate::types::{Summary, SummarizerConfig};

/// Extractive TextRank summarizer
///
/// Holds no per-document state, so one instance can summarize any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    pipeline: SummaryPipeline<'static>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create from a config without validating it
    ///
    /// Unknown languages fall back to English stopwords and a sentence count
    /// of zero produces empty summaries.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let mut pipeline = SummaryPipeline::new(&config.language, config.num_sentences);
        if !config.extra_stopwords.is_empty() {
            let mut stopwords = StopwordFilter::new(&config.language);
            stopwords.add_stopwords(&config.extra_stopwords);
            pipeline = pipeline.with_tokenizer(Tokenizer::owned(stopwords));
        }
        Self { config, pipeline }
    }

    /// Create from a config, rejecting invalid settings
    pub fn try_from_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize one document
    pub fn summarize(&self, text: &str) -> Summary {
        self.pipeline.run(text, &mut NoopObserver)
    }

    /// Summarize one document, reporting each stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        self.pipeline.run(text, observer)
    }

    /// Summarize many documents in parallel
    ///
    /// Results are in input order.
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<Summary>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}
