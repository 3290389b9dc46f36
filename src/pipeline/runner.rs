//! Pipeline runner: drives the stages and hands results between them.
//!
//! [`SummaryPipeline::run`] executes the stages in order, passing
//! each stage's output to the next and notifying a [`PipelineObserver`] at each
//! boundary:
//!
//! 1. Segment the document into sentences
//! 2. Tokenize and filter each sentence
//! 3. Build the similarity graph
//! 4. Rank sentences with PageRank
//! 5. Select and join the top sentences
//!
//! Documents with no more sentences than requested are returned unchanged
//! after stage 1.

use crate::graph::builder::SentenceGraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::segmenter::Segmenter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH, STAGE_RANK,
    STAGE_SEGMENT, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::summarizer::selector::SentenceSelector;
use crate::types::{Summary, DEFAULT_NUM_SENTENCES};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The five summarization stages with their settings
#[derive(Debug, Clone)]
pub struct SummaryPipeline<'a> {
    pub segmenter: Segmenter,
    pub tokenizer: Tokenizer<'a>,
    pub graph_builder: SentenceGraphBuilder,
    pub ranker: StandardPageRank,
    pub num_sentences: usize,
}

impl Default for SummaryPipeline<'static> {
    fn default() -> Self {
        Self::new("en", DEFAULT_NUM_SENTENCES)
    }
}

impl SummaryPipeline<'static> {
    /// Pipeline using the shared stopword list for `language`
    pub fn new(language: &str, num_sentences: usize) -> Self {
        Self {
            segmenter: Segmenter::for_language(language),
            tokenizer: Tokenizer::new(language),
            graph_builder: SentenceGraphBuilder::new(),
            ranker: StandardPageRank::new(),
            num_sentences,
        }
    }
}

impl<'a> SummaryPipeline<'a> {
    /// Replace the tokenizer
    pub fn with_tokenizer<'b>(self, tokenizer: Tokenizer<'b>) -> SummaryPipeline<'b> {
        SummaryPipeline {
            segmenter: self.segmenter,
            tokenizer,
            graph_builder: self.graph_builder,
            ranker: self.ranker,
            num_sentences: self.num_sentences,
        }
    }

    /// Replace the segmenter
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Summarize one document
    pub fn run(&self, text: &str, observer: &mut impl PipelineObserver) -> Summary {
        if text.trim().is_empty() {
            return Summary::empty();
        }

        // Stage 1: Segment
        let sentences = {
            trace_stage!(STAGE_SEGMENT);
            observer.on_stage_start(STAGE_SEGMENT);
            let clock = StageClock::start();
            let sentences = self.segmenter.segment(text);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(sentences.len())
                .build();
            observer.on_stage_end(STAGE_SEGMENT, &report);
            sentences
        };

        let n = sentences.len();
        if n <= self.num_sentences {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = n,
                requested = self.num_sentences,
                "document short enough to return unchanged"
            );
            return Summary::passthrough(text, n);
        }

        // Stage 2: Tokenize
        let sentences = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let sentences = self.tokenizer.tokenize_sentences(sentences);
            observer.on_stage_end(STAGE_TOKENIZE, &StageReport::new(clock.elapsed()));
            observer.on_sentences(&sentences);
            sentences
        };

        // Stage 3: Build graph
        let graph = {
            trace_stage!(STAGE_GRAPH);
            observer.on_stage_start(STAGE_GRAPH);
            let clock = StageClock::start();
            let matrix = self.graph_builder.build(&sentences);
            let graph = CsrGraph::from_matrix(&matrix);
            let report = StageReportBuilder::new(clock.elapsed())
                .nodes(graph.num_nodes)
                .edges(matrix.edge_count())
                .build();
            observer.on_stage_end(STAGE_GRAPH, &report);
            observer.on_graph(&matrix);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                nodes = graph.num_nodes,
                edges = matrix.edge_count(),
                isolated = graph.dangling_nodes().len(),
                "built sentence graph"
            );
            graph
        };

        // Stage 4: Rank
        let ranking = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranking = self.ranker.run(&graph);
            let report = StageReportBuilder::new(clock.elapsed())
                .iterations(ranking.iterations)
                .converged(ranking.converged)
                .residual(ranking.delta)
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            observer.on_rank(&ranking);
            ranking
        };

        // Stage 5: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selected = SentenceSelector::new()
            .with_num_sentences(self.num_sentences)
            .select(&sentences, &ranking.scores);
        let summary = Summary {
            text: SentenceSelector::join(&selected),
            sentences: selected,
            num_input_sentences: n,
            passthrough: false,
            iterations: ranking.iterations,
            converged: ranking.converged,
        };
        observer.on_stage_end(STAGE_SELECT, &StageReport::new(clock.elapsed()));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::pipeline::observer::{NoopObserver, RecordingObserver};

    const DOC: &str = "Volcano lava flows downhill. Guitar strings vibrate loudly. \
                       Volcano lava cools into basalt. Pizza ovens burn wood. \
                       Basalt forms from cooled lava. Tomato plants need sunlight.";

    #[test]
    fn test_runs_all_stages_in_order() {
        let mut observer = RecordingObserver::new();
        let summary = SummaryPipeline::new("en", 2).run(DOC, &mut observer);

        assert_eq!(
            observer.stage_names(),
            vec![STAGE_SEGMENT, STAGE_TOKENIZE, STAGE_GRAPH, STAGE_RANK, STAGE_SELECT]
        );
        assert_eq!(observer.report(STAGE_GRAPH).unwrap().nodes, Some(6));
        assert_eq!(summary.num_input_sentences, 6);
        assert_eq!(summary.sentences.len(), 2);
        assert!(!summary.passthrough);
    }

    #[test]
    fn test_short_document_stops_after_segmenting() {
        let mut observer = RecordingObserver::new();
        let text = "Only one sentence here. And another.";
        let summary = SummaryPipeline::new("en", 5).run(text, &mut observer);

        assert_eq!(observer.stage_names(), vec![STAGE_SEGMENT]);
        assert!(observer.scores.is_none());
        assert_eq!(summary.text, text);
        assert!(summary.passthrough);
    }

    #[test]
    fn test_blank_document_runs_nothing() {
        let mut observer = RecordingObserver::new();
        let summary = SummaryPipeline::default().run(" \n ", &mut observer);

        assert!(observer.stages.is_empty());
        assert_eq!(summary.text, "");
    }

    #[test]
    fn test_zero_sentences_requested() {
        let summary = SummaryPipeline::new("en", 0).run(DOC, &mut NoopObserver);
        assert_eq!(summary.text, "");
        assert!(summary.sentences.is_empty());
        assert_eq!(summary.num_input_sentences, 6);
    }

    #[test]
    fn test_custom_tokenizer() {
        // Without stopword removal every sentence still ranks
        let filter = StopwordFilter::empty();
        let pipeline = SummaryPipeline::new("en", 3).with_tokenizer(Tokenizer::with_filter(&filter));
        let summary = pipeline.run(DOC, &mut NoopObserver);

        assert_eq!(summary.sentences.len(), 3);
        let indices = summary.indices();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rank_scores_reported() {
        let mut observer = RecordingObserver::new();
        SummaryPipeline::new("en", 2).run(DOC, &mut observer);

        let scores = observer.scores.as_ref().unwrap();
        assert_eq!(scores.len(), 6);
        let sum: f64 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(observer.report(STAGE_RANK).unwrap().converged, Some(true));
    }
}
