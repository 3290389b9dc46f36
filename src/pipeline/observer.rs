//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Typical uses are timing stages and capturing intermediate
//! scores or graphs for debugging.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::graph::matrix::SimilarityMatrix;
use crate::pagerank::PageRankResult;
use crate::types::Sentence;

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StageReport {
    pub elapsed: Duration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residual: Option<f64>,
}

impl StageReport {
    /// A report carrying only timing
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Default::default()
        }
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired by [`SummaryPipeline`](super::runner::SummaryPipeline)
///
/// Every method has an empty default, so observers implement only what they
/// need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Sentences after tokenization
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_graph(&mut self, _matrix: &SimilarityMatrix) {}

    fn on_rank(&mut self, _result: &PageRankResult) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that keeps every stage report in order
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingObserver {
    pub stages: Vec<(&'static str, StageReport)>,
    #[serde(skip)]
    pub scores: Option<Vec<f64>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the stages that finished, in order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    /// Report for a finished stage
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, report.clone()));
    }

    fn on_rank(&mut self, result: &PageRankResult) {
        self.scores = Some(result.scores.clone());
    }
}
