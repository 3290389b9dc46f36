//! PageRank algorithms
//!
//! This module provides the weighted power-iteration PageRank used to rank
//! sentences by centrality.

pub mod standard;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score, ties broken by lower node ID
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        ranked_indices(&self.scores)
            .into_iter()
            .take(n)
            .map(|i| (i as u32, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// Node indices ordered by score descending, then index ascending
pub fn ranked_indices(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order
}
