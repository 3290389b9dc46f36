//! Sentence graph construction
//!
//! Scores every unordered sentence pair once and stores the result in a
//! [`SimilarityMatrix`]. The graph is complete: every pair is an edge, with
//! weight 0 when the sentences share no terms.

use super::matrix::SimilarityMatrix;
use crate::summarizer::term_vector::pair_similarity;
use crate::types::Sentence;

/// Builds the similarity graph over a document's sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceGraphBuilder;

impl SentenceGraphBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Score all sentence pairs
    ///
    /// Each unordered pair `(i, j)` with `i < j` is scored exactly once and
    /// mirrored; self-pairs are never scored.
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let n = sentences.len();
        let mut matrix = SimilarityMatrix::new(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = pair_similarity(&sentences[i].tokens, &sentences[j].tokens);
                if weight > 0.0 {
                    matrix.set_pair(i, j, weight);
                }
            }
        }

        matrix
    }
}
