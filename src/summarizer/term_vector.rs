//! Term-count vectors over a pair-local vocabulary
//!
//! Two sentences are compared by building a vocabulary from the union of
//! their tokens only, counting each token into that vocabulary, and taking
//! the cosine of the two count vectors. The vocabulary is never shared
//! across pairs.

use rustc_hash::FxHashMap;

/// Vocabulary spanning exactly the tokens of one sentence pair
#[derive(Debug, Clone, Default)]
pub struct PairVocabulary<'a> {
    /// Token -> dimension, in first-seen order
    index: FxHashMap<&'a str, usize>,
}

impl<'a> PairVocabulary<'a> {
    /// Build the union vocabulary of two token lists
    pub fn from_pair(a: &'a [String], b: &'a [String]) -> Self {
        let mut index = FxHashMap::default();
        for token in a.iter().chain(b.iter()) {
            let next = index.len();
            index.entry(token.as_str()).or_insert(next);
        }
        Self { index }
    }

    /// Number of distinct tokens in the pair
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if both sentences were empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Count `tokens` into a vector over this vocabulary
    ///
    /// Tokens outside the vocabulary are ignored.
    pub fn vectorize(&self, tokens: &[String]) -> TermVector {
        let mut counts = vec![0u32; self.index.len()];
        for token in tokens {
            if let Some(&dim) = self.index.get(token.as_str()) {
                counts[dim] += 1;
            }
        }
        TermVector { counts }
    }
}

/// Integer term counts, one dimension per vocabulary entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    pub counts: Vec<u32>,
}

impl TermVector {
    /// Dot product with another vector over the same vocabulary
    ///
    /// Computed in integers so the result does not depend on operand order.
    pub fn dot(&self, other: &TermVector) -> u64 {
        self.counts
            .iter()
            .zip(&other.counts)
            .map(|(&a, &b)| u64::from(a) * u64::from(b))
            .sum()
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        (self.dot(self) as f64).sqrt()
    }

    /// Check if all counts are zero
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Cosine similarity, 0 when either vector is all zeros
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) as f64 / denom).clamp(0.0, 1.0)
    }
}

/// Cosine similarity of two token lists over their pair-local vocabulary
///
/// Returns 0 when either list is empty.
pub fn pair_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let vocab = PairVocabulary::from_pair(a, b);
    vocab.vectorize(a).cosine_similarity(&vocab.vectorize(b))
}
