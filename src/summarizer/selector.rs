//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences, breaking score ties by document
//! position, and returns them in document order.

use serde::Serialize;

use crate::pagerank::ranked_indices;
use crate::types::{Sentence, DEFAULT_NUM_SENTENCES};

/// A selected sentence with its centrality score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// Position in the source document
    pub index: usize,
    /// Original sentence text
    pub text: String,
    /// PageRank score
    pub score: f64,
}

/// Score-ranked sentence selector
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a selector keeping the default number of sentences
    pub fn new() -> Self {
        Self {
            num_sentences: DEFAULT_NUM_SENTENCES,
        }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// Select the top sentences by score
    ///
    /// `scores[i]` belongs to `sentences[i]`. The result is sorted by
    /// document position. Selecting zero sentences yields an empty list.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Vec<SelectedSentence> {
        debug_assert_eq!(sentences.len(), scores.len());

        let mut chosen: Vec<usize> = ranked_indices(scores)
            .into_iter()
            .take(self.num_sentences)
            .collect();
        chosen.sort_unstable();

        chosen
            .into_iter()
            .map(|i| SelectedSentence {
                index: sentences[i].index,
                text: sentences[i].text.clone(),
                score: scores[i],
            })
            .collect()
    }

    /// Join selected sentences with single spaces
    pub fn join(selected: &[SelectedSentence]) -> String {
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(n: usize) -> Vec<Sentence> {
        (0..n)
            .map(|i| Sentence::new(format!("Sentence {i}."), 0, 0, i))
            .collect()
    }

    #[test]
    fn test_top_k_in_document_order() {
        let sentences = make_sentences(5);
        let scores = [0.1, 0.4, 0.05, 0.3, 0.15];

        let selected = SentenceSelector::new()
            .with_num_sentences(2)
            .select(&sentences, &scores);

        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(
            SentenceSelector::join(&selected),
            "Sentence 1. Sentence 3."
        );
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let sentences = make_sentences(4);
        let scores = [0.25; 4];

        let selected = SentenceSelector::new()
            .with_num_sentences(2)
            .select(&sentences, &scores);

        let indices: Vec<_> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_zero_sentences_is_empty() {
        let sentences = make_sentences(3);
        let selected = SentenceSelector::new()
            .with_num_sentences(0)
            .select(&sentences, &[0.2, 0.5, 0.3]);

        assert!(selected.is_empty());
        assert_eq!(SentenceSelector::join(&selected), "");
    }

    #[test]
    fn test_k_larger_than_input() {
        let sentences = make_sentences(2);
        let selected = SentenceSelector::new()
            .with_num_sentences(10)
            .select(&sentences, &[0.3, 0.7]);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].index, 0);
    }

    #[test]
    fn test_scores_carried_through() {
        let sentences = make_sentences(3);
        let selected = SentenceSelector::new()
            .with_num_sentences(1)
            .select(&sentences, &[0.2, 0.5, 0.3]);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].score, 0.5);
        assert_eq!(selected[0].text, "Sentence 1.");
    }

    #[test]
    fn test_empty_input() {
        let selected = SentenceSelector::new().select(&[], &[]);
        assert!(selected.is_empty());
    }
}
