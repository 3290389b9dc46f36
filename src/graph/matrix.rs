//! Dense sentence similarity matrix
//!
//! An N×N arena of weights addressed by `(i, j)`. Writes go through
//! [`SimilarityMatrix::set_pair`], which mirrors the value across the
//! diagonal and refuses to touch the diagonal itself, so the matrix is
//! always symmetric with a zero diagonal.

/// Symmetric pairwise similarity weights between sentences
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    /// Row-major weights, `size * size` entries
    weights: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix for `size` sentences
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![0.0; size * size],
        }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Weight between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    /// Set the weight of an unordered pair, writing both `[i][j]` and `[j][i]`
    ///
    /// Self-pairs are ignored; the diagonal stays zero.
    pub fn set_pair(&mut self, i: usize, j: usize, weight: f64) {
        if i == j {
            return;
        }
        self.weights[i * self.size + j] = weight;
        self.weights[j * self.size + i] = weight;
    }

    /// All weights from sentence `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Total weight leaving sentence `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Number of unordered pairs with non-zero weight
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&w| w > 0.0).count())
            .sum()
    }
}
