//! Pairwise cosine similarity over sentence embeddings
//!
//! The matrix is a flat row-major buffer indexed by sentence position.
//! The graph here is fully connected, so a dense layout beats pointer
//! chasing and allocates once for all O(n²) entries.

use rayon::prelude::*;

/// Cosine similarity between two embedding vectors.
///
/// A zero vector on either side yields 0.0, never NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += f64::from(x) * f64::from(y);
        norm_a += f64::from(x) * f64::from(x);
        norm_b += f64::from(y) * f64::from(y);
    }
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a.sqrt() * norm_b.sqrt())
    } else {
        0.0
    }
}

/// Square symmetric matrix of pairwise sentence similarities.
///
/// Entry (i, j) is the cosine similarity of embedding i and embedding j,
/// in [-1, 1]. The diagonal holds the self-similarity of 1.0 for non-zero
/// vectors; [`crate::graph::DenseGraph`] drops it when interpreting the
/// matrix as edges.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix from one embedding per sentence.
    ///
    /// Rows are computed in parallel; each row writes into its own slice of
    /// the flat buffer.
    pub fn from_embeddings(embeddings: &[Vec<f32>]) -> Self {
        let n = embeddings.len();
        let mut values = vec![0.0f64; n * n];

        // Chunk size must be non-zero even when there are no rows.
        values
            .par_chunks_mut(n.max(1))
            .enumerate()
            .for_each(|(i, row)| {
                for (j, target) in row.iter_mut().enumerate() {
                    *target = cosine_similarity(&embeddings[i], &embeddings[j]);
                }
            });

        Self { n, values }
    }

    /// Matrix dimension (= sentence count).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity entry (i, j).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Row i as a contiguous slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Consume the matrix, returning the flat row-major buffer.
    pub(crate) fn into_values(self) -> (usize, Vec<f64>) {
        (self.n, self.values)
    }
}
