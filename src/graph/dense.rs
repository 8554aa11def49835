//! Dense weighted graph over sentence indices
//!
//! The similarity matrix is interpreted directly as undirected weighted
//! adjacency: every sentence pair is an edge, including weak ones, with
//! no thresholding or sparsification. Self-loops carry no ranking signal
//! and are dropped when the matrix is converted.

use super::similarity::SimilarityMatrix;

/// A fully-connected weighted graph backed by a flat adjacency buffer.
///
/// Nodes are sentence indices; `weight(i, j)` is the cosine similarity of
/// the two sentences. Total outgoing weight per node is precomputed once,
/// which is what PageRank needs on every iteration.
#[derive(Debug, Clone, Default)]
pub struct DenseGraph {
    /// Number of nodes.
    num_nodes: usize,
    /// Row-major adjacency weights, diagonal zeroed.
    weights: Vec<f64>,
    /// Total outgoing weight for each node.
    total_weight: Vec<f64>,
}

impl DenseGraph {
    /// Interpret a similarity matrix as weighted adjacency.
    ///
    /// The diagonal is zeroed: a sentence's self-similarity does not vote
    /// for its own centrality.
    pub fn from_similarity(matrix: SimilarityMatrix) -> Self {
        let (num_nodes, mut weights) = matrix.into_values();

        for i in 0..num_nodes {
            weights[i * num_nodes + i] = 0.0;
        }

        let total_weight = (0..num_nodes)
            .map(|i| weights[i * num_nodes..(i + 1) * num_nodes].iter().sum())
            .collect();

        Self {
            num_nodes,
            weights,
            total_weight,
        }
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Outgoing edge weights of a node as a contiguous slice.
    pub fn row(&self, node: usize) -> &[f64] {
        &self.weights[node * self.num_nodes..(node + 1) * self.num_nodes]
    }

    /// Weight of the edge (i, j).
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.num_nodes + j]
    }

    /// Total outgoing weight of a node.
    pub fn node_total_weight(&self, node: usize) -> f64 {
        self.total_weight[node]
    }

    /// Number of non-zero off-diagonal edges (each undirected edge counted
    /// twice).
    pub fn num_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w != 0.0).count()
    }

    /// Nodes with no positive outgoing weight.
    ///
    /// These receive the standard dangling-node treatment during ranking:
    /// their mass is distributed uniformly across all nodes instead of
    /// flowing along edges.
    pub fn dangling_nodes(&self) -> Vec<usize> {
        self.total_weight
            .iter()
            .enumerate()
            .filter(|(_, &w)| w <= 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}
