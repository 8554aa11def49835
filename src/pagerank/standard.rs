//! Standard PageRank algorithm
//!
//! Implements the classic PageRank with power iteration and proper
//! handling of dangling nodes over the dense similarity graph.

use super::PageRankResult;
use crate::config::PipelineConfig;
use crate::graph::DenseGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl From<&PipelineConfig> for StandardPageRank {
    fn from(cfg: &PipelineConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            threshold: cfg.tolerance,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on the similarity graph.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`. A graph with no usable edges (single sentence,
    /// all-zero similarities) settles on the uniform distribution: every
    /// node is dangling, so each iteration redistributes all mass evenly.
    pub fn run(&self, graph: &DenseGraph) -> PageRankResult {
        let n = graph.num_nodes();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        // Precompute dangling node mass contribution
        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Calculate dangling mass
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            // Reset new scores
            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node);

                if total_weight > 0.0 {
                    let scale = self.damping * node_score / total_weight;
                    for (neighbor, &weight) in graph.row(node).iter().enumerate() {
                        if weight != 0.0 {
                            new_scores[neighbor] += scale * weight;
                        }
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Swap buffers
            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize scores (they should already sum to ~1, but ensure numerical stability)
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SimilarityMatrix;

    fn build_graph(embeddings: &[Vec<f32>]) -> DenseGraph {
        DenseGraph::from_similarity(SimilarityMatrix::from_embeddings(embeddings))
    }

    /// Three mutually-similar sentences with identical pairwise similarity.
    fn build_symmetric_graph() -> DenseGraph {
        build_graph(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
    }

    /// A hub similar to every spoke, spokes orthogonal to each other.
    fn build_hub_graph() -> DenseGraph {
        build_graph(&[
            vec![1.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_symmetric_graph_equal_scores() {
        // All-orthogonal embeddings: every node dangling, uniform scores.
        let graph = build_symmetric_graph();
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        assert!(result.converged);
        let expected = 1.0 / 3.0;
        for score in &result.scores {
            assert!((score - expected).abs() < 0.01);
        }
    }

    #[test]
    fn test_hub_graph_hub_highest() {
        let graph = build_hub_graph();
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        assert!(result.converged);
        // Hub should have highest score (it receives from all spokes)
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score >= score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let graph = build_hub_graph();
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_node_gets_full_mass() {
        let graph = build_graph(&[vec![1.0, 2.0]]);
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        assert_eq!(result.scores.len(), 1);
        assert!((result.scores[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_graph() {
        let graph = DenseGraph::default();
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_all_zero_similarities_degenerate_to_uniform() {
        // Zero vectors everywhere: no edges at all, every node dangling.
        let graph = build_graph(&[vec![0.0; 4], vec![0.0; 4], vec![0.0; 4], vec![0.0; 4]]);
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        for &score in &result.scores {
            assert!((score - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let graph = build_hub_graph();
        let pr = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0); // Never converge

        let result = pr.run(&graph);

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        // Should still have valid scores
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_hub_graph();

        // Lower damping = more teleportation = more uniform scores
        let pr_low = StandardPageRank::new().with_damping(0.5);
        let result_low = pr_low.run(&graph);

        let pr_high = StandardPageRank::new().with_damping(0.95);
        let result_high = pr_high.run(&graph);

        // With higher damping, hub advantage should be more pronounced
        let hub_advantage_low = result_low.scores[0] - result_low.scores[1];
        let hub_advantage_high = result_high.scores[0] - result_high.scores[1];

        assert!(hub_advantage_high > hub_advantage_low);
    }

    #[test]
    fn test_top_n() {
        let graph = build_hub_graph();
        let pr = StandardPageRank::new();
        let result = pr.run(&graph);

        let top_2 = result.top_n(2);
        assert_eq!(top_2.len(), 2);
        // Hub should be first
        assert_eq!(top_2[0].0, 0);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let graph = build_hub_graph();
        let pr = StandardPageRank::new();
        let a = pr.run(&graph);
        let b = pr.run(&graph);
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_config_conversion() {
        let cfg = PipelineConfig {
            damping: 0.7,
            max_iterations: 42,
            tolerance: 1e-4,
        };
        let pr = StandardPageRank::from(&cfg);
        assert!((pr.damping - 0.7).abs() < f64::EPSILON);
        assert_eq!(pr.max_iterations, 42);
    }
}
