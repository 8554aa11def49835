//! Similarity graph construction and representation
//!
//! This module builds the pairwise cosine similarity matrix over sentence
//! embeddings and exposes it as a dense weighted graph for ranking.

pub mod dense;
pub mod similarity;

pub use dense::DenseGraph;
pub use similarity::{cosine_similarity, SimilarityMatrix};
