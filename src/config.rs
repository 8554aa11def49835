//! Pipeline and encoder configuration.
//!
//! [`PipelineConfig`] carries the ranking parameters threaded through the
//! pipeline stages; [`EncoderConfig`] controls how the embedding backends
//! are loaded. Both deserialize from JSON with every field optional, so a
//! config of `{}` is the documented default.
//!
//! The flashcard count is intentionally absent here: it is a fixed step
//! function of the input length (see [`crate::cards::target_card_count`])
//! and is not a call-time knob.

use serde::{Deserialize, Serialize};

/// Hugging Face repository holding the sentence encoder weights.
///
/// Both backends embed with the same MiniLM model: the primary backend
/// through its own packaged copy, the fallback by downloading this repo.
pub const DEFAULT_MODEL_REPO: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Ranking parameters for the centrality stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// PageRank damping factor.
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Maximum power-iteration count before giving up on convergence.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Convergence threshold on the L1 delta between iterations.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_damping() -> f64 {
    0.85
}

fn default_max_iterations() -> usize {
    100
}

fn default_tolerance() -> f64 {
    1e-6
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

/// Options for loading the embedding backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Model repository used by the fallback backend.
    #[serde(default = "default_model_repo")]
    pub model_repo: String,

    /// Show a download progress bar when fetching packaged weights.
    #[serde(default)]
    pub show_download_progress: bool,
}

fn default_model_repo() -> String {
    DEFAULT_MODEL_REPO.to_string()
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_repo: default_model_repo(),
            show_download_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranking_parameters() {
        let cfg = PipelineConfig::default();
        assert!((cfg.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(cfg.max_iterations, 100);
        assert!((cfg.tolerance - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert!((cfg.damping - 0.85).abs() < f64::EPSILON);

        let enc: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(enc.model_repo, DEFAULT_MODEL_REPO);
        assert!(!enc.show_download_progress);
    }

    #[test]
    fn test_partial_override() {
        let cfg: PipelineConfig = serde_json::from_str(r#"{ "damping": 0.5 }"#).unwrap();
        assert!((cfg.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.max_iterations, 100);
    }

    #[test]
    fn test_serde_roundtrip() {
        let cfg = PipelineConfig {
            damping: 0.9,
            max_iterations: 50,
            tolerance: 1e-8,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert!((back.damping - 0.9).abs() < f64::EPSILON);
        assert_eq!(back.max_iterations, 50);
    }
}
