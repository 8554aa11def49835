//! Primary embedding backend: packaged MiniLM via `fastembed`
//!
//! The fast path. Model weights ship as an ONNX package that `fastembed`
//! fetches and caches on first use; inference already includes pooling and
//! normalization, so vectors come back ready for cosine comparison.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use super::{EmbedError, EmbeddingBackend, MINILM_DIMENSION};
use crate::config::EncoderConfig;

/// Sentence encoder backed by `fastembed`'s packaged MiniLM model.
pub struct FastTextEncoder {
    model: TextEmbedding,
}

impl FastTextEncoder {
    /// Load the packaged model, downloading it on first use.
    ///
    /// Fails when the package cannot be fetched or initialized in the
    /// current deployment environment; [`super::SentenceEncoder::load`]
    /// then falls back to the pooled BERT backend.
    pub fn load(config: &EncoderConfig) -> Result<Self, EmbedError> {
        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(config.show_download_progress);
        let model =
            TextEmbedding::try_new(options).map_err(|e| EmbedError::Primary(e.to_string()))?;
        Ok(Self { model })
    }
}

impl EmbeddingBackend for FastTextEncoder {
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if sentences.is_empty() {
            return Err(EmbedError::EmptyBatch);
        }
        self.model
            .embed(sentences.to_vec(), None)
            .map_err(|e| EmbedError::Primary(e.to_string()))
    }

    fn dimension(&self) -> usize {
        MINILM_DIMENSION
    }
}
