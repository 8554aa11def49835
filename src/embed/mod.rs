//! Sentence embedding backends
//!
//! Maps each sentence to a fixed-length dense vector such that semantically
//! similar sentences land close under cosine similarity. Two backends
//! implement the same [`EmbeddingBackend`] interface:
//!
//! - [`FastTextEncoder`]: the primary path, a packaged MiniLM model served
//!   through `fastembed`.
//! - [`PooledBertEncoder`]: the fallback path, the same model family
//!   loaded as a raw BERT plus tokenizer, with mean pooling over token
//!   embeddings weighted by the attention mask.
//!
//! [`SentenceEncoder::load`] picks one backend at initialization time;
//! callers never branch on which is active. Failing to load either backend
//! is a fatal configuration error, not a per-request condition.

pub mod fast;
pub mod pooled;

use thiserror::Error;

pub use fast::FastTextEncoder;
pub use pooled::PooledBertEncoder;

use crate::config::EncoderConfig;

/// Embedding width of the MiniLM sentence encoder used by both backends.
pub const MINILM_DIMENSION: usize = 384;

/// Errors raised while loading or running an embedding backend.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("tokenizer initialization failed: {0}")]
    Tokenizer(#[from] tokenizers::Error),

    #[error("model download failed: {0}")]
    ModelDownload(#[from] hf_hub::api::sync::ApiError),

    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("tensor operation failed: {0}")]
    Tensor(#[from] candle_core::Error),

    #[error("invalid model configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("primary backend failed: {0}")]
    Primary(String),

    #[error("empty input batch")]
    EmptyBatch,

    /// Neither backend could be initialized. Unrecoverable: abort startup
    /// instead of retrying per call.
    #[error("no embedding backend available (primary: {primary}; fallback: {fallback})")]
    NoBackendAvailable { primary: String, fallback: String },
}

/// A sentence embedding model.
///
/// Implementations take sentences in document order and return one vector
/// per sentence, same order, all of [`dimension`](Self::dimension) width.
/// Inference borrows `&self`, so a loaded backend can serve concurrent
/// callers without external locking.
pub trait EmbeddingBackend {
    /// Embed a batch of sentences, one vector per input.
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError>;

    /// Width of the produced vectors.
    fn dimension(&self) -> usize;
}

/// The process-wide sentence encoder, loaded once and reused across calls.
///
/// Construction tries the primary packaged backend first and falls back to
/// the raw BERT path when the packaged weights are unavailable in the
/// deployment environment. Both variants are `Send + Sync` and embed
/// through `&self`, so a single loaded encoder may be shared across
/// threads; callers decide whether to share one instance or load
/// per-thread copies.
pub enum SentenceEncoder {
    /// Primary `fastembed` backend.
    Fast(FastTextEncoder),
    /// Fallback BERT-plus-tokenizer backend with manual mean pooling.
    Pooled(PooledBertEncoder),
}

impl SentenceEncoder {
    /// Load the encoder, trying the primary backend first.
    ///
    /// Returns [`EmbedError::NoBackendAvailable`] when both backends fail;
    /// treat that as fatal.
    pub fn load(config: &EncoderConfig) -> Result<Self, EmbedError> {
        match FastTextEncoder::load(config) {
            Ok(encoder) => {
                tracing::info!("loaded packaged MiniLM embedding backend");
                Ok(Self::Fast(encoder))
            }
            Err(primary) => {
                tracing::warn!(
                    error = %primary,
                    "primary embedding backend unavailable, falling back to pooled BERT"
                );
                match PooledBertEncoder::load(config) {
                    Ok(encoder) => {
                        tracing::info!(repo = %config.model_repo, "loaded pooled BERT embedding backend");
                        Ok(Self::Pooled(encoder))
                    }
                    Err(fallback) => Err(EmbedError::NoBackendAvailable {
                        primary: primary.to_string(),
                        fallback: fallback.to_string(),
                    }),
                }
            }
        }
    }
}

impl EmbeddingBackend for SentenceEncoder {
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        match self {
            Self::Fast(encoder) => encoder.embed(sentences),
            Self::Pooled(encoder) => encoder.embed(sentences),
        }
    }

    fn dimension(&self) -> usize {
        match self {
            Self::Fast(encoder) => encoder.dimension(),
            Self::Pooled(encoder) => encoder.dimension(),
        }
    }
}
