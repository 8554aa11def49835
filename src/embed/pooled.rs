//! Fallback embedding backend: raw BERT with manual mean pooling
//!
//! Loads the MiniLM checkpoint as a plain BERT model plus tokenizer from
//! the Hugging Face hub and reproduces the sentence-transformers pooling
//! recipe by hand: token embeddings are averaged with the attention mask
//! as weights, then L2-normalized. Exists for deployment environments
//! where the primary backend's packaged weights are unavailable.

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::{PaddingParams, Tokenizer};

use super::{EmbedError, EmbeddingBackend};
use crate::config::EncoderConfig;

/// Batch size for tokenizer/model passes.
const BATCH_SIZE: usize = 8;

/// Sentence encoder built from a BERT checkpoint and its tokenizer.
pub struct PooledBertEncoder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
}

impl PooledBertEncoder {
    /// Download the checkpoint from the configured repository and load it.
    pub fn load(config: &EncoderConfig) -> Result<Self, EmbedError> {
        let device = Device::cuda_if_available(0).or_else(|_| {
            tracing::warn!("CUDA not available, falling back to CPU");
            Ok::<Device, EmbedError>(Device::Cpu)
        })?;

        let api = Api::new()?;
        let repo = api.repo(Repo::new(config.model_repo.clone(), RepoType::Model));

        let model_config: Config =
            serde_json::from_str(&std::fs::read_to_string(repo.get("config.json")?)?)?;
        let hidden_size = model_config.hidden_size;

        let mut tokenizer = Tokenizer::from_file(repo.get("tokenizer.json")?)?;
        tokenizer.with_padding(Some(PaddingParams::default()));

        let weights_path = repo.get("model.safetensors")?;
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? };
        let model = BertModel::load(vb, &model_config)?;

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size,
        })
    }

    fn process_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        let encodings = self.tokenizer.encode_batch(texts.to_vec(), true)?;

        let token_ids: Result<Vec<Tensor>, _> = encodings
            .iter()
            .map(|e| Tensor::new(e.get_ids(), &self.device))
            .collect();
        let attention_mask: Result<Vec<Tensor>, _> = encodings
            .iter()
            .map(|e| Tensor::new(e.get_attention_mask(), &self.device))
            .collect();

        let token_ids = Tensor::stack(&token_ids?, 0)?;
        let attention_mask = Tensor::stack(&attention_mask?, 0)?;
        let token_type_ids = token_ids.zeros_like()?;

        let hidden = self
            .model
            .forward(&token_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean pooling weighted by the attention mask: padding tokens
        // contribute nothing, and the divisor is clamped away from zero.
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9, f32::MAX)?;
        let pooled = summed.broadcast_div(&counts)?;

        // L2-normalize so cosine similarity reduces to a dot product,
        // matching what the primary backend emits.
        let normalized = pooled.broadcast_div(&pooled.sqr()?.sum_keepdim(1)?.sqrt()?)?;

        Ok(normalized.to_vec2::<f32>()?)
    }
}

impl EmbeddingBackend for PooledBertEncoder {
    fn embed(&self, sentences: &[&str]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if sentences.is_empty() {
            return Err(EmbedError::EmptyBatch);
        }

        let mut results = Vec::with_capacity(sentences.len());
        for chunk in sentences.chunks(BATCH_SIZE) {
            results.extend(self.process_batch(chunk)?);
        }
        Ok(results)
    }

    fn dimension(&self) -> usize {
        self.hidden_size
    }
}
