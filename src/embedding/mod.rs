//! Sentence embedding for semantic similarity scoring.
//!
//! [`SentenceEmbedder`] wraps a BERT-class encoder (mean pooling over the
//! last hidden state, L2-normalized) loaded through candle, or a
//! deterministic stub for tests and model-less deployments. Embeddings are
//! memoized by exact input string; a memoized result is bit-identical to an
//! uncached call because both backends are deterministic.

pub mod config;
pub mod device;
mod error;


pub use config::EmbedderConfig;
pub use error::EmbeddingError;

use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use moka::sync::Cache;
use tracing::{debug, info, warn};

use device::select_device;

struct BertEncoder {
    model: BertModel,
    tokenizer: tokenizers::Tokenizer,
    device: Device,
}

impl BertEncoder {
    fn load(config: &EmbedderConfig, device: &Device) -> Result<Self, EmbeddingError> {
        let tokenizer = load_tokenizer(&config.tokenizer_path)?;

        let config_path = config.model_dir.join("config.json");
        let weights_path = config.model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(&config_path)?;
        let bert_config: BertConfig =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("failed to parse model config: {}", e),
            })?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)?
        };

        let model = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &bert_config)?
        } else {
            BertModel::load(vb.clone(), &bert_config)?
        };

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size = bert_config.hidden_size,
            "Sentence encoder loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device: device.clone(),
        })
    }
}

fn load_tokenizer(path: &Path) -> Result<tokenizers::Tokenizer, EmbeddingError> {
    tokenizers::Tokenizer::from_file(path).map_err(|e| EmbeddingError::TokenizationFailed {
        reason: format!("failed to load tokenizer: {}", e),
    })
}

enum EmbedderBackend {
    Model(Box<BertEncoder>),
    Stub,
}

/// Sentence embedding generator (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model(encoder) => format!("Model({:?})", encoder.device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let cache = Cache::new(config.cache_capacity);

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (deterministic hash embeddings)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
                cache,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let encoder = BertEncoder::load(&config, &device)?;

        Ok(Self {
            backend: EmbedderBackend::Model(Box::new(encoder)),
            config,
            cache,
        })
    }

    /// Generates (or recalls) the embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        if let Some(hit) = self.cache.get(text) {
            return Ok(hit);
        }

        let embedding = match &self.backend {
            EmbedderBackend::Model(encoder) => self.embed_with_model(text, encoder)?,
            EmbedderBackend::Stub => self.embed_stub(text),
        };

        let embedding = Arc::new(embedding);
        self.cache.insert(text.to_string(), Arc::clone(&embedding));
        Ok(embedding)
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertEncoder,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding = encoder.tokenizer.encode(text, true).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        let mut tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        if tokens.len() > self.config.max_seq_len {
            tokens.truncate(self.config.max_seq_len);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding (encoder forward pass)"
        );

        let input_ids = Tensor::new(&tokens[..], &encoder.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        // hidden shape: [1, seq_len, hidden_size]
        let hidden = encoder.model.forward(&input_ids, &token_type_ids, None)?;

        // Mean pooling over the sequence dimension.
        let pooled = (hidden.sum(1)? / (tokens.len() as f64))?;
        let mut embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;
        embedding.truncate(self.config.embedding_dim);

        Ok(l2_normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        l2_normalize(embedding)
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }
}

fn l2_normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}

/// Cosine similarity of two vectors; `0.0` when either has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
