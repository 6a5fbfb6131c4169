//! Rubric library crate (used by the server binary and integration tests).
//!
//! Scores a free-text response against a reference answer. Three sub-scores
//! (semantic similarity, keyword overlap, grammar quality) are combined by a
//! pretrained regressor into a single predicted quality score, served over
//! `POST /evaluate`.
//!
//! # Public API Surface
//!
//! ## Core Pipeline
//! - [`normalize::normalize`] - markup stripping, character whitelist,
//!   domain-term expansion
//! - [`keyword_score`], [`grammar_score`], [`semantic_score`] - sub-scores
//! - [`Evaluator`] - orchestration over single and batch requests
//!
//! ## Collaborators
//! - [`SentenceEmbedder`], [`EmbedderConfig`] - embedding generation
//!   (candle BERT or deterministic stub)
//! - [`Tagger`], [`RuleTagger`] - dependency/POS tagging seam
//! - [`ScoreRegressor`] - pretrained final predictor, loaded once at startup
//!
//! ## Server
//! - [`Config`], [`ConfigError`] - environment configuration
//! - [`gateway`] - Axum router, handlers, and error mapping
//!
//! ## Test/Mock Support
//! Stub and mock implementations are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod lexicon;
pub mod normalize;
pub mod regressor;
pub mod scoring;
pub mod tagger;

pub use config::{Config, ConfigError};
pub use embedding::{EmbedderConfig, EmbeddingError, SentenceEmbedder, cosine_similarity};
pub use gateway::{HandlerState, create_router_with_state};
pub use regressor::{RegressorError, ScoreRegressor};
pub use scoring::{
    Evaluation, EvaluationRequest, Evaluator, ResponseScore, ScoringError, grammar_score,
    keyword_score, semantic_score,
};
#[cfg(any(test, feature = "mock"))]
pub use tagger::MockTagger;
pub use tagger::{DepLabel, PartOfSpeech, RuleTagger, TaggedToken, Tagger};
