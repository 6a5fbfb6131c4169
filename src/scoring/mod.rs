//! Scoring pipeline: the three sub-scores and their orchestration.
//!
//! - [`keyword`]: lemmatized Jaccard overlap of content words.
//! - [`grammar`]: heuristic well-formedness from syntactic tags.
//! - [`semantic`]: embedding cosine similarity.
//! - [`evaluator`]: sequences normalization, the sub-scores, and the
//!   regressor for single and batch requests.

pub mod error;
pub mod evaluator;
pub mod grammar;
pub mod keyword;
pub mod semantic;
pub mod types;

pub use error::ScoringError;
pub use evaluator::Evaluator;
pub use grammar::grammar_score;
pub use keyword::keyword_score;
pub use semantic::semantic_score;
pub use types::{Evaluation, EvaluationRequest, ResponseScore};

/// Rounds to 3 decimal places (sub-score precision).
pub(crate) fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Rounds to 2 decimal places (predicted-score precision).
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
