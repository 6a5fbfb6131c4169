//! Semantic similarity scoring via sentence embeddings.

use crate::embedding::{SentenceEmbedder, cosine_similarity};

use super::{ScoringError, round3};

/// Cosine similarity of the two sentence embeddings, rounded to 3 decimals.
///
/// Either input being empty or whitespace-only is defined as `0.0` rather
/// than deferring to whatever the embedder produces for an empty token
/// sequence.
pub fn semantic_score(
    embedder: &SentenceEmbedder,
    reference: &str,
    response: &str,
) -> Result<f32, ScoringError> {
    if reference.trim().is_empty() || response.trim().is_empty() {
        return Ok(0.0);
    }

    let reference_embedding = embedder.embed(reference)?;
    let response_embedding = embedder.embed(response)?;

    Ok(round3(cosine_similarity(
        &reference_embedding,
        &response_embedding,
    )))
}
