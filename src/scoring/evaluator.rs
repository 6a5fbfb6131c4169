//! Orchestrates normalization, the three sub-scores, and the regressor.

use std::sync::Arc;

use tracing::debug;

use crate::embedding::SentenceEmbedder;
use crate::normalize::normalize;
use crate::regressor::ScoreRegressor;
use crate::tagger::Tagger;

use super::types::{Evaluation, EvaluationRequest, ResponseScore};
use super::{ScoringError, grammar_score, keyword_score, round2, semantic_score};

/// Scoring orchestrator. Holds the process-wide, read-only collaborators;
/// loaded once at startup and shared across requests.
pub struct Evaluator<T: Tagger> {
    embedder: Arc<SentenceEmbedder>,
    tagger: T,
    regressor: Arc<ScoreRegressor>,
}

impl<T: Tagger> Evaluator<T> {
    pub fn new(
        embedder: Arc<SentenceEmbedder>,
        tagger: T,
        regressor: Arc<ScoreRegressor>,
    ) -> Self {
        Self {
            embedder,
            tagger,
            regressor,
        }
    }

    pub fn embedder(&self) -> &SentenceEmbedder {
        &self.embedder
    }

    pub fn regressor(&self) -> &ScoreRegressor {
        &self.regressor
    }

    /// Evaluates a request in batch or single mode, mirroring the input
    /// shape in the output shape.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation, ScoringError> {
        let answer = normalize(request.answer.trim().to_lowercase().as_str());

        match request.batch_items() {
            Some(items) => {
                debug!(batch_size = items.len(), "Evaluating batch request");
                let results = items
                    .iter()
                    .map(|response| self.score_response(&answer, response))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Evaluation::Batch { results })
            }
            None => {
                debug!("Evaluating single-response request");
                let result = self.score_response(&answer, &request.response)?;
                Ok(Evaluation::Single(result))
            }
        }
    }

    /// Scores one response against the already-normalized answer. The
    /// result echoes the original, untrimmed response string.
    fn score_response(
        &self,
        normalized_answer: &str,
        original_response: &str,
    ) -> Result<ResponseScore, ScoringError> {
        let response = normalize(original_response.trim().to_lowercase().as_str());

        let semantic = semantic_score(&self.embedder, normalized_answer, &response)?;
        let keyword = keyword_score(normalized_answer, &response);
        let grammar = grammar_score(&self.tagger, &response);

        // Feature order is part of the regressor contract.
        let features = [semantic, keyword, grammar];
        let predicted = round2(self.regressor.predict(&features));

        debug!(
            semantic,
            keyword, grammar, predicted, "Scored response"
        );

        Ok(ResponseScore {
            response: original_response.to_string(),
            semantic_score: semantic,
            keyword_score: keyword,
            grammar_score: grammar,
            predicted_score: predicted,
        })
    }
}
