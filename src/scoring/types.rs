use serde::{Deserialize, Serialize};

/// Incoming evaluation request.
///
/// Parsing is permissive by design: absent `answer`/`response` fields become
/// empty strings, and `responses` only triggers batch mode when it is
/// actually a JSON array (any other type falls through to single mode).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    /// Reference answer the responses are scored against.
    #[serde(default)]
    pub answer: String,

    /// Batch input: scored in order when present and an array.
    #[serde(default)]
    pub responses: Option<serde_json::Value>,

    /// Single input: used only when `responses` is absent or not an array.
    #[serde(default)]
    pub response: String,
}

impl EvaluationRequest {
    /// Returns the batch items when the request is in batch mode.
    ///
    /// Non-string array items are treated as empty strings, consistent with
    /// the absent-field defaults.
    pub fn batch_items(&self) -> Option<Vec<String>> {
        let array = self.responses.as_ref()?.as_array()?;
        Some(
            array
                .iter()
                .map(|item| item.as_str().unwrap_or_default().to_string())
                .collect(),
        )
    }
}

/// Scores for one response. `response` echoes the caller's original string,
/// never the trimmed/normalized form.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseScore {
    pub response: String,
    pub semantic_score: f32,
    pub keyword_score: f32,
    pub grammar_score: f32,
    pub predicted_score: f32,
}

/// Evaluation output. Batch results are wrapped under `results`; a single
/// result is returned as the bare object. The asymmetry mirrors the input
/// shape and is part of the wire contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    Batch { results: Vec<ResponseScore> },
    Single(ResponseScore),
}
