use axum::response::IntoResponse;
use axum::{Json, extract::State, response::Response};
use tracing::{error, info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::scoring::{Evaluation, EvaluationRequest};
use crate::tagger::Tagger;

/// `POST /evaluate`: scores one response or an ordered batch against the
/// reference answer.
#[instrument(skip(state, request))]
pub async fn evaluate_handler<T: Tagger + 'static>(
    State(state): State<HandlerState<T>>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Response, GatewayError> {
    let evaluation = state.evaluator.evaluate(&request).inspect_err(|e| {
        error!(error = %e, "Evaluation failed");
    })?;

    match &evaluation {
        Evaluation::Batch { results } => {
            info!(results = results.len(), "Batch evaluation complete");
        }
        Evaluation::Single(_) => {
            info!("Single evaluation complete");
        }
    }

    Ok(Json(evaluation).into_response())
}
