//! Pretrained score regressor.
//!
//! The regressor is an opaque `predict([semantic, keyword, grammar]) -> f32`
//! capability, loaded once at startup from a JSON artifact and immutable
//! afterwards. The process must not start without a loadable artifact; only
//! tests get a stub backend.

mod error;

pub use error::RegressorError;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::constants::FEATURE_COUNT;

/// Serialized linear model: `predict(x) = intercept + weights . x`.
#[derive(Debug, Clone, Deserialize)]
struct LinearModel {
    weights: Vec<f32>,
    intercept: f32,
}

#[derive(Debug)]
enum RegressorBackend {
    Model(LinearModel),
    #[cfg(any(test, feature = "mock"))]
    Stub,
}

/// Combines the three sub-scores into the final predicted quality score.
#[derive(Debug)]
pub struct ScoreRegressor {
    backend: RegressorBackend,
}

impl ScoreRegressor {
    /// Loads the regressor artifact. Any failure here is fatal at startup.
    pub fn load(path: &Path) -> Result<Self, RegressorError> {
        if !path.is_file() {
            return Err(RegressorError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let model: LinearModel = serde_json::from_str(&content)?;

        if model.weights.len() != FEATURE_COUNT {
            return Err(RegressorError::InvalidArtifact {
                reason: format!(
                    "expected {} weights, artifact has {}",
                    FEATURE_COUNT,
                    model.weights.len()
                ),
            });
        }

        info!(path = %path.display(), "Score regressor loaded");

        Ok(Self {
            backend: RegressorBackend::Model(model),
        })
    }

    /// Deterministic stub for tests: a fixed blend of the three sub-scores.
    #[cfg(any(test, feature = "mock"))]
    pub fn stub() -> Self {
        Self {
            backend: RegressorBackend::Stub,
        }
    }

    /// Predicts the final score from `[semantic, keyword, grammar]`.
    ///
    /// A feature vector of the wrong arity is a programming error in the
    /// orchestrator, not a recoverable condition.
    pub fn predict(&self, features: &[f32]) -> f32 {
        assert_eq!(
            features.len(),
            FEATURE_COUNT,
            "feature vector arity mismatch"
        );

        match &self.backend {
            RegressorBackend::Model(model) => {
                let dot: f32 = model
                    .weights
                    .iter()
                    .zip(features.iter())
                    .map(|(w, x)| w * x)
                    .sum();
                model.intercept + dot
            }
            #[cfg(any(test, feature = "mock"))]
            RegressorBackend::Stub => {
                0.5 * features[0] + 0.3 * features[1] + 0.2 * features[2]
            }
        }
    }

    /// Returns `true` if running on the stub backend.
    pub fn is_stub(&self) -> bool {
        #[cfg(any(test, feature = "mock"))]
        {
            matches!(self.backend, RegressorBackend::Stub)
        }
        #[cfg(not(any(test, feature = "mock")))]
        {
            false
        }
    }
}
