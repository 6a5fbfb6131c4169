use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegressorError {
    #[error("regressor artifact not found at path: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to read regressor artifact: {reason}")]
    ArtifactReadFailed { reason: String },

    #[error("invalid regressor artifact: {reason}")]
    InvalidArtifact { reason: String },
}

impl From<std::io::Error> for RegressorError {
    fn from(err: std::io::Error) -> Self {
        RegressorError::ArtifactReadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RegressorError {
    fn from(err: serde_json::Error) -> Self {
        RegressorError::InvalidArtifact {
            reason: err.to_string(),
        }
    }
}
