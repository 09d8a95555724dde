use thiserror::Error;

use ptsd_core::error::IntakeError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("artifact decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unsupported artifact format_version {found} (this build supports {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid {artifact} artifact: {reason}")]
    InvalidArtifact { artifact: String, reason: String },

    #[error("{artifact}: expected {expected} features, got {actual}")]
    DimensionMismatch {
        artifact: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "{artifact} feature {position} is '{found}', intake record has '{expected}' at that position"
    )]
    FeatureOrder {
        artifact: String,
        position: usize,
        expected: String,
        found: String,
    },

    #[error("classifier returned an invalid probability: {0}")]
    InvalidProbability(f64),

    #[error(transparent)]
    Intake(#[from] IntakeError),
}

impl ModelError {
    pub(crate) fn invalid(artifact: &str, reason: impl Into<String>) -> Self {
        ModelError::InvalidArtifact {
            artifact: artifact.to_string(),
            reason: reason.into(),
        }
    }
}
