use serde::{Deserialize, Serialize};

use crate::Classifier;
use crate::error::ModelError;
use crate::forest::RandomForest;
use crate::logistic::LogisticRegression;
use crate::scaler::StandardScaler;

/// Artifact format this build reads. Bump when the document shape changes.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized scaler document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub format_version: u32,
    /// Feature names the scaler was fitted on, when the producer recorded them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(flatten)]
    pub scaler: StandardScaler,
}

impl ScalerArtifact {
    pub fn decode(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ScalerArtifact = serde_json::from_slice(bytes)?;
        check_version(artifact.format_version)?;
        artifact.scaler.validate()?;
        check_name_count(
            "scaler",
            artifact.feature_names.as_deref(),
            artifact.scaler.n_features(),
        )?;
        Ok(artifact)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ClassifierModel {
    pub fn as_classifier(&self) -> &dyn Classifier {
        match self {
            ClassifierModel::RandomForest(m) => m,
            ClassifierModel::LogisticRegression(m) => m,
        }
    }

    fn validate(&self) -> Result<(), ModelError> {
        match self {
            ClassifierModel::RandomForest(m) => m.validate(),
            ClassifierModel::LogisticRegression(m) => m.validate(),
        }
    }
}

/// Serialized classifier document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub format_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(flatten)]
    pub model: ClassifierModel,
}

impl ClassifierArtifact {
    pub fn decode(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ClassifierArtifact = serde_json::from_slice(bytes)?;
        check_version(artifact.format_version)?;
        artifact.model.validate()?;
        check_name_count(
            artifact.model.as_classifier().kind(),
            artifact.feature_names.as_deref(),
            artifact.model.as_classifier().n_features(),
        )?;
        Ok(artifact)
    }
}

/// The decoded pair the Model Provider hands out.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub scaler: ScalerArtifact,
    pub classifier: ClassifierArtifact,
}

impl ModelBundle {
    pub fn new(scaler: ScalerArtifact, classifier: ClassifierArtifact) -> Self {
        let summary = ModelSummary::from(&classifier);
        tracing::info!(
            kind = %summary.kind,
            n_features = summary.n_features,
            trees = ?summary.trees,
            "decoded model artifacts"
        );
        Self { scaler, classifier }
    }

    pub fn decode(scaler: &[u8], classifier: &[u8]) -> Result<Self, ModelError> {
        Ok(Self::new(
            ScalerArtifact::decode(scaler)?,
            ClassifierArtifact::decode(classifier)?,
        ))
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary::from(&self.classifier)
    }
}

/// Shape of the loaded classifier, safe to expose to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub kind: String,
    pub format_version: u32,
    pub n_features: usize,
    pub trees: Option<usize>,
}

impl From<&ClassifierArtifact> for ModelSummary {
    fn from(artifact: &ClassifierArtifact) -> Self {
        let classifier = artifact.model.as_classifier();
        let trees = match &artifact.model {
            ClassifierModel::RandomForest(forest) => Some(forest.trees.len()),
            ClassifierModel::LogisticRegression(_) => None,
        };
        Self {
            kind: classifier.kind().to_string(),
            format_version: artifact.format_version,
            n_features: classifier.n_features(),
            trees,
        }
    }
}

fn check_version(found: u32) -> Result<(), ModelError> {
    if found == 0 || found > FORMAT_VERSION {
        return Err(ModelError::UnsupportedVersion {
            found,
            supported: FORMAT_VERSION,
        });
    }
    Ok(())
}

fn check_name_count(
    artifact: &str,
    names: Option<&[String]>,
    n_features: usize,
) -> Result<(), ModelError> {
    match names {
        Some(names) if names.len() != n_features => Err(ModelError::invalid(
            artifact,
            format!(
                "{} feature names for {n_features} features",
                names.len()
            ),
        )),
        _ => Ok(()),
    }
}
