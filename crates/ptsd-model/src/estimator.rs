use std::sync::Arc;

use ptsd_core::fields::{FEATURE_COUNT, feature_names};
use ptsd_core::models::assessment::RiskAssessment;
use ptsd_core::models::intake::IntakeRecord;

use crate::artifact::ModelBundle;
use crate::error::ModelError;

/// Scores intake records against a loaded scaler and classifier.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RiskEstimator {
    bundle: Arc<ModelBundle>,
}

impl RiskEstimator {
    /// Check that both artifacts line up with the intake field order.
    pub fn new(bundle: Arc<ModelBundle>) -> Result<Self, ModelError> {
        let classifier = bundle.classifier.model.as_classifier();
        check_width("scaler", bundle.scaler.scaler.n_features())?;
        check_width(classifier.kind(), classifier.n_features())?;
        check_names("scaler", bundle.scaler.feature_names.as_deref())?;
        check_names(classifier.kind(), bundle.classifier.feature_names.as_deref())?;
        Ok(Self { bundle })
    }

    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Six-month PTSD probability for one record, in [0, 1].
    pub fn probability(&self, record: &IntakeRecord) -> Result<f64, ModelError> {
        record.validate()?;
        self.score_features(&record.features())
    }

    /// Score an already assembled feature row: normalize, then take the
    /// positive-class probability.
    pub fn score_features(&self, features: &[f64]) -> Result<f64, ModelError> {
        let scaled = self.bundle.scaler.scaler.transform(features)?;
        let probability = self
            .bundle
            .classifier
            .model
            .as_classifier()
            .predict_positive(&scaled)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ModelError::InvalidProbability(probability));
        }
        Ok(probability)
    }

    pub fn assess(&self, record: &IntakeRecord) -> Result<RiskAssessment, ModelError> {
        let probability = self.probability(record)?;
        Ok(RiskAssessment::new(probability))
    }
}

fn check_width(artifact: &str, width: usize) -> Result<(), ModelError> {
    if width != FEATURE_COUNT {
        return Err(ModelError::DimensionMismatch {
            artifact: artifact.to_string(),
            expected: FEATURE_COUNT,
            actual: width,
        });
    }
    Ok(())
}

fn check_names(artifact: &str, names: Option<&[String]>) -> Result<(), ModelError> {
    let Some(names) = names else {
        return Ok(());
    };
    for (position, (found, expected)) in names.iter().zip(feature_names()).enumerate() {
        if found != expected {
            return Err(ModelError::FeatureOrder {
                artifact: artifact.to_string(),
                position,
                expected: expected.to_string(),
                found: found.clone(),
            });
        }
    }
    Ok(())
}
