//! ptsd-model
//!
//! Scoring side of the PTSD risk intake: the fitted scaler, the binary
//! classifiers, the JSON artifact documents they are loaded from, and the
//! Risk Estimator that ties them to an intake record.

pub mod artifact;
pub mod error;
pub mod estimator;
pub mod forest;
pub mod logistic;
pub mod scaler;

use error::ModelError;

/// A trained binary classifier over normalized feature rows.
pub trait Classifier: Send + Sync {
    /// Artifact kind tag (e.g., "random_forest").
    fn kind(&self) -> &str;

    /// Width of the rows this classifier was trained on.
    fn n_features(&self) -> usize;

    /// Probability mass assigned to the positive (PTSD) class for one row.
    fn predict_positive(&self, features: &[f64]) -> Result<f64, ModelError>;
}
