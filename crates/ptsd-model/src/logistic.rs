use serde::{Deserialize, Serialize};

use crate::Classifier;
use crate::error::ModelError;

/// Binary logistic regression: `sigmoid(intercept + coefficients . x)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::invalid("logistic_regression", "no coefficients"));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::invalid(
                "logistic_regression",
                "non-finite coefficient",
            ));
        }
        Ok(())
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_positive(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                artifact: self.kind().to_string(),
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>();
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so exp() never overflows.
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
