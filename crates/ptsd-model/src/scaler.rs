use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Fitted per-feature standardization: `(x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.mean.is_empty() {
            return Err(ModelError::invalid("scaler", "no features"));
        }
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::invalid(
                "scaler",
                format!(
                    "mean has {} entries but scale has {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        for (i, (mean, scale)) in self.mean.iter().zip(&self.scale).enumerate() {
            if !mean.is_finite() || !scale.is_finite() {
                return Err(ModelError::invalid(
                    "scaler",
                    format!("non-finite parameter at feature {i}"),
                ));
            }
            if *scale == 0.0 {
                return Err(ModelError::invalid(
                    "scaler",
                    format!("zero scale at feature {i}"),
                ));
            }
        }
        Ok(())
    }

    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.n_features() {
            return Err(ModelError::DimensionMismatch {
                artifact: "scaler".to_string(),
                expected: self.n_features(),
                actual: features.len(),
            });
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
