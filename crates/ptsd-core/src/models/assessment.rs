use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Probabilities strictly above this are presented as high risk.
pub const RISK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    /// Exactly 0.5 is low risk.
    pub fn from_probability(probability: f64) -> Self {
        if probability > RISK_THRESHOLD {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }
}

/// Outcome of scoring one intake record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub assessed_at: jiff::Timestamp,
    /// Probability of PTSD at six months, in [0, 1].
    pub probability: f64,
    pub risk_level: RiskLevel,
}

impl RiskAssessment {
    pub fn new(probability: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            assessed_at: jiff::Timestamp::now(),
            probability,
            risk_level: RiskLevel::from_probability(probability),
        }
    }

    /// Probability as a percentage with two decimals, e.g. "73.40%".
    pub fn percent(&self) -> String {
        format_percent(self.probability)
    }
}

pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}
