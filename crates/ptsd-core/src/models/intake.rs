use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::categorical::{
    Categorical, DrinkingStatus, Education, HouseholdIncome, PsychologicalBurden, SmokingStatus,
    TraumaFear,
};
use crate::error::IntakeError;
use crate::fields::{FEATURE_COUNT, feature_names};

/// The sixteen intake variables for one patient.
///
/// Field declaration order is the model's feature order. It is also the
/// order of [`IntakeRecord::features`] and of [`crate::fields::fields`];
/// changing one without the others silently corrupts predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeRecord {
    pub asds: f64,
    pub education: Education,
    pub drinking: DrinkingStatus,
    /// mmHg
    pub diastolic_bp: f64,
    pub household_income: HouseholdIncome,
    /// 10^9/L
    pub neutrophils: f64,
    /// mmol/L
    pub chloride: f64,
    pub smoking: SmokingStatus,
    pub anxiety: f64,
    pub ast_alt_ratio: f64,
    pub ag_ratio: f64,
    /// g/dL
    pub hemoglobin: f64,
    pub psychological_burden: PsychologicalBurden,
    /// 10^9/L
    pub monocytes: f64,
    /// bpm
    pub pulse: f64,
    pub trauma_fear: TraumaFear,
}

impl Default for IntakeRecord {
    /// The values the intake form is prefilled with.
    fn default() -> Self {
        Self {
            asds: 50.0,
            education: Education::default(),
            drinking: DrinkingStatus::default(),
            diastolic_bp: 80.0,
            household_income: HouseholdIncome::default(),
            neutrophils: 50.0,
            chloride: 50.0,
            smoking: SmokingStatus::default(),
            anxiety: 50.0,
            ast_alt_ratio: 0.5,
            ag_ratio: 0.5,
            hemoglobin: 12.0,
            psychological_burden: PsychologicalBurden::default(),
            monocytes: 50.0,
            pulse: 70.0,
            trauma_fear: TraumaFear::default(),
        }
    }
}

impl IntakeRecord {
    /// Fixed-order numeric vector. Categorical fields contribute their code.
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.asds,
            f64::from(self.education.code()),
            f64::from(self.drinking.code()),
            self.diastolic_bp,
            f64::from(self.household_income.code()),
            self.neutrophils,
            self.chloride,
            f64::from(self.smoking.code()),
            self.anxiety,
            self.ast_alt_ratio,
            self.ag_ratio,
            self.hemoglobin,
            f64::from(self.psychological_burden.code()),
            self.monocytes,
            self.pulse,
            f64::from(self.trauma_fear.code()),
        ]
    }

    /// Check that every measurement is a finite number.
    ///
    /// Form input is checked while parsing; JSON input can still carry
    /// values the widgets never produce.
    pub fn validate(&self) -> Result<(), IntakeError> {
        for (name, value) in feature_names().into_iter().zip(self.features()) {
            if !value.is_finite() {
                return Err(IntakeError::NonFinite {
                    field: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Build a record from submitted form values keyed by field id.
    pub fn from_form(values: &HashMap<String, String>) -> Result<Self, IntakeError> {
        Ok(Self {
            asds: real(values, "asds")?,
            education: code(values)?,
            drinking: code(values)?,
            diastolic_bp: real(values, "diastolic_bp")?,
            household_income: code(values)?,
            neutrophils: real(values, "neutrophils")?,
            chloride: real(values, "chloride")?,
            smoking: code(values)?,
            anxiety: real(values, "anxiety")?,
            ast_alt_ratio: real(values, "ast_alt_ratio")?,
            ag_ratio: real(values, "ag_ratio")?,
            hemoglobin: real(values, "hemoglobin")?,
            psychological_burden: code(values)?,
            monocytes: real(values, "monocytes")?,
            pulse: real(values, "pulse")?,
            trauma_fear: code(values)?,
        })
    }

    /// Field values as form strings, keyed by field id.
    pub fn to_form(&self) -> HashMap<String, String> {
        feature_names()
            .into_iter()
            .zip(self.features())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

fn raw<'a>(values: &'a HashMap<String, String>, id: &str) -> Result<&'a str, IntakeError> {
    values
        .get(id)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| IntakeError::MissingField(id.to_string()))
}

fn real(values: &HashMap<String, String>, id: &str) -> Result<f64, IntakeError> {
    let raw = raw(values, id)?;
    let value: f64 = raw.parse().map_err(|_| IntakeError::InvalidNumber {
        field: id.to_string(),
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(IntakeError::NonFinite {
            field: id.to_string(),
            value,
        });
    }
    Ok(value)
}

fn code<C: Categorical>(values: &HashMap<String, String>) -> Result<C, IntakeError> {
    let raw = raw(values, C::FIELD)?;
    raw.parse::<u8>()
        .ok()
        .and_then(C::from_code)
        .ok_or_else(|| IntakeError::OutOfDomain {
            field: C::FIELD.to_string(),
            code: raw.to_string(),
        })
}
