use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::categorical::{
    Categorical, DrinkingStatus, Education, HouseholdIncome, PsychologicalBurden, SmokingStatus,
    TraumaFear,
};

/// Width of the feature vector the classifier was trained on.
pub const FEATURE_COUNT: usize = 16;

/// One option of a categorical field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub code: u8,
    pub label: String,
}

/// How a field is entered on the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free numeric input.
    Numeric { default: f64, step: f64 },
    /// Dropdown over integer-coded options. The first option is the default.
    Categorical { choices: Vec<Choice> },
}

/// Description of one intake field, in model feature order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub unit: Option<String>,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, FieldKind::Categorical { .. })
    }

    /// Default value as it appears in a form input.
    pub fn default_value(&self) -> String {
        match &self.kind {
            FieldKind::Numeric { default, .. } => default.to_string(),
            FieldKind::Categorical { choices } => choices
                .first()
                .map(|c| c.code.to_string())
                .unwrap_or_default(),
        }
    }
}

/// All sixteen fields, in the order the classifier expects them.
pub fn fields() -> &'static [FieldSpec] {
    static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
        vec![
            numeric("asds", "ASDS score", None, 50.0),
            categorical::<Education>("Education level"),
            categorical::<DrinkingStatus>("Drinking status"),
            numeric("diastolic_bp", "Diastolic blood pressure", Some("mmHg"), 80.0),
            categorical::<HouseholdIncome>("Household monthly income"),
            numeric("neutrophils", "Absolute neutrophil count", Some("10^9/L"), 50.0),
            numeric("chloride", "Chloride", Some("mmol/L"), 50.0),
            categorical::<SmokingStatus>("Smoking status"),
            numeric("anxiety", "Anxiety score", None, 50.0),
            numeric("ast_alt_ratio", "AST/ALT ratio", None, 0.5),
            numeric("ag_ratio", "A/G ratio", None, 0.5),
            numeric("hemoglobin", "Hemoglobin", Some("g/dL"), 12.0),
            categorical::<PsychologicalBurden>("Psychological burden"),
            numeric("monocytes", "Absolute monocyte count", Some("10^9/L"), 50.0),
            numeric("pulse", "Pulse", Some("bpm"), 70.0),
            categorical::<TraumaFear>("Fear at time of trauma"),
        ]
    });
    &FIELDS
}

/// Canonical feature names, in model order.
pub fn feature_names() -> Vec<&'static str> {
    fields().iter().map(|f| f.id.as_str()).collect()
}

fn numeric(id: &str, label: &str, unit: Option<&str>, default: f64) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        unit: unit.map(str::to_string),
        kind: FieldKind::Numeric {
            default,
            step: 0.01,
        },
    }
}

fn categorical<C: Categorical>(label: &str) -> FieldSpec {
    FieldSpec {
        id: C::FIELD.to_string(),
        label: label.to_string(),
        unit: None,
        kind: FieldKind::Categorical {
            choices: C::choices(),
        },
    }
}
