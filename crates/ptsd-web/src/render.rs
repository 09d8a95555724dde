use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera};

use ptsd_core::fields::{FieldKind, FieldSpec, fields};
use ptsd_core::models::assessment::{RiskAssessment, RiskLevel};

const PAGE: &str = "index.html";

/// Compile the page templates. Called once at startup.
pub fn templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

#[derive(Serialize)]
struct ChoiceView {
    code: u8,
    label: String,
    selected: bool,
}

#[derive(Serialize)]
struct FieldView {
    id: String,
    label: String,
    unit: Option<String>,
    categorical: bool,
    value: String,
    step: f64,
    choices: Vec<ChoiceView>,
}

#[derive(Serialize)]
struct ResultView {
    high: bool,
    level: &'static str,
    percent: String,
    probability: f64,
}

#[derive(Serialize)]
struct Page {
    fields: Vec<FieldView>,
    result: Option<ResultView>,
    error: Option<String>,
}

/// Render the intake page. `values` are the submitted form strings; fields
/// missing from it show their defaults.
pub fn render_page(
    tera: &Tera,
    values: &HashMap<String, String>,
    result: Option<&RiskAssessment>,
    error: Option<&str>,
) -> Result<String, tera::Error> {
    let page = Page {
        fields: fields().iter().map(|f| field_view(f, values)).collect(),
        result: result.map(|r| ResultView {
            high: r.risk_level == RiskLevel::High,
            level: r.risk_level.as_str(),
            percent: r.percent(),
            probability: r.probability,
        }),
        error: error.map(str::to_string),
    };
    let context = Context::from_serialize(&page)?;
    tera.render(PAGE, &context)
}

fn field_view(spec: &FieldSpec, values: &HashMap<String, String>) -> FieldView {
    let value = values
        .get(&spec.id)
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| spec.default_value());

    let (step, choices) = match &spec.kind {
        FieldKind::Numeric { step, .. } => (*step, Vec::new()),
        FieldKind::Categorical { choices } => (
            1.0,
            choices
                .iter()
                .map(|c| ChoiceView {
                    code: c.code,
                    label: c.label.clone(),
                    selected: c.code.to_string() == value,
                })
                .collect(),
        ),
    };

    FieldView {
        id: spec.id.clone(),
        label: spec.label.clone(),
        unit: spec.unit.clone(),
        categorical: spec.is_categorical(),
        value,
        step,
        choices,
    }
}
