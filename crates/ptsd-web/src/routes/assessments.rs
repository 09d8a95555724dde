use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use ptsd_core::models::assessment::RiskAssessment;
use ptsd_core::models::intake::IntakeRecord;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub percent: String,
}

/// Score a JSON intake record.
///
/// Body rejections (bad syntax, wrong content type) are answered through
/// `ApiError` so every failure carries the same `{ "error": ... }` shape.
pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Json(body) = payload?;
    let record: IntakeRecord = serde_json::from_value(body)?;
    let assessment = state.estimator.assess(&record)?;

    tracing::info!(
        assessment_id = %assessment.id,
        risk_level = assessment.risk_level.as_str(),
        "assessment scored"
    );

    Ok(Json(AssessmentResponse {
        percent: assessment.percent(),
        assessment,
    }))
}
