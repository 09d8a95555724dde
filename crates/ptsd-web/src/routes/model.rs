use axum::Json;
use axum::extract::State;
use serde::Serialize;

use ptsd_model::artifact::ModelSummary;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ModelInfo {
    #[serde(flatten)]
    summary: ModelSummary,
    scaler_source: String,
    classifier_source: String,
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(ModelInfo {
        summary: state.estimator.bundle().summary(),
        scaler_source: state.provider.scaler_source().to_string(),
        classifier_source: state.provider.classifier_source().to_string(),
    })
}
