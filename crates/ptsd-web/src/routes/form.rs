use std::collections::HashMap;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use ptsd_core::models::intake::IntakeRecord;

use crate::error::ApiError;
use crate::render::render_page;
use crate::state::AppState;

/// The intake form, prefilled with defaults.
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let defaults = IntakeRecord::default().to_form();
    let html = render_page(&state.templates, &defaults, None, None)?;
    Ok(Html(html))
}

/// Score a form submission and re-render the page with the result.
///
/// Invalid input re-renders the submitted values with the error and a 422.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(values): Form<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let record = match IntakeRecord::from_form(&values) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!(error = %e, "rejected intake form");
            let html = render_page(&state.templates, &values, None, Some(&e.to_string()))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let assessment = state.estimator.assess(&record)?;
    tracing::info!(
        assessment_id = %assessment.id,
        risk_level = assessment.risk_level.as_str(),
        "assessment scored"
    );

    let html = render_page(&state.templates, &values, Some(&assessment), None)?;
    Ok(Html(html).into_response())
}
