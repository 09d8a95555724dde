use std::sync::Arc;

use tera::Tera;

use ptsd_model::estimator::RiskEstimator;
use ptsd_provider::provider::ModelProvider;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<RiskEstimator>,
    pub provider: Arc<ModelProvider>,
    pub templates: Arc<Tera>,
}
