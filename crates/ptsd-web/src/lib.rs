//! ptsd-web
//!
//! HTTP front end for the PTSD risk intake: the server-rendered form, the
//! JSON API and the startup wiring. Exposed as a library so integration
//! tests can drive the router directly.

pub mod config;
pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/",
            get(routes::form::show_form).post(routes::form::submit_form),
        )
        .route("/api/fields", get(routes::fields::list_fields))
        .route("/api/model", get(routes::model::model_info))
        .route(
            "/api/assessments",
            post(routes::assessments::create_assessment),
        )
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
