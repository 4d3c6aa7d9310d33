//! Router creation and configuration

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/patients", get(list_patients))
        .route("/api/patients/all", get(all_patients))
        .route("/api/cached-patients", get(cached_patients))
        .route("/api/assessment", get(assessment))
        .route("/api/submit-assessment", post(submit_assessment))
        .route("/api/submission-history", get(submission_history))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
