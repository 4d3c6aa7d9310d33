//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use crate::snapshot::PatientSnapshot;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};
use vitals_core::{
    duplicate_patient_ids, partition_alerts, score_batch, AssessmentResults, AssessmentStats,
    PatientQuery,
};
use vitals_upstream::SubmissionResponse;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// One upstream page, normalized and cached
pub(super) async fn list_patients(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<PatientSnapshot>, ServerError> {
    let (page, limit) = (params.page(), params.limit());
    info!("Fetching patients page {} (limit {})", page, limit);

    let fetched = state.source.fetch_page(page, limit).await.map_err(|e| {
        error!("Failed to fetch patients page {}: {}", page, e);
        e
    })?;

    let snapshot = PatientSnapshot::from_page(fetched);
    state.storage.store_snapshot(snapshot.clone()).await;

    Ok(Json(snapshot))
}

/// Every upstream page, flattened, normalized and cached
pub(super) async fn all_patients(
    State(state): State<AppState>,
) -> Result<Json<PatientSnapshot>, ServerError> {
    Ok(Json(refresh_snapshot(&state).await?))
}

pub(super) async fn cached_patients(
    State(state): State<AppState>,
) -> Result<Json<PatientSnapshot>, ServerError> {
    state
        .storage
        .snapshot()
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("No cached data found".to_string()))
}

/// Score the cached snapshot, fetching everything first when nothing is cached
#[axum::debug_handler]
pub(super) async fn assessment(
    State(state): State<AppState>,
    Query(query): Query<PatientQuery>,
) -> Result<Response, ServerError> {
    let snapshot = match state.storage.snapshot().await {
        Some(snapshot) => snapshot,
        None => refresh_snapshot(&state).await?,
    };

    let scored = score_batch(&snapshot.data);
    let alerts = partition_alerts(&scored);
    let stats = AssessmentStats::new(&scored, &alerts);

    info!(
        "Assessed {} patients: {} high risk, {} fever, {} data issues",
        stats.total_patients, stats.high_risk_count, stats.fever_count, stats.data_issue_count
    );

    let response = AssessmentResponse {
        stats,
        results: AssessmentResults::from_alerts(&alerts),
        patients: query.apply(&scored),
        duplicate_ids: duplicate_patient_ids(&snapshot.data),
        alerts,
    };

    // serialized here, while `scored` is alive
    Ok(Json(response).into_response())
}

/// Forward results upstream, falling back to a locally produced response
#[axum::debug_handler]
pub(super) async fn submit_assessment(
    State(state): State<AppState>,
    JsonExtractor(results): JsonExtractor<AssessmentResults>,
) -> Json<SubmissionResponse> {
    info!(
        "Submitting assessment: {} high risk, {} fever, {} data issues",
        results.high_risk_patients.len(),
        results.fever_patients.len(),
        results.data_quality_issues.len()
    );

    let response = match state.submitter.submit(&results).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Upstream submission failed, using local response: {}", e);
            SubmissionResponse::local_fallback(&results)
        }
    };

    state.storage.store_results(results).await;
    state.storage.record_submission(response.clone()).await;

    Json(response)
}

pub(super) async fn submission_history(
    State(state): State<AppState>,
) -> Json<Vec<SubmissionResponse>> {
    Json(state.storage.history().await)
}

async fn refresh_snapshot(state: &AppState) -> Result<PatientSnapshot, ServerError> {
    info!("Fetching all patient pages");

    let batch = state.source.fetch_all().await.map_err(|e| {
        error!("Failed to fetch patients: {}", e);
        e
    })?;

    if batch.truncated {
        warn!(
            "Patient list truncated after {} pages",
            batch.pages_fetched
        );
    }

    let snapshot = PatientSnapshot::from_batch(batch);
    info!("Cached {} patients", snapshot.data.len());
    state.storage.store_snapshot(snapshot.clone()).await;

    Ok(snapshot)
}
