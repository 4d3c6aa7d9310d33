//! REST API type definitions

use crate::storage::MemStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vitals_core::numeric::parse_int_prefix;
use vitals_core::{
    AlertLists, AssessmentResults, AssessmentStats, PatientPage, ScoredPatient,
};
use vitals_upstream::{ApiClient, AssessmentSubmitter, PatientSource};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PatientSource>,
    pub submitter: Arc<dyn AssessmentSubmitter>,
    pub storage: Arc<MemStorage>,
}

impl AppState {
    pub fn new(source: Arc<dyn PatientSource>, submitter: Arc<dyn AssessmentSubmitter>) -> Self {
        Self {
            source,
            submitter,
            storage: Arc::new(MemStorage::new()),
        }
    }

    /// State backed by one HTTP client for both fetching and submitting
    pub fn from_client(client: Arc<ApiClient>) -> Self {
        Self::new(client.clone(), client)
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query string of `GET /api/patients`.
///
/// Values are read leniently: a leading integer is used, anything else (or a
/// non-positive number) falls back to the default.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        lenient_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        lenient_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }
}

fn lenient_positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(parse_int_prefix)
        .filter(|v| *v > 0)
        .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
}

/// Response of `GET /api/assessment`.
///
/// Borrows from the scored batch; handlers serialize it before the batch is
/// dropped.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse<'a> {
    pub stats: AssessmentStats,
    pub alerts: AlertLists<'a>,
    pub results: AssessmentResults,
    /// The requested page of scored patients
    pub patients: PatientPage<&'a ScoredPatient>,
    /// Ids seen more than once in the scored batch
    pub duplicate_ids: Vec<String>,
}
