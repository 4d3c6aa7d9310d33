//! In-memory storage for snapshots, assessment results and submissions
//!
//! Nothing here survives a restart.

use crate::snapshot::PatientSnapshot;
use tokio::sync::RwLock;
use vitals_core::AssessmentResults;
use vitals_upstream::SubmissionResponse;

#[derive(Debug, Default)]
pub struct MemStorage {
    snapshot: RwLock<Option<PatientSnapshot>>,
    results: RwLock<Option<AssessmentResults>>,
    history: RwLock<Vec<SubmissionResponse>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached snapshot
    pub async fn store_snapshot(&self, snapshot: PatientSnapshot) {
        *self.snapshot.write().await = Some(snapshot);
    }

    pub async fn snapshot(&self) -> Option<PatientSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Replace the last submitted assessment results
    pub async fn store_results(&self, results: AssessmentResults) {
        *self.results.write().await = Some(results);
    }

    pub async fn results(&self) -> Option<AssessmentResults> {
        self.results.read().await.clone()
    }

    /// Append a submission response; history is never rewritten
    pub async fn record_submission(&self, response: SubmissionResponse) {
        self.history.write().await.push(response);
    }

    /// Submission responses, oldest first
    pub async fn history(&self) -> Vec<SubmissionResponse> {
        self.history.read().await.clone()
    }
}
