//! Normalized patient snapshots served to clients

use serde::{Deserialize, Serialize};
use vitals_core::{normalize_batch, CanonicalPatientRecord};
use vitals_upstream::{Pagination, PatientBatch, PatientsPage, ResponseMetadata};

/// Canonical records with the pagination and metadata they arrived with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub data: Vec<CanonicalPatientRecord>,
    pub pagination: Pagination,
    pub metadata: ResponseMetadata,
}

impl PatientSnapshot {
    /// Normalize a single upstream page, keeping its pagination
    pub fn from_page(page: PatientsPage) -> Self {
        Self {
            data: normalize_batch(&page.data),
            pagination: page.pagination,
            metadata: page.metadata,
        }
    }

    /// Normalize a flattened fetch; it is presented as one page
    pub fn from_batch(batch: PatientBatch) -> Self {
        let data = normalize_batch(&batch.records);
        Self {
            pagination: Pagination::single_page(data.len()),
            data,
            metadata: batch.metadata,
        }
    }
}
