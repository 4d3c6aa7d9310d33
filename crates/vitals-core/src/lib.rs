//! Vitals Core - Normalization and risk scoring for patient records
//!
//! This crate holds the only part of the vitals service with real domain logic:
//! - Patient record types (raw upstream shape and canonical shape)
//! - The normalizer that turns loosely-typed raw fields into typed values
//! - Per-factor risk functions and the aggregate scorer
//! - Data-quality classification and alert-list partitioning
//!
//! Everything here is synchronous and pure. A batch flows one way:
//! raw record → canonical record → scored patient → alert lists.

pub mod alerts;
pub mod error;
pub mod normalize;
pub mod numeric;
pub mod patient;
pub mod query;
pub mod scoring;

// Re-export commonly used types
pub use alerts::{duplicate_patient_ids, partition_alerts, AlertLists, AssessmentResults, AssessmentStats};
pub use error::{CoreError, Result};
pub use normalize::{normalize, normalize_batch};
pub use patient::{decode_batch, CanonicalPatientRecord, RawNumeric, RawPatientRecord, RawText};
pub use query::{PatientIdentity, PatientPage, PatientQuery};
pub use scoring::{
    has_data_quality_issues, has_fever, score_batch, score_patient, DataQualityIssue, RiskScore,
    ScoredPatient,
};
