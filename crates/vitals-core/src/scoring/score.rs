//! Aggregate scoring
//!
//! Combines the three per-factor risk functions into a [`RiskScore`] and pairs
//! it with the fever and data-quality flags to build a [`ScoredPatient`].

use super::age::age_risk;
use super::blood_pressure::blood_pressure_risk;
use super::quality::{data_quality_issues, has_fever, DataQualityIssue};
use super::temperature::temperature_risk;
use crate::patient::CanonicalPatientRecord;
use serde::Serialize;

/// A total at or above this value marks a patient as high risk
pub const HIGH_RISK_THRESHOLD: u8 = 4;

pub const MAX_BLOOD_PRESSURE_POINTS: u8 = 4;
pub const MAX_TEMPERATURE_POINTS: u8 = 2;
pub const MAX_AGE_POINTS: u8 = 2;

/// Per-factor risk points and their sum.
///
/// The total is always derived from the components and cannot be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScore {
    blood_pressure: u8,
    temperature: u8,
    age: u8,
    total: u8,
}

impl RiskScore {
    /// Build a score from per-factor points, or `None` if any part is out of range
    pub fn from_components(blood_pressure: u8, temperature: u8, age: u8) -> Option<Self> {
        let in_range = blood_pressure <= MAX_BLOOD_PRESSURE_POINTS
            && temperature <= MAX_TEMPERATURE_POINTS
            && age <= MAX_AGE_POINTS;

        in_range.then(|| Self::summed(blood_pressure, temperature, age))
    }

    /// Score a canonical record
    pub fn for_record(record: &CanonicalPatientRecord) -> Self {
        // band points never exceed the per-factor maxima
        Self::summed(
            blood_pressure_risk(record.blood_pressure.as_deref()),
            temperature_risk(record.temperature),
            age_risk(record.age),
        )
    }

    fn summed(blood_pressure: u8, temperature: u8, age: u8) -> Self {
        Self {
            blood_pressure,
            temperature,
            age,
            total: blood_pressure + temperature + age,
        }
    }

    pub fn blood_pressure(&self) -> u8 {
        self.blood_pressure
    }

    pub fn temperature(&self) -> u8 {
        self.temperature
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_high_risk(&self) -> bool {
        self.total >= HIGH_RISK_THRESHOLD
    }
}

/// A canonical record with its risk score and alert flags.
///
/// Built once per scoring pass and never modified; rescoring a changed record
/// means building a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPatient {
    #[serde(flatten)]
    record: CanonicalPatientRecord,
    risk_score: RiskScore,
    has_data_quality_issues: bool,
    has_fever: bool,
    is_high_risk: bool,
    quality_issues: Vec<DataQualityIssue>,
}

impl ScoredPatient {
    pub fn record(&self) -> &CanonicalPatientRecord {
        &self.record
    }

    pub fn patient_id(&self) -> &str {
        &self.record.patient_id
    }

    pub fn risk_score(&self) -> RiskScore {
        self.risk_score
    }

    pub fn has_data_quality_issues(&self) -> bool {
        self.has_data_quality_issues
    }

    pub fn has_fever(&self) -> bool {
        self.has_fever
    }

    pub fn is_high_risk(&self) -> bool {
        self.is_high_risk
    }

    pub fn quality_issues(&self) -> &[DataQualityIssue] {
        &self.quality_issues
    }
}

/// Score one canonical record
pub fn score_patient(record: &CanonicalPatientRecord) -> ScoredPatient {
    let risk_score = RiskScore::for_record(record);
    let quality_issues = data_quality_issues(record);

    ScoredPatient {
        record: record.clone(),
        risk_score,
        has_data_quality_issues: !quality_issues.is_empty(),
        has_fever: has_fever(record),
        is_high_risk: risk_score.is_high_risk(),
        quality_issues,
    }
}

/// Score a batch, preserving input order
pub fn score_batch(records: &[CanonicalPatientRecord]) -> Vec<ScoredPatient> {
    records.iter().map(score_patient).collect()
}
