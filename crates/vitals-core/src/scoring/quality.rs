//! Fever and data-quality predicates
//!
//! Both predicates read the canonical record directly instead of the risk
//! points. The fever threshold and the blood-pressure validity rules therefore
//! exist twice (here and in the risk functions) and must change together.
//! They also deliberately disagree in one place: `"120/80/90"` passes the
//! quality check (it has a `/` and every part is numeric) yet scores 0
//! blood-pressure points.

use crate::numeric::parse_int_prefix;
use crate::patient::CanonicalPatientRecord;
use serde::Serialize;

/// Fever threshold in Fahrenheit
pub const FEVER_THRESHOLD_F: f64 = 99.6;

/// Reason a record is flagged for data quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQualityIssue {
    MissingBloodPressure,
    InvalidBloodPressure,
    MissingTemperature,
    MissingAge,
}

/// Temperature is present and at or above 99.6°F
pub fn has_fever(record: &CanonicalPatientRecord) -> bool {
    matches!(record.temperature, Some(t) if !t.is_nan() && t >= FEVER_THRESHOLD_F)
}

/// Every data-quality issue found in the record, in field order
pub fn data_quality_issues(record: &CanonicalPatientRecord) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();

    if let Some(issue) = blood_pressure_issue(record.blood_pressure.as_deref()) {
        issues.push(issue);
    }
    if !is_usable(record.temperature) {
        issues.push(DataQualityIssue::MissingTemperature);
    }
    if !is_usable(record.age) {
        issues.push(DataQualityIssue::MissingAge);
    }

    issues
}

pub fn has_data_quality_issues(record: &CanonicalPatientRecord) -> bool {
    !data_quality_issues(record).is_empty()
}

fn blood_pressure_issue(blood_pressure: Option<&str>) -> Option<DataQualityIssue> {
    let bp = match blood_pressure {
        None | Some("N/A") => return Some(DataQualityIssue::MissingBloodPressure),
        Some(bp) => bp,
    };

    let malformed = bp.contains("INVALID")
        || !bp.contains('/')
        || bp
            .split('/')
            .any(|part| part.is_empty() || parse_int_prefix(part).is_none());

    malformed.then_some(DataQualityIssue::InvalidBloodPressure)
}

fn is_usable(value: Option<f64>) -> bool {
    matches!(value, Some(v) if !v.is_nan())
}
