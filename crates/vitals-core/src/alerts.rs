//! Alert partitioning and assessment outputs
//!
//! Alert lists are filter views over one scored batch. A patient can appear in
//! any number of them, and each list keeps the batch order.

use crate::patient::CanonicalPatientRecord;
use crate::scoring::ScoredPatient;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// High-risk, fever and data-quality views over a scored batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertLists<'a> {
    pub high_risk: Vec<&'a ScoredPatient>,
    pub fever: Vec<&'a ScoredPatient>,
    pub data_quality: Vec<&'a ScoredPatient>,
}

/// Partition a scored batch into the three alert lists
pub fn partition_alerts(patients: &[ScoredPatient]) -> AlertLists<'_> {
    AlertLists {
        high_risk: patients.iter().filter(|p| p.is_high_risk()).collect(),
        fever: patients.iter().filter(|p| p.has_fever()).collect(),
        data_quality: patients
            .iter()
            .filter(|p| p.has_data_quality_issues())
            .collect(),
    }
}

/// Patient ids per alert list, as handed to the submission endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

impl AssessmentResults {
    /// Extract ids in list order; duplicates are not removed
    pub fn from_alerts(alerts: &AlertLists<'_>) -> Self {
        let ids = |list: &[&ScoredPatient]| -> Vec<String> {
            list.iter().map(|p| p.patient_id().to_string()).collect()
        };

        Self {
            high_risk_patients: ids(&alerts.high_risk),
            fever_patients: ids(&alerts.fever),
            data_quality_issues: ids(&alerts.data_quality),
        }
    }
}

/// Headline counts for a scored batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStats {
    pub total_patients: usize,
    pub high_risk_count: usize,
    pub fever_count: usize,
    pub data_issue_count: usize,
}

impl AssessmentStats {
    pub fn new(patients: &[ScoredPatient], alerts: &AlertLists<'_>) -> Self {
        Self {
            total_patients: patients.len(),
            high_risk_count: alerts.high_risk.len(),
            fever_count: alerts.fever.len(),
            data_issue_count: alerts.data_quality.len(),
        }
    }
}

/// Patient ids that occur more than once, in order of first appearance.
///
/// Scoring does not require unique ids; this is an opt-in check for callers
/// that do.
pub fn duplicate_patient_ids<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CanonicalPatientRecord>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for record in records {
        let count = counts.entry(record.patient_id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.patient_id.as_str());
        }
        *count += 1;
    }

    let duplicates: Vec<String> = order
        .into_iter()
        .filter(|id| counts[id] > 1)
        .map(str::to_string)
        .collect();

    if !duplicates.is_empty() {
        warn!("Batch contains duplicate patient ids: {:?}", duplicates);
    }

    duplicates
}
