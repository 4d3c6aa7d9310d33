//! Canonical (normalized) patient record

use serde::{Deserialize, Serialize};

/// Default for descriptive text fields the upstream record left out
pub const UNKNOWN: &str = "Unknown";

/// A patient record after normalization.
///
/// Every field has a well-defined type: values that were absent or could not be
/// parsed are `None` (for the scored vitals) or [`UNKNOWN`] (for descriptive
/// text). Field names match the upstream wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalPatientRecord {
    /// Identity key, unique within a batch
    pub patient_id: String,

    pub name: String,

    /// Age in years; `None` when unknown or unparseable
    pub age: Option<f64>,

    pub gender: String,

    /// Reading in `"SYS/DIA"` textual form, not structurally validated
    pub blood_pressure: Option<String>,

    /// Body temperature in Fahrenheit
    pub temperature: Option<f64>,

    pub visit_date: String,

    pub diagnosis: String,

    pub medications: String,
}

impl CanonicalPatientRecord {
    /// Create a record with identity only; every other field takes its default
    pub fn new(patient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            age: None,
            gender: UNKNOWN.to_string(),
            blood_pressure: None,
            temperature: None,
            visit_date: UNKNOWN.to_string(),
            diagnosis: UNKNOWN.to_string(),
            medications: UNKNOWN.to_string(),
        }
    }

    /// Set age
    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    /// Set blood pressure
    pub fn with_blood_pressure(mut self, blood_pressure: impl Into<String>) -> Self {
        self.blood_pressure = Some(blood_pressure.into());
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = CanonicalPatientRecord::new("DEMO001", "Jane Doe");

        assert_eq!(record.patient_id, "DEMO001");
        assert_eq!(record.name, "Jane Doe");
        assert!(record.age.is_none());
        assert!(record.blood_pressure.is_none());
        assert!(record.temperature.is_none());
        assert_eq!(record.gender, UNKNOWN);
        assert_eq!(record.visit_date, UNKNOWN);
        assert_eq!(record.diagnosis, UNKNOWN);
        assert_eq!(record.medications, UNKNOWN);
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let record = CanonicalPatientRecord::new("DEMO002", "John Roe")
            .with_age(52.0)
            .with_blood_pressure("120/80")
            .with_temperature(98.6);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["patient_id"], "DEMO002");
        assert_eq!(json["blood_pressure"], "120/80");
        assert_eq!(json["temperature"], 98.6);
        assert_eq!(json["age"], 52.0);
    }

    #[test]
    fn test_missing_vitals_serialize_as_null() {
        let record = CanonicalPatientRecord::new("DEMO003", "Ann Poe");
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["age"].is_null());
        assert!(json["blood_pressure"].is_null());
        assert!(json["temperature"].is_null());
    }
}
