//! Normalizer: raw patient record → canonical patient record
//!
//! Each field is normalized on its own. A field that is absent or cannot be
//! parsed collapses to `None` (vitals) or `"Unknown"` (descriptive text); the
//! rest of the record is unaffected and normalization itself never fails.
//!
//! Validation here is purely type-level. Out-of-range values such as a negative
//! age pass through untouched, and blood pressure is not checked for the
//! `SYS/DIA` structure (the scorer and the quality check do that).

use crate::numeric::parse_float_prefix;
use crate::patient::{CanonicalPatientRecord, RawNumeric, RawPatientRecord, RawText, UNKNOWN};
use log::debug;

/// Substrings (lowercase) that mark a temperature value as an upstream error token
const TEMPERATURE_ERROR_TOKENS: &[&str] = &["error", "invalid", "n/a"];

/// Normalize a single raw record
pub fn normalize(raw: &RawPatientRecord) -> CanonicalPatientRecord {
    let age = normalize_age(raw.age.as_ref());
    let blood_pressure = normalize_blood_pressure(raw.blood_pressure.as_ref());
    let temperature = normalize_temperature(raw.temperature.as_ref());

    if age.is_none() || blood_pressure.is_none() || temperature.is_none() {
        debug!(
            "Patient {} normalized with missing vitals (age: {}, blood_pressure: {}, temperature: {})",
            raw.patient_id,
            age.is_some(),
            blood_pressure.is_some(),
            temperature.is_some()
        );
    }

    CanonicalPatientRecord {
        patient_id: raw.patient_id.clone(),
        name: raw.name.clone(),
        age,
        gender: text_or_unknown(raw.gender.as_deref()),
        blood_pressure,
        temperature,
        visit_date: text_or_unknown(raw.visit_date.as_deref()),
        diagnosis: text_or_unknown(raw.diagnosis.as_deref()),
        medications: text_or_unknown(raw.medications.as_deref()),
    }
}

/// Normalize a batch, preserving input order
pub fn normalize_batch(raw: &[RawPatientRecord]) -> Vec<CanonicalPatientRecord> {
    raw.iter().map(normalize).collect()
}

/// Numbers pass through; numeric text is parsed; empty or non-numeric text is `None`
pub fn normalize_age(value: Option<&RawNumeric>) -> Option<f64> {
    match value? {
        RawNumeric::Number(n) => Some(*n),
        RawNumeric::Text(text) if text.is_empty() => None,
        RawNumeric::Text(text) => parse_float_prefix(text),
    }
}

/// Any non-empty value is kept verbatim in its textual form
pub fn normalize_blood_pressure(value: Option<&RawText>) -> Option<String> {
    let text = value?.to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Error tokens are checked before numeric parsing, so `"ERROR 98.6"` is `None`
pub fn normalize_temperature(value: Option<&RawNumeric>) -> Option<f64> {
    match value? {
        RawNumeric::Number(n) => Some(*n),
        RawNumeric::Text(text) if text.is_empty() => None,
        RawNumeric::Text(text) => {
            let lowered = text.to_lowercase();
            if TEMPERATURE_ERROR_TOKENS
                .iter()
                .any(|token| lowered.contains(token))
            {
                return None;
            }
            parse_float_prefix(text).filter(|t| !t.is_nan())
        }
    }
}

fn text_or_unknown(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawNumeric {
        RawNumeric::Text(s.to_string())
    }

    #[test]
    fn test_age_variants() {
        assert_eq!(normalize_age(Some(&RawNumeric::Number(70.0))), Some(70.0));
        assert_eq!(normalize_age(Some(&text("45"))), Some(45.0));
        assert_eq!(normalize_age(Some(&text("45.5"))), Some(45.5));
        assert_eq!(normalize_age(Some(&text(""))), None);
        assert_eq!(normalize_age(Some(&text("N/A"))), None);
        assert_eq!(normalize_age(Some(&text("unknown"))), None);
        assert_eq!(normalize_age(None), None);
    }

    #[test]
    fn test_age_out_of_range_is_kept() {
        assert_eq!(normalize_age(Some(&RawNumeric::Number(-4.0))), Some(-4.0));
        assert_eq!(normalize_age(Some(&text("230"))), Some(230.0));
    }

    #[test]
    fn test_blood_pressure_variants() {
        let bp = |s: &str| RawText::Text(s.to_string());

        assert_eq!(normalize_blood_pressure(Some(&bp("120/80"))), Some("120/80".to_string()));
        assert_eq!(normalize_blood_pressure(Some(&bp("INVALID"))), Some("INVALID".to_string()));
        assert_eq!(normalize_blood_pressure(Some(&bp("150/"))), Some("150/".to_string()));
        assert_eq!(normalize_blood_pressure(Some(&bp(""))), None);
        assert_eq!(normalize_blood_pressure(None), None);
        assert_eq!(
            normalize_blood_pressure(Some(&RawText::Number(serde_json::Number::from(120)))),
            Some("120".to_string())
        );
    }

    #[test]
    fn test_temperature_error_tokens() {
        assert_eq!(normalize_temperature(Some(&text("TEMP_ERROR"))), None);
        assert_eq!(normalize_temperature(Some(&text("invalid"))), None);
        assert_eq!(normalize_temperature(Some(&text("N/A"))), None);
        assert_eq!(normalize_temperature(Some(&text("n/a"))), None);
        // Token check runs before numeric parsing
        assert_eq!(normalize_temperature(Some(&text("101.2 error"))), None);
    }

    #[test]
    fn test_temperature_numeric_values() {
        assert_eq!(normalize_temperature(Some(&RawNumeric::Number(99.6))), Some(99.6));
        assert_eq!(normalize_temperature(Some(&text("102.3"))), Some(102.3));
        assert_eq!(normalize_temperature(Some(&text("abc"))), None);
        assert_eq!(normalize_temperature(Some(&text(""))), None);
        assert_eq!(normalize_temperature(None), None);
    }

    #[test]
    fn test_descriptive_fields_default_to_unknown() {
        let raw = RawPatientRecord::new("DEMO010", "Doe, Jane");
        let record = normalize(&raw);

        assert_eq!(record.gender, "Unknown");
        assert_eq!(record.visit_date, "Unknown");
        assert_eq!(record.diagnosis, "Unknown");
        assert_eq!(record.medications, "Unknown");
    }

    #[test]
    fn test_descriptive_fields_pass_through() {
        let mut raw = RawPatientRecord::new("DEMO011", "Roe, John");
        raw.gender = Some("M".to_string());
        raw.visit_date = Some("2024-01-15".to_string());
        raw.diagnosis = Some("Hypertension".to_string());
        raw.medications = Some("Lisinopril 10mg daily".to_string());

        let record = normalize(&raw);
        assert_eq!(record.gender, "M");
        assert_eq!(record.visit_date, "2024-01-15");
        assert_eq!(record.diagnosis, "Hypertension");
        assert_eq!(record.medications, "Lisinopril 10mg daily");
    }

    #[test]
    fn test_one_bad_field_does_not_affect_others() {
        let mut raw = RawPatientRecord::new("DEMO012", "Poe, Ann");
        raw.age = Some(text("not a number"));
        raw.blood_pressure = Some(RawText::Text("130/85".to_string()));
        raw.temperature = Some(RawNumeric::Number(100.1));

        let record = normalize(&raw);
        assert!(record.age.is_none());
        assert_eq!(record.blood_pressure.as_deref(), Some("130/85"));
        assert_eq!(record.temperature, Some(100.1));
    }

    #[test]
    fn test_normalize_batch_preserves_order() {
        let raw = vec![
            RawPatientRecord::new("B", "Second"),
            RawPatientRecord::new("A", "First"),
            RawPatientRecord::new("C", "Third"),
        ];

        let ids: Vec<_> = normalize_batch(&raw)
            .into_iter()
            .map(|r| r.patient_id)
            .collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }
}
