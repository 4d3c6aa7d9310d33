//! Raw patient record as delivered by the upstream API
//!
//! Vitals arrive in inconsistent shapes: ages and temperatures as numbers or
//! text, blood pressure as text or occasionally a bare number, descriptive
//! fields missing or `null`. Those variations are all accepted here and left
//! for the normalizer. Anything outside them (a boolean age, an object where
//! text belongs, a missing or empty `patient_id`) fails decoding.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A numeric vital that may be sent as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumeric {
    Number(f64),
    Text(String),
}

/// A textual vital that may be sent as a JSON string or as a bare number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawText::Text(s) => f.write_str(s),
            RawText::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Untrusted patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPatientRecord {
    #[serde(deserialize_with = "non_empty_string")]
    pub patient_id: String,

    pub name: String,

    #[serde(default)]
    pub age: Option<RawNumeric>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub blood_pressure: Option<RawText>,

    #[serde(default)]
    pub temperature: Option<RawNumeric>,

    #[serde(default)]
    pub visit_date: Option<String>,

    #[serde(default)]
    pub diagnosis: Option<String>,

    #[serde(default)]
    pub medications: Option<String>,
}

impl RawPatientRecord {
    /// Create a raw record with identity only
    pub fn new(patient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            name: name.into(),
            age: None,
            gender: None,
            blood_pressure: None,
            temperature: None,
            visit_date: None,
            diagnosis: None,
            medications: None,
        }
    }

    /// Decode one record from an already-parsed JSON value
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }
}

/// Decode a JSON array of raw records.
///
/// Fails on the first entry whose shape is outside the record schema; no entry
/// is silently dropped.
pub fn decode_batch(value: &serde_json::Value) -> Result<Vec<RawPatientRecord>> {
    let entries = value
        .as_array()
        .ok_or_else(|| CoreError::NotABatch(json_kind(value).to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            RawPatientRecord::deserialize(entry)
                .map_err(|source| CoreError::InvalidBatchEntry { index, source })
        })
        .collect()
}

fn non_empty_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(serde::de::Error::custom("patient_id must not be empty"));
    }
    Ok(value)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
