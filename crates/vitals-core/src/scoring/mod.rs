//! Risk scoring
//!
//! Three independent per-factor risk functions feed an aggregate score:
//!
//! | Factor         | Points | Module             |
//! |----------------|--------|--------------------|
//! | Blood pressure | 0–4    | [`blood_pressure`] |
//! | Temperature    | 0–2    | [`temperature`]    |
//! | Age            | 0–2    | [`age`]            |
//!
//! Each function is an ordered rule table where the first matching band wins;
//! the bands overlap at their boundaries, so table order is the tie-break.
//! The fever and data-quality flags are separate predicates in [`quality`].

pub mod age;
pub mod blood_pressure;
pub mod quality;
pub mod score;
pub mod temperature;

pub use age::{age_risk, classify_age, AgeBand};
pub use blood_pressure::{blood_pressure_risk, classify_blood_pressure, BloodPressureReading, BloodPressureStage};
pub use quality::{data_quality_issues, has_data_quality_issues, has_fever, DataQualityIssue};
pub use score::{
    score_batch, score_patient, RiskScore, ScoredPatient, HIGH_RISK_THRESHOLD, MAX_AGE_POINTS,
    MAX_BLOOD_PRESSURE_POINTS, MAX_TEMPERATURE_POINTS,
};
pub use temperature::{classify_temperature, temperature_risk, TemperatureBand};
