//! Temperature risk (0–2 points)
//!
//! Boundaries are the exact Fahrenheit constants 101.0, 99.6, 100.9 and 99.5.
//! Readings that fall between them (100.95, 99.55) match no band and score 0.

use serde::Serialize;

pub const HIGH_FEVER_MIN_F: f64 = 101.0;
pub const LOW_FEVER_MIN_F: f64 = 99.6;
pub const LOW_FEVER_MAX_F: f64 = 100.9;
pub const NORMAL_MAX_F: f64 = 99.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// ≥101.0°F
    HighFever,
    /// 99.6–100.9°F
    LowFever,
    /// ≤99.5°F
    Normal,
    Unclassified,
}

impl TemperatureBand {
    pub fn points(self) -> u8 {
        match self {
            TemperatureBand::HighFever => 2,
            TemperatureBand::LowFever => 1,
            TemperatureBand::Normal | TemperatureBand::Unclassified => 0,
        }
    }
}

struct BandRule {
    band: TemperatureBand,
    matches: fn(f64) -> bool,
}

fn is_high_fever(t: f64) -> bool {
    t >= HIGH_FEVER_MIN_F
}

fn is_low_fever(t: f64) -> bool {
    (LOW_FEVER_MIN_F..=LOW_FEVER_MAX_F).contains(&t)
}

fn is_normal(t: f64) -> bool {
    t <= NORMAL_MAX_F
}

const BAND_RULES: &[BandRule] = &[
    BandRule { band: TemperatureBand::HighFever, matches: is_high_fever },
    BandRule { band: TemperatureBand::LowFever, matches: is_low_fever },
    BandRule { band: TemperatureBand::Normal, matches: is_normal },
];

pub fn classify_temperature(temperature: Option<f64>) -> TemperatureBand {
    match temperature {
        Some(t) if !t.is_nan() => BAND_RULES
            .iter()
            .find(|rule| (rule.matches)(t))
            .map(|rule| rule.band)
            .unwrap_or(TemperatureBand::Unclassified),
        _ => TemperatureBand::Unclassified,
    }
}

/// Temperature risk points (0–2)
pub fn temperature_risk(temperature: Option<f64>) -> u8 {
    classify_temperature(temperature).points()
}
