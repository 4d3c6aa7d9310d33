//! Age risk (0–2 points)
//!
//! There is no zero-point band for a valid age: anyone 65 or younger scores 1.
//! Only an unknown age scores 0.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Over 65
    Senior,
    /// 40–65 inclusive
    MiddleAged,
    /// Under 40
    Young,
    Unclassified,
}

impl AgeBand {
    pub fn points(self) -> u8 {
        match self {
            AgeBand::Senior => 2,
            AgeBand::MiddleAged | AgeBand::Young => 1,
            AgeBand::Unclassified => 0,
        }
    }
}

struct BandRule {
    band: AgeBand,
    matches: fn(f64) -> bool,
}

fn is_senior(age: f64) -> bool {
    age > 65.0
}

fn is_middle_aged(age: f64) -> bool {
    (40.0..=65.0).contains(&age)
}

fn is_young(age: f64) -> bool {
    age < 40.0
}

const BAND_RULES: &[BandRule] = &[
    BandRule { band: AgeBand::Senior, matches: is_senior },
    BandRule { band: AgeBand::MiddleAged, matches: is_middle_aged },
    BandRule { band: AgeBand::Young, matches: is_young },
];

pub fn classify_age(age: Option<f64>) -> AgeBand {
    match age {
        Some(a) if !a.is_nan() => BAND_RULES
            .iter()
            .find(|rule| (rule.matches)(a))
            .map(|rule| rule.band)
            .unwrap_or(AgeBand::Unclassified),
        _ => AgeBand::Unclassified,
    }
}

/// Age risk points (0–2)
pub fn age_risk(age: Option<f64>) -> u8 {
    classify_age(age).points()
}
