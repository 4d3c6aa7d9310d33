//! Blood-pressure risk (0–4 points)

use crate::numeric::parse_int_prefix;
use serde::Serialize;

/// Blood-pressure category, in rule precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureStage {
    /// Systolic ≥140 or diastolic ≥90
    Stage2,
    /// Systolic 130–139 or diastolic 80–89
    Stage1,
    /// Systolic 120–129 and diastolic <80
    Elevated,
    /// Systolic <120 and diastolic <80
    Normal,
    /// Missing, malformed, or matched by no band
    Unclassified,
}

impl BloodPressureStage {
    /// Risk points contributed by this stage
    pub fn points(self) -> u8 {
        match self {
            BloodPressureStage::Stage2 => 4,
            BloodPressureStage::Stage1 => 3,
            BloodPressureStage::Elevated => 2,
            BloodPressureStage::Normal => 1,
            BloodPressureStage::Unclassified => 0,
        }
    }
}

/// A structurally valid `SYS/DIA` reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressureReading {
    pub systolic: i64,
    pub diastolic: i64,
}

impl BloodPressureReading {
    /// Parse a canonical blood-pressure string.
    ///
    /// Returns `None` for `"N/A"`, anything containing `"INVALID"` (case-sensitive),
    /// anything that does not split into exactly two parts on `/`, and parts
    /// that are empty or do not start with an integer.
    pub fn parse(text: &str) -> Option<Self> {
        if text == "N/A" || text.contains("INVALID") {
            return None;
        }

        let mut parts = text.split('/');
        let (systolic, diastolic) = match (parts.next(), parts.next(), parts.next()) {
            (Some(sys), Some(dia), None) => (sys, dia),
            _ => return None,
        };

        if systolic.is_empty() || diastolic.is_empty() {
            return None;
        }

        Some(Self {
            systolic: parse_int_prefix(systolic)?,
            diastolic: parse_int_prefix(diastolic)?,
        })
    }
}

struct StageRule {
    stage: BloodPressureStage,
    matches: fn(&BloodPressureReading) -> bool,
}

fn is_stage2(r: &BloodPressureReading) -> bool {
    r.systolic >= 140 || r.diastolic >= 90
}

fn is_stage1(r: &BloodPressureReading) -> bool {
    (130..=139).contains(&r.systolic) || (80..=89).contains(&r.diastolic)
}

fn is_elevated(r: &BloodPressureReading) -> bool {
    (120..=129).contains(&r.systolic) && r.diastolic < 80
}

fn is_normal(r: &BloodPressureReading) -> bool {
    r.systolic < 120 && r.diastolic < 80
}

/// First match wins
const STAGE_RULES: &[StageRule] = &[
    StageRule { stage: BloodPressureStage::Stage2, matches: is_stage2 },
    StageRule { stage: BloodPressureStage::Stage1, matches: is_stage1 },
    StageRule { stage: BloodPressureStage::Elevated, matches: is_elevated },
    StageRule { stage: BloodPressureStage::Normal, matches: is_normal },
];

/// Classify a canonical blood-pressure value
pub fn classify_blood_pressure(blood_pressure: Option<&str>) -> BloodPressureStage {
    let Some(reading) = blood_pressure.and_then(BloodPressureReading::parse) else {
        return BloodPressureStage::Unclassified;
    };

    STAGE_RULES
        .iter()
        .find(|rule| (rule.matches)(&reading))
        .map(|rule| rule.stage)
        .unwrap_or(BloodPressureStage::Unclassified)
}

/// Blood-pressure risk points (0–4)
pub fn blood_pressure_risk(blood_pressure: Option<&str>) -> u8 {
    classify_blood_pressure(blood_pressure).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(bp: &str) -> u8 {
        blood_pressure_risk(Some(bp))
    }

    #[test]
    fn test_stage2() {
        assert_eq!(risk("140/85"), 4);
        assert_eq!(risk("135/95"), 4);
        assert_eq!(risk("110/90"), 4);
        assert_eq!(risk("200/120"), 4);
    }

    #[test]
    fn test_stage1() {
        assert_eq!(risk("130/70"), 3);
        assert_eq!(risk("139/79"), 3);
        // Diastolic 80–89 wins over a normal systolic
        assert_eq!(risk("110/85"), 3);
        assert_eq!(risk("125/80"), 3);
    }

    #[test]
    fn test_elevated_and_normal() {
        assert_eq!(risk("125/70"), 2);
        assert_eq!(risk("120/79"), 2);
        assert_eq!(risk("110/70"), 1);
        assert_eq!(risk("119/79"), 1);
    }

    #[test]
    fn test_missing_or_malformed() {
        assert_eq!(blood_pressure_risk(None), 0);
        assert_eq!(risk("N/A"), 0);
        assert_eq!(risk(""), 0);
        assert_eq!(risk("abc"), 0);
        assert_eq!(risk("120"), 0);
        assert_eq!(risk("INVALID"), 0);
        assert_eq!(risk("150/INVALID"), 0);
        assert_eq!(risk("150/"), 0);
        assert_eq!(risk("/90"), 0);
        assert_eq!(risk("120/80/90"), 0);
        assert_eq!(risk("abc/80"), 0);
    }

    #[test]
    fn test_invalid_marker_is_case_sensitive() {
        // "invalid" in lowercase has no special meaning, but the part still fails to parse
        assert_eq!(risk("invalid/80"), 0);
        assert_eq!(risk("120/80invalid"), 3);
    }

    #[test]
    fn test_lenient_part_parsing() {
        assert_eq!(risk(" 145/ 92"), 4);
        assert_eq!(risk("118.9/70"), 1);
    }

    #[test]
    fn test_negative_reading_falls_to_normal() {
        assert_eq!(classify_blood_pressure(Some("-5/-5")), BloodPressureStage::Normal);
    }

    #[test]
    fn test_reading_parse() {
        assert_eq!(
            BloodPressureReading::parse("128/76"),
            Some(BloodPressureReading { systolic: 128, diastolic: 76 })
        );
        assert_eq!(BloodPressureReading::parse("128-76"), None);
    }

    #[test]
    fn test_stage_points() {
        assert_eq!(BloodPressureStage::Stage2.points(), 4);
        assert_eq!(BloodPressureStage::Stage1.points(), 3);
        assert_eq!(BloodPressureStage::Elevated.points(), 2);
        assert_eq!(BloodPressureStage::Normal.points(), 1);
        assert_eq!(BloodPressureStage::Unclassified.points(), 0);
    }
}
