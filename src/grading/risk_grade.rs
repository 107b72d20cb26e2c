//! Risk grade ladder (A to F) and the multiplier band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the risk score scale.
pub const RISK_SCORE_MIN: f64 = 0.0;

/// Upper bound of the risk score scale.
pub const RISK_SCORE_MAX: f64 = 100.0;

/// Risk discipline grade. Each grade maps 1:1 to a score multiplier in
/// the [0.70, 1.10] band, applied to a shot's base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskGrade {
    A,
    B,
    C,
    D,
    F,
}

/// Minimum risk score for each grade, scanned top down. F is the catch-all.
const RISK_THRESHOLDS: [(f64, RiskGrade); 5] = [
    (80.0, RiskGrade::A),
    (60.0, RiskGrade::B),
    (40.0, RiskGrade::C),
    (20.0, RiskGrade::D),
    (f64::NEG_INFINITY, RiskGrade::F),
];

/// Maps a risk score to its grade, clamping to the [0, 100] scale first.
pub fn risk_score_to_grade(risk_score: f64) -> RiskGrade {
    let value = risk_score.clamp(RISK_SCORE_MIN, RISK_SCORE_MAX);
    for (min, grade) in RISK_THRESHOLDS {
        if value >= min {
            return grade;
        }
    }
    RiskGrade::F
}

impl RiskGrade {
    /// Returns the score multiplier for this grade.
    pub fn multiplier(&self) -> f64 {
        match self {
            RiskGrade::A => 1.10,
            RiskGrade::B => 1.05,
            RiskGrade::C => 1.00,
            RiskGrade::D => 0.85,
            RiskGrade::F => 0.70,
        }
    }

    /// Returns the rank of this grade: 0 for A up to 4 for F.
    pub fn rank(&self) -> u8 {
        match self {
            RiskGrade::A => 0,
            RiskGrade::B => 1,
            RiskGrade::C => 2,
            RiskGrade::D => 3,
            RiskGrade::F => 4,
        }
    }
}

impl fmt::Display for RiskGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskGrade::A => "A",
            RiskGrade::B => "B",
            RiskGrade::C => "C",
            RiskGrade::D => "D",
            RiskGrade::F => "F",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_map_to_expected_grades() {
        assert_eq!(risk_score_to_grade(100.0), RiskGrade::A);
        assert_eq!(risk_score_to_grade(80.0), RiskGrade::A);
        assert_eq!(risk_score_to_grade(79.9), RiskGrade::B);
        assert_eq!(risk_score_to_grade(60.0), RiskGrade::B);
        assert_eq!(risk_score_to_grade(40.0), RiskGrade::C);
        assert_eq!(risk_score_to_grade(20.0), RiskGrade::D);
        assert_eq!(risk_score_to_grade(19.9), RiskGrade::F);
        assert_eq!(risk_score_to_grade(0.0), RiskGrade::F);
    }

    #[test]
    fn out_of_scale_inputs_clamp_first() {
        assert_eq!(risk_score_to_grade(250.0), RiskGrade::A);
        assert_eq!(risk_score_to_grade(-40.0), RiskGrade::F);
    }

    #[test]
    fn multipliers_stay_in_band() {
        for grade in [RiskGrade::A, RiskGrade::B, RiskGrade::C, RiskGrade::D, RiskGrade::F] {
            let m = grade.multiplier();
            assert!((0.70..=1.10).contains(&m));
        }
    }

    #[test]
    fn better_grade_means_larger_multiplier() {
        assert!(RiskGrade::A.multiplier() > RiskGrade::B.multiplier());
        assert!(RiskGrade::B.multiplier() > RiskGrade::C.multiplier());
        assert!(RiskGrade::C.multiplier() > RiskGrade::D.multiplier());
        assert!(RiskGrade::D.multiplier() > RiskGrade::F.multiplier());
    }

    #[test]
    fn neutral_grade_leaves_score_untouched() {
        assert_eq!(RiskGrade::C.multiplier(), 1.0);
    }

    #[test]
    fn serializes_as_letter() {
        assert_eq!(serde_json::to_string(&RiskGrade::A).unwrap(), "\"A\"");
        let back: RiskGrade = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(back, RiskGrade::F);
    }
}
