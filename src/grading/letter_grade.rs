//! Letter grade ladder (AAA down to FFF).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::foundation::Score;

/// Letter grade on the 16-symbol ladder, best to worst.
///
/// Grades are a monotonic, deterministic function of the score: the
/// descending threshold table below is scanned and the first entry whose
/// minimum the score meets wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA+")]
    AaPlus,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "FF")]
    Ff,
    #[serde(rename = "FFF")]
    Fff,
}

/// Grade family with the +/- variants collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeTier {
    TripleA,
    DoubleA,
    A,
    B,
    C,
    D,
    F,
    DoubleF,
    TripleF,
}

/// Minimum score for each grade, scanned top down. FFF is the catch-all.
const GRADE_THRESHOLDS: [(f64, LetterGrade); 16] = [
    (45.0, LetterGrade::Aaa),
    (40.0, LetterGrade::AaPlus),
    (35.0, LetterGrade::Aa),
    (30.0, LetterGrade::APlus),
    (25.0, LetterGrade::A),
    (20.0, LetterGrade::AMinus),
    (15.0, LetterGrade::BPlus),
    (10.0, LetterGrade::B),
    (5.0, LetterGrade::BMinus),
    (2.0, LetterGrade::CPlus),
    (-2.0, LetterGrade::C),
    (-5.0, LetterGrade::CMinus),
    (-15.0, LetterGrade::D),
    (-30.0, LetterGrade::F),
    (-40.0, LetterGrade::Ff),
    (f64::NEG_INFINITY, LetterGrade::Fff),
];

/// Maps a score to its letter grade.
///
/// Total over the clamped score domain; the catch-all FFF row means no
/// real input falls through.
pub fn score_to_grade(score: Score) -> LetterGrade {
    let value = score.value();
    for (min, grade) in GRADE_THRESHOLDS {
        if value >= min {
            return grade;
        }
    }
    LetterGrade::Fff
}

impl LetterGrade {
    /// Returns the rank of this grade: 0 for AAA up to 15 for FFF.
    pub fn rank(&self) -> u8 {
        match self {
            LetterGrade::Aaa => 0,
            LetterGrade::AaPlus => 1,
            LetterGrade::Aa => 2,
            LetterGrade::APlus => 3,
            LetterGrade::A => 4,
            LetterGrade::AMinus => 5,
            LetterGrade::BPlus => 6,
            LetterGrade::B => 7,
            LetterGrade::BMinus => 8,
            LetterGrade::CPlus => 9,
            LetterGrade::C => 10,
            LetterGrade::CMinus => 11,
            LetterGrade::D => 12,
            LetterGrade::F => 13,
            LetterGrade::Ff => 14,
            LetterGrade::Fff => 15,
        }
    }

    /// Returns true if this grade is at least as good as the other.
    pub fn is_at_least(&self, other: LetterGrade) -> bool {
        self.rank() <= other.rank()
    }

    /// Returns true for C or better.
    pub fn is_passing(&self) -> bool {
        self.is_at_least(LetterGrade::C)
    }

    /// Collapses the +/- variants into their grade family.
    pub fn tier(&self) -> GradeTier {
        match self {
            LetterGrade::Aaa => GradeTier::TripleA,
            LetterGrade::AaPlus | LetterGrade::Aa => GradeTier::DoubleA,
            LetterGrade::APlus | LetterGrade::A | LetterGrade::AMinus => GradeTier::A,
            LetterGrade::BPlus | LetterGrade::B | LetterGrade::BMinus => GradeTier::B,
            LetterGrade::CPlus | LetterGrade::C | LetterGrade::CMinus => GradeTier::C,
            LetterGrade::D => GradeTier::D,
            LetterGrade::F => GradeTier::F,
            LetterGrade::Ff => GradeTier::DoubleF,
            LetterGrade::Fff => GradeTier::TripleF,
        }
    }

    /// Returns the display symbol for this grade.
    pub fn symbol(&self) -> &'static str {
        match self {
            LetterGrade::Aaa => "AAA",
            LetterGrade::AaPlus => "AA+",
            LetterGrade::Aa => "AA",
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
            LetterGrade::Ff => "FF",
            LetterGrade::Fff => "FFF",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
