//! Grading module - Score to grade mapping.
//!
//! Pure lookups from the numeric score scale into the 16-symbol letter
//! grade ladder and the 5-symbol risk grade ladder.

mod letter_grade;
mod risk_grade;

pub use letter_grade::{score_to_grade, GradeTier, LetterGrade};
pub use risk_grade::{risk_score_to_grade, RiskGrade, RISK_SCORE_MAX, RISK_SCORE_MIN};
