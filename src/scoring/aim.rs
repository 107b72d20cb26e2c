//! Aim scorer - grades a single price prediction.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::curves::{directional_accuracy, forecast_edge, magnitude_accuracy, DirectionThresholds};
use crate::foundation::{AimId, Score, Timestamp, ValidationError};
use crate::grading::{score_to_grade, LetterGrade};

use super::profit::TimeNormalizedProfit;

/// Metric weights for the aim composite. They sum to exactly 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimWeights {
    pub directional: f64,
    pub magnitude: f64,
    pub forecast_edge: f64,
    pub thesis: f64,
}

pub const AIM_WEIGHTS: AimWeights = AimWeights {
    directional: 0.20,
    magnitude: 0.30,
    forecast_edge: 0.35,
    thesis: 0.15,
};

/// Annualized market return the difficulty multiplier is measured against.
const BASELINE_ANNUAL_RETURN: f64 = 0.10;

/// Scales annualized alpha into the multiplier.
const DIFFICULTY_DIVISOR: f64 = 2.0;

/// Bounds for the reported difficulty multiplier.
const DIFFICULTY_MIN: f64 = 0.5;
const DIFFICULTY_MAX: f64 = 3.0;

/// How the price reacted relative to the predicted catalyst reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceReaction {
    Expected,
    Opposite,
    Muted,
}

/// Whether catalyst data was supplied for the aim.
///
/// Absent data is its own variant so it can never be conflated with "the
/// catalyst did not occur".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CatalystOutcome {
    NotProvided,
    Observed {
        occurred: bool,
        reaction: PriceReaction,
    },
}

/// Raw facts for scoring one aim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimScoringInput {
    pub aim_id: AimId,
    pub entry_price: f64,
    pub target_price: f64,
    pub actual_price: f64,
    pub start_date: Timestamp,
    pub target_date: Timestamp,
    pub close_date: Timestamp,
    /// Market benchmark return over the aim's window, as a fraction.
    pub market_return_percent: f64,
    pub catalyst: CatalystOutcome,
    pub risks_documented: bool,
    pub self_rating: Option<u8>,
    pub notes: Option<String>,
}

impl AimScoringInput {
    /// Checks that prices are usable before scoring.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("entry_price", self.entry_price),
            ("target_price", self.target_price),
            ("actual_price", self.actual_price),
        ] {
            if value <= 0.0 {
                return Err(ValidationError::non_positive(field, value));
            }
        }
        Ok(())
    }
}

/// A scored aim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AimScore {
    pub aim_id: AimId,
    pub directional_accuracy: Score,
    pub magnitude_accuracy: Score,
    pub forecast_edge: Score,
    pub thesis_validity: Score,
    /// True when a positive thesis lookup was zeroed for undocumented risks.
    pub thesis_validity_capped: bool,
    pub risks_documented: bool,
    /// Informational prediction-aggressiveness measure. Never scales
    /// `final_score`.
    pub difficulty_multiplier: f64,
    pub final_score: Score,
    pub letter_grade: LetterGrade,
    pub predicted_profit: TimeNormalizedProfit,
    pub actual_profit: TimeNormalizedProfit,
    pub self_rating: Option<u8>,
    pub notes: Option<String>,
    pub calculated_at: Timestamp,
}

/// Scorer for individual price predictions.
pub struct AimScorer;

impl AimScorer {
    /// Scores an aim with the default directional thresholds.
    pub fn score(input: &AimScoringInput) -> AimScore {
        Self::score_with_thresholds(input, &DirectionThresholds::default())
    }

    /// Scores an aim.
    ///
    /// The composite is the weighted average of the four metrics, clamped
    /// to the score scale. The difficulty multiplier is computed alongside
    /// but reported only.
    pub fn score_with_thresholds(
        input: &AimScoringInput,
        thresholds: &DirectionThresholds,
    ) -> AimScore {
        let predicted_move = (input.target_price - input.entry_price) / input.entry_price;
        let actual_move = (input.actual_price - input.entry_price) / input.entry_price;

        let directional = Score::new(directional_accuracy(predicted_move, actual_move, thresholds));
        let magnitude = Score::new(magnitude_accuracy(predicted_move, actual_move));
        let edge = Score::new(forecast_edge(actual_move, input.market_return_percent));
        let (thesis, capped) = thesis_validity(input.catalyst, input.risks_documented);

        trace!(
            aim = %input.aim_id,
            directional = directional.value(),
            magnitude = magnitude.value(),
            edge = edge.value(),
            thesis = thesis.value(),
            "aim metrics"
        );

        let planned_days = input.target_date.days_since(&input.start_date);
        let realized_days = input.close_date.days_since(&input.start_date);

        let weighted = AIM_WEIGHTS.directional * directional.value()
            + AIM_WEIGHTS.magnitude * magnitude.value()
            + AIM_WEIGHTS.forecast_edge * edge.value()
            + AIM_WEIGHTS.thesis * thesis.value();
        let final_score = Score::new(weighted);
        let letter_grade = score_to_grade(final_score);

        debug!(aim = %input.aim_id, score = final_score.value(), grade = %letter_grade, "scored aim");

        AimScore {
            aim_id: input.aim_id,
            directional_accuracy: directional,
            magnitude_accuracy: magnitude,
            forecast_edge: edge,
            thesis_validity: thesis,
            thesis_validity_capped: capped,
            risks_documented: input.risks_documented,
            difficulty_multiplier: difficulty_multiplier(predicted_move, planned_days),
            final_score,
            letter_grade,
            predicted_profit: TimeNormalizedProfit::from_move(predicted_move, planned_days),
            actual_profit: TimeNormalizedProfit::from_move(actual_move, realized_days),
            self_rating: input.self_rating,
            notes: input.notes.clone(),
            calculated_at: Timestamp::now(),
        }
    }
}

/// Thesis validity lookup plus the undocumented-risks cap.
///
/// Returns the score and whether it was capped. A positive lookup is
/// forced to zero when risks were not documented; absent catalyst data is
/// a neutral zero and never counts as capped.
fn thesis_validity(catalyst: CatalystOutcome, risks_documented: bool) -> (Score, bool) {
    let raw = match catalyst {
        CatalystOutcome::NotProvided => return (Score::ZERO, false),
        CatalystOutcome::Observed { occurred, reaction } => match (occurred, reaction) {
            (true, PriceReaction::Expected) => 50.0,
            (true, PriceReaction::Muted) => 10.0,
            (true, PriceReaction::Opposite) => -30.0,
            (false, PriceReaction::Expected) => 20.0,
            (false, PriceReaction::Muted) => 0.0,
            (false, PriceReaction::Opposite) => -20.0,
        },
    };
    if !risks_documented && raw > 0.0 {
        return (Score::ZERO, true);
    }
    (Score::new(raw), false)
}

/// Annualizes the predicted move and maps its alpha over the baseline
/// into the bounded multiplier. Neutral for degenerate durations.
fn difficulty_multiplier(predicted_move: f64, planned_days: i64) -> f64 {
    if planned_days <= 0 {
        return 1.0;
    }
    let annualized = predicted_move * 365.0 / planned_days as f64;
    let alpha = annualized - BASELINE_ANNUAL_RETURN;
    (1.0 + alpha / DIFFICULTY_DIVISOR).clamp(DIFFICULTY_MIN, DIFFICULTY_MAX)
}
