//! Shot scorer - grades a single trade execution.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::curves::forecast_edge;
use crate::foundation::{AimId, Score, ShotId, Timestamp, ValidationError};
use crate::grading::{score_to_grade, LetterGrade, RiskGrade};
use crate::risk::{adaptability_bonus, assess_risk, DisciplineFlags, RiskPlanFlags};

use super::profit::TimeNormalizedProfit;

/// Metric weights for the shot base score. They sum to exactly 1.
/// Risk mitigation is deliberately absent: it drives the risk grade and
/// multiplier instead of the average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotWeights {
    pub performance: f64,
    pub forecast_edge: f64,
    pub capture: f64,
}

pub const SHOT_WEIGHTS: ShotWeights = ShotWeights {
    performance: 0.45,
    forecast_edge: 0.35,
    capture: 0.20,
};

/// Cap for the annualized-alpha performance metric.
const PERFORMANCE_CAP: f64 = 50.0;

/// Cap for the perfect-shot capture metric.
const CAPTURE_CAP: f64 = 50.0;

/// Raw facts for scoring one shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotScoringInput {
    pub shot_id: ShotId,
    /// The aim this shot was taken in pursuit of. Back-reference only.
    pub aim_id: AimId,
    pub entry_price: f64,
    pub exit_price: f64,
    /// Best price reached while the position was open.
    pub peak_price: f64,
    pub entry_date: Timestamp,
    pub exit_date: Timestamp,
    /// Capital committed to the shot, in dollars.
    pub position_size: f64,
    /// Market benchmark return over the holding period, as a fraction.
    pub market_return_percent: f64,
    pub plan: RiskPlanFlags,
    pub discipline: DisciplineFlags,
    /// Raw adaptability self-assessment, if the trader supplied one.
    pub adaptability_score: Option<f64>,
    pub is_pro: bool,
}

impl ShotScoringInput {
    /// Checks that prices and sizing are usable before scoring.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("entry_price", self.entry_price),
            ("exit_price", self.exit_price),
            ("peak_price", self.peak_price),
            ("position_size", self.position_size),
        ] {
            if value <= 0.0 {
                return Err(ValidationError::non_positive(field, value));
            }
        }
        Ok(())
    }
}

/// A scored shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotScore {
    pub shot_id: ShotId,
    pub aim_id: AimId,
    pub performance_score: Score,
    pub shot_forecast_edge: Score,
    pub perfect_shot_capture: Score,
    /// Risk score reported as a metric; feeds the grade, not the average.
    pub risk_mitigation_score: Score,
    pub risk_grade: RiskGrade,
    pub risk_multiplier: f64,
    pub adaptability_score: Option<f64>,
    pub adaptability_bonus: f64,
    pub adaptability_locked: bool,
    /// Weighted metric average before risk adjustment. Unclamped.
    pub base_score: f64,
    pub final_score: Score,
    pub letter_grade: LetterGrade,
    pub profit: TimeNormalizedProfit,
    /// Aggregation weight: position size times days held.
    pub capital_time_weight: f64,
    pub calculated_at: Timestamp,
}

/// Scorer for individual trade executions.
pub struct ShotScorer;

impl ShotScorer {
    /// Scores a shot.
    ///
    /// The base score is the weighted average of performance, forecast
    /// edge, and capture. Risk discipline scales it and the adaptability
    /// bonus shifts it; the result is clamped to the score scale.
    pub fn score(input: &ShotScoringInput) -> ShotScore {
        let duration_days = input.exit_date.days_since_ceil(&input.entry_date).max(1);
        let shot_return = (input.exit_price - input.entry_price) / input.entry_price;

        let performance = Score::new(performance_score(
            shot_return,
            input.market_return_percent,
            duration_days,
        ));
        let edge = Score::new(forecast_edge(shot_return, input.market_return_percent));
        let capture = Score::new(perfect_shot_capture(
            shot_return,
            (input.peak_price - input.entry_price) / input.entry_price,
        ));

        let assessment = assess_risk(&input.plan, &input.discipline);
        let bonus = adaptability_bonus(input.adaptability_score, input.is_pro);

        trace!(
            shot = %input.shot_id,
            performance = performance.value(),
            edge = edge.value(),
            capture = capture.value(),
            risk = assessment.score,
            "shot metrics"
        );

        let base_score = SHOT_WEIGHTS.performance * performance.value()
            + SHOT_WEIGHTS.forecast_edge * edge.value()
            + SHOT_WEIGHTS.capture * capture.value();

        // A sub-par multiplier must penalize regardless of sign: positive
        // bases shrink under it, negative bases deepen.
        let risk_adjusted = if base_score >= 0.0 {
            base_score * assessment.multiplier
        } else {
            base_score / assessment.multiplier
        };
        let final_score = Score::new(risk_adjusted + bonus.bonus);
        let letter_grade = score_to_grade(final_score);

        debug!(
            shot = %input.shot_id,
            base = base_score,
            score = final_score.value(),
            grade = %letter_grade,
            "scored shot"
        );

        ShotScore {
            shot_id: input.shot_id,
            aim_id: input.aim_id,
            performance_score: performance,
            shot_forecast_edge: edge,
            perfect_shot_capture: capture,
            risk_mitigation_score: Score::new(assessment.score),
            risk_grade: assessment.grade,
            risk_multiplier: assessment.multiplier,
            adaptability_score: input.adaptability_score,
            adaptability_bonus: bonus.bonus,
            adaptability_locked: bonus.locked,
            base_score,
            final_score,
            letter_grade,
            profit: TimeNormalizedProfit::from_move(shot_return, duration_days),
            capital_time_weight: input.position_size * duration_days as f64,
            calculated_at: Timestamp::now(),
        }
    }
}

/// Annualized alpha over the market, one point per percent, capped.
fn performance_score(shot_return: f64, market_return: f64, duration_days: i64) -> f64 {
    let annualize = 365.0 / duration_days as f64;
    let alpha = (shot_return - market_return) * annualize;
    (alpha * 100.0).clamp(-PERFORMANCE_CAP, PERFORMANCE_CAP)
}

/// How much of the best available exit the shot captured.
fn perfect_shot_capture(shot_return: f64, perfect_return: f64) -> f64 {
    if perfect_return <= 0.0 {
        // The position never saw daylight; breaking even against that is
        // as good as capture gets.
        if shot_return >= 0.0 {
            return CAPTURE_CAP;
        }
        return (shot_return * 100.0).clamp(-CAPTURE_CAP, 0.0);
    }

    let ratio = shot_return / perfect_return;
    if ratio >= 1.0 {
        CAPTURE_CAP
    } else if ratio >= 0.0 {
        (ratio - 0.5) * 100.0
    } else {
        (ratio * 50.0).max(-CAPTURE_CAP)
    }
}
