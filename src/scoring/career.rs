//! Career scorer - rolls a user's targets up into lifetime scores.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{Score, Timestamp, UserId};
use crate::grading::{score_to_grade, LetterGrade};

use super::target::TargetScore;

/// Deltas inside this band count as stable rather than a trend.
const TREND_DEAD_BAND: f64 = 3.0;

/// Career level from combined scored activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Elite,
}

impl CareerLevel {
    /// Classifies combined activity (aims plus shots scored).
    pub fn from_activity(total_aims: u32, total_shots: u32) -> Self {
        match total_aims + total_shots {
            0..=19 => CareerLevel::Novice,
            20..=49 => CareerLevel::Beginner,
            50..=99 => CareerLevel::Intermediate,
            100..=199 => CareerLevel::Advanced,
            200..=499 => CareerLevel::Expert,
            _ => CareerLevel::Elite,
        }
    }
}

impl std::fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CareerLevel::Novice => "Novice",
            CareerLevel::Beginner => "Beginner",
            CareerLevel::Intermediate => "Intermediate",
            CareerLevel::Advanced => "Advanced",
            CareerLevel::Expert => "Expert",
            CareerLevel::Elite => "Elite",
        };
        write!(f, "{}", s)
    }
}

/// Raw facts for scoring one career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScoringInput {
    pub user_id: UserId,
    pub target_scores: Vec<TargetScore>,
    pub total_aims_scored: u32,
    pub total_shots_scored: u32,
}

/// A scored career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCareerScore {
    pub user_id: UserId,
    /// Capital-weighted mean of target prediction scores. Zero with no
    /// history.
    pub prediction_quality_score: Score,
    pub prediction_quality_grade: LetterGrade,
    pub performance_score: Score,
    pub performance_grade: LetterGrade,
    pub total_aims_scored: u32,
    pub total_shots_scored: u32,
    pub total_pnl_dollars: f64,
    pub career_level: CareerLevel,
    pub calculated_at: Timestamp,
}

/// Direction of a score trend between two cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    fn from_delta(delta: f64) -> Self {
        if delta > TREND_DEAD_BAND {
            TrendDirection::Improving
        } else if delta < -TREND_DEAD_BAND {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }
}

/// Trend of the two career scores between a recent and an older cohort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrend {
    pub prediction: TrendDirection,
    pub prediction_delta: f64,
    pub performance: TrendDirection,
    pub performance_delta: f64,
}

/// Scorer for trader careers.
pub struct CareerScorer;

impl CareerScorer {
    /// Rolls target scores up into a career score.
    ///
    /// Both composites are capital-weighted means over the targets that
    /// carry the respective child score; a user with no scorable history
    /// sits at the market baseline, grade C.
    pub fn score(input: &UserScoringInput) -> UserCareerScore {
        let prediction_quality_score = Score::new(capital_weighted_mean(
            &input.target_scores,
            |target| target.prediction_score,
        ));
        let performance_score = Score::new(capital_weighted_mean(
            &input.target_scores,
            |target| target.performance_score,
        ));
        let total_pnl_dollars = input
            .target_scores
            .iter()
            .map(|target| target.total_pnl_dollars)
            .sum();

        debug!(
            user = %input.user_id,
            prediction = prediction_quality_score.value(),
            performance = performance_score.value(),
            "scored career"
        );

        UserCareerScore {
            user_id: input.user_id,
            prediction_quality_score,
            prediction_quality_grade: score_to_grade(prediction_quality_score),
            performance_score,
            performance_grade: score_to_grade(performance_score),
            total_aims_scored: input.total_aims_scored,
            total_shots_scored: input.total_shots_scored,
            total_pnl_dollars,
            career_level: CareerLevel::from_activity(
                input.total_aims_scored,
                input.total_shots_scored,
            ),
            calculated_at: Timestamp::now(),
        }
    }

    /// Compares career scores between a recent and an older target cohort.
    pub fn trend(recent: &[TargetScore], older: &[TargetScore]) -> ScoreTrend {
        let prediction_delta = capital_weighted_mean(recent, |t| t.prediction_score)
            - capital_weighted_mean(older, |t| t.prediction_score);
        let performance_delta = capital_weighted_mean(recent, |t| t.performance_score)
            - capital_weighted_mean(older, |t| t.performance_score);

        ScoreTrend {
            prediction: TrendDirection::from_delta(prediction_delta),
            prediction_delta,
            performance: TrendDirection::from_delta(performance_delta),
            performance_delta,
        }
    }
}

/// Capital-weighted mean of one child score across targets, skipping
/// targets where the child is absent. Zero-capital targets weigh 1.
/// Returns 0 when nothing is defined.
fn capital_weighted_mean(
    targets: &[TargetScore],
    pick: impl Fn(&TargetScore) -> Option<Score>,
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for target in targets {
        let Some(score) = pick(target) else {
            continue;
        };
        let weight = if target.total_capital_invested > 0.0 {
            target.total_capital_invested
        } else {
            1.0
        };
        weighted_sum += score.value() * weight;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        0.0
    } else {
        weighted_sum / weight_sum
    }
}
