//! Target scorer - aggregates a thesis's aims and shots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::foundation::{Score, ShotId, TargetId, Timestamp, UserId};
use crate::grading::{score_to_grade, LetterGrade};

use super::aim::AimScore;
use super::shot::ShotScore;

/// A shot's hold counts as running to the end of the target when it spans
/// at least this share of the target's duration.
const HELD_UNTIL_END_SHARE: f64 = 0.8;

/// Financial details for one shot, keyed by shot id during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotFinancials {
    pub shot_id: ShotId,
    pub entry_price: f64,
    pub exit_price: f64,
    pub peak_price: f64,
    /// Capital committed, in dollars.
    pub position_size: f64,
    pub days_held: f64,
}

/// Raw facts for scoring one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetScoringInput {
    pub target_id: TargetId,
    pub user_id: UserId,
    pub aim_scores: Vec<AimScore>,
    pub shot_scores: Vec<ShotScore>,
    pub shot_details: Vec<ShotFinancials>,
    pub first_aim_date: Timestamp,
    pub close_date: Timestamp,
    /// Market benchmark return over the target's life, as a fraction.
    pub market_return_percent: f64,
}

/// A scored target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetScore {
    pub target_id: TargetId,
    pub user_id: UserId,
    /// Mean of the child aim scores. Absent when the target has no aims.
    pub prediction_score: Option<Score>,
    pub prediction_grade: Option<LetterGrade>,
    /// Capital-time-weighted mean of the child shot scores. Absent when
    /// the target has no shots.
    pub performance_score: Option<Score>,
    pub performance_grade: Option<LetterGrade>,
    pub total_pnl_dollars: f64,
    pub total_pnl_percent: f64,
    pub total_capital_invested: f64,
    /// Approximated as total invested capital; a true overlapping peak
    /// needs a position timeline the inputs do not carry.
    pub peak_capital_at_once: f64,
    pub max_possible_return_percent: f64,
    pub target_duration_days: i64,
    pub avg_holding_period_days: f64,
    pub held_until_end: bool,
    /// Realized annualized profit relative to predicted. Zero when
    /// nothing was predicted.
    pub prediction_accuracy: f64,
    pub aim_wins: u32,
    pub aim_losses: u32,
    pub win_ratio: f64,
    pub market_return_percent: f64,
    pub alpha_vs_market: f64,
    pub avg_profit_per_day: f64,
    pub avg_profit_per_month: f64,
    pub avg_profit_per_year: f64,
    pub calculated_at: Timestamp,
}

/// Scorer for investment theses.
pub struct TargetScorer;

impl TargetScorer {
    /// Aggregates already-scored aims and shots into a target score.
    pub fn score(input: &TargetScoringInput) -> TargetScore {
        let details: HashMap<ShotId, &ShotFinancials> = input
            .shot_details
            .iter()
            .map(|detail| (detail.shot_id, detail))
            .collect();

        let prediction_score = mean(
            input
                .aim_scores
                .iter()
                .map(|aim| aim.final_score.value()),
        )
        .map(Score::new);

        let performance_score = weighted_mean(input.shot_scores.iter().map(|shot| {
            let weight = details
                .get(&shot.shot_id)
                .map(|detail| detail.position_size * detail.days_held)
                .filter(|weight| *weight > 0.0)
                .unwrap_or(1.0);
            (shot.final_score.value(), weight)
        }))
        .map(Score::new);

        let total_capital_invested: f64 =
            input.shot_details.iter().map(|d| d.position_size).sum();

        let total_pnl_dollars: f64 = input
            .shot_details
            .iter()
            .map(|detail| {
                let quantity = detail.position_size / detail.entry_price;
                (detail.exit_price - detail.entry_price) * quantity
            })
            .sum();

        let max_possible_dollars: f64 = input
            .shot_details
            .iter()
            .map(|detail| {
                let quantity = detail.position_size / detail.entry_price;
                ((detail.peak_price - detail.entry_price) * quantity).max(0.0)
            })
            .sum();

        let total_pnl_percent = if total_capital_invested > 0.0 {
            total_pnl_dollars / total_capital_invested
        } else {
            0.0
        };
        let max_possible_return_percent = if total_capital_invested > 0.0 {
            max_possible_dollars / total_capital_invested
        } else {
            0.0
        };

        let target_duration_days = input.close_date.days_since(&input.first_aim_date).max(0);
        let avg_holding_period_days =
            mean(input.shot_details.iter().map(|d| d.days_held)).unwrap_or(0.0);
        let held_until_end = target_duration_days > 0
            && input.shot_details.iter().any(|detail| {
                detail.days_held >= HELD_UNTIL_END_SHARE * target_duration_days as f64
            });

        let predicted_yearly =
            mean(input.aim_scores.iter().map(|aim| aim.predicted_profit.per_year));
        let actual_yearly =
            mean(input.aim_scores.iter().map(|aim| aim.actual_profit.per_year));
        let prediction_accuracy = match (actual_yearly, predicted_yearly) {
            (Some(actual), Some(predicted)) if predicted != 0.0 => actual / predicted,
            _ => 0.0,
        };

        let aim_wins = input
            .aim_scores
            .iter()
            .filter(|aim| aim.directional_accuracy.is_positive())
            .count() as u32;
        let aim_losses = input.aim_scores.len() as u32 - aim_wins;
        let win_ratio = if input.aim_scores.is_empty() {
            0.0
        } else {
            f64::from(aim_wins) / input.aim_scores.len() as f64
        };

        let avg_profit_per_day = weighted_mean(input.shot_scores.iter().map(|shot| {
            let weight = details
                .get(&shot.shot_id)
                .map(|detail| detail.position_size)
                .filter(|weight| *weight > 0.0)
                .unwrap_or(1.0);
            (shot.profit.per_day, weight)
        }))
        .unwrap_or(0.0);

        debug!(
            target = %input.target_id,
            prediction = ?prediction_score.map(|s| s.value()),
            performance = ?performance_score.map(|s| s.value()),
            pnl = total_pnl_dollars,
            "scored target"
        );

        TargetScore {
            target_id: input.target_id,
            user_id: input.user_id,
            prediction_score,
            prediction_grade: prediction_score.map(score_to_grade),
            performance_score,
            performance_grade: performance_score.map(score_to_grade),
            total_pnl_dollars,
            total_pnl_percent,
            total_capital_invested,
            peak_capital_at_once: total_capital_invested,
            max_possible_return_percent,
            target_duration_days,
            avg_holding_period_days,
            held_until_end,
            prediction_accuracy,
            aim_wins,
            aim_losses,
            win_ratio,
            market_return_percent: input.market_return_percent,
            alpha_vs_market: total_pnl_percent - input.market_return_percent,
            avg_profit_per_day,
            avg_profit_per_month: avg_profit_per_day * 30.0,
            avg_profit_per_year: avg_profit_per_day * 365.0,
            calculated_at: Timestamp::now(),
        }
    }
}

/// Mean of an iterator, None when empty.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Weighted mean of (value, weight) pairs, None when empty. Weights are
/// assumed positive by the callers.
fn weighted_mean(pairs: impl Iterator<Item = (f64, f64)>) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    let mut count = 0usize;
    for (value, weight) in pairs {
        weighted_sum += value * weight;
        weight_sum += weight;
        count += 1;
    }
    if count == 0 || weight_sum == 0.0 {
        None
    } else {
        Some(weighted_sum / weight_sum)
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;
