//! Property tests for the scoring invariants.

use proptest::prelude::*;

use marksman_engine::curves::{interpolate, CurvePoint};
use marksman_engine::foundation::{Score, SCORE_MAX, SCORE_MIN};
use marksman_engine::grading::{risk_score_to_grade, score_to_grade};
use marksman_engine::risk::adaptability_bonus;
use marksman_engine::scoring::{AIM_WEIGHTS, SHOT_WEIGHTS};

proptest! {
    #[test]
    fn clamping_is_idempotent(raw in -1_000.0..1_000.0f64) {
        let once = Score::new(raw);
        let twice = Score::new(once.value());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clamping_is_identity_on_the_scale(raw in SCORE_MIN..=SCORE_MAX) {
        prop_assert_eq!(Score::new(raw).value(), raw);
    }

    #[test]
    fn clamped_scores_stay_on_the_scale(raw in -1.0e9..1.0e9f64) {
        let value = Score::new(raw).value();
        prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&value));
    }

    #[test]
    fn letter_grades_never_get_worse_as_scores_rise(
        a in -150.0..150.0f64,
        b in -150.0..150.0f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_grade = score_to_grade(Score::new(low));
        let high_grade = score_to_grade(Score::new(high));
        prop_assert!(high_grade.is_at_least(low_grade));
    }

    #[test]
    fn risk_grades_never_get_worse_as_scores_rise(
        a in -50.0..150.0f64,
        b in -50.0..150.0f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(risk_score_to_grade(high).rank() <= risk_score_to_grade(low).rank());
    }

    #[test]
    fn risk_multipliers_stay_in_band(score in -50.0..150.0f64) {
        let multiplier = risk_score_to_grade(score).multiplier();
        prop_assert!((0.70..=1.10).contains(&multiplier));
    }

    #[test]
    fn non_pro_adaptability_is_always_locked_zero(raw in -1_000.0..1_000.0f64) {
        let bonus = adaptability_bonus(Some(raw), false);
        prop_assert_eq!(bonus.bonus, 0.0);
        prop_assert!(bonus.locked);
    }

    #[test]
    fn pro_adaptability_stays_within_five_points(raw in -1_000.0..1_000.0f64) {
        let bonus = adaptability_bonus(Some(raw), true);
        prop_assert!((-5.0..=5.0).contains(&bonus.bonus));
        prop_assert!(!bonus.locked);
    }

    #[test]
    fn interpolation_stays_within_the_anchor_scores(value in -5.0..5.0f64) {
        let curve = [
            CurvePoint { key: 1.0, score: 50.0 },
            CurvePoint { key: 0.5, score: 10.0 },
            CurvePoint { key: 0.0, score: -40.0 },
        ];
        let score = interpolate(value, &curve);
        prop_assert!((-40.0..=50.0).contains(&score));
    }

    #[test]
    fn interpolation_is_monotonic_over_a_monotonic_curve(
        a in -1.0..2.0f64,
        b in -1.0..2.0f64,
    ) {
        let curve = [
            CurvePoint { key: 1.0, score: 50.0 },
            CurvePoint { key: 0.5, score: 10.0 },
            CurvePoint { key: 0.0, score: -40.0 },
        ];
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interpolate(low, &curve) <= interpolate(high, &curve));
    }
}

#[test]
fn metric_weight_sets_sum_to_one_exactly() {
    let aim_sum = AIM_WEIGHTS.directional
        + AIM_WEIGHTS.magnitude
        + AIM_WEIGHTS.forecast_edge
        + AIM_WEIGHTS.thesis;
    assert_eq!(aim_sum, 1.0);

    let shot_sum = SHOT_WEIGHTS.performance + SHOT_WEIGHTS.forecast_edge + SHOT_WEIGHTS.capture;
    assert_eq!(shot_sum, 1.0);
}
