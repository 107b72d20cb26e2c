//! Magnitude accuracy curve - how close the predicted move size came to
//! the realized move size.

use super::interpolate::{interpolate, CurvePoint};

/// Score when both the prediction and the market called for no move at all.
const BOTH_FLAT_SCORE: f64 = 50.0;

/// Penalty when no magnitude was forecast but the price moved.
const NO_FORECAST_PENALTY: f64 = -30.0;

/// Small penalty when the forecast motion never came.
const MOVE_NEVER_CAME_PENALTY: f64 = -10.0;

/// Curve applied when the prediction was too aggressive (|predicted| >
/// |actual|), or when the direction was missed outright.
const OVERESTIMATE_CURVE: [CurvePoint; 6] = [
    CurvePoint { key: 1.0, score: 50.0 },
    CurvePoint { key: 0.8, score: 30.0 },
    CurvePoint { key: 0.6, score: 10.0 },
    CurvePoint { key: 0.4, score: -15.0 },
    CurvePoint { key: 0.2, score: -35.0 },
    CurvePoint { key: 0.0, score: -50.0 },
];

/// Softer curve applied when the prediction was too conservative.
const UNDERESTIMATE_CURVE: [CurvePoint; 6] = [
    CurvePoint { key: 1.0, score: 50.0 },
    CurvePoint { key: 0.8, score: 35.0 },
    CurvePoint { key: 0.6, score: 20.0 },
    CurvePoint { key: 0.4, score: 0.0 },
    CurvePoint { key: 0.2, score: -20.0 },
    CurvePoint { key: 0.0, score: -40.0 },
];

/// Scores how well the predicted move magnitude matched the actual move.
///
/// Both moves are fractional returns relative to entry. The overlap ratio
/// min/max of the absolute moves routes through the overestimate curve
/// when the prediction was too aggressive and the softer underestimate
/// curve when it was too conservative. A direction mismatch is the worst
/// case of overestimation: the overestimate curve at ratio zero.
pub fn magnitude_accuracy(predicted_move: f64, actual_move: f64) -> f64 {
    if predicted_move == 0.0 && actual_move == 0.0 {
        return BOTH_FLAT_SCORE;
    }
    if predicted_move == 0.0 {
        return NO_FORECAST_PENALTY;
    }
    if actual_move == 0.0 {
        return MOVE_NEVER_CAME_PENALTY;
    }
    if predicted_move.signum() != actual_move.signum() {
        return interpolate(0.0, &OVERESTIMATE_CURVE);
    }

    let predicted_abs = predicted_move.abs();
    let actual_abs = actual_move.abs();
    let ratio = predicted_abs.min(actual_abs) / predicted_abs.max(actual_abs);

    if predicted_abs > actual_abs {
        interpolate(ratio, &OVERESTIMATE_CURVE)
    } else {
        interpolate(ratio, &UNDERESTIMATE_CURVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfectly_predicted_flat_scores_max() {
        assert_eq!(magnitude_accuracy(0.0, 0.0), 50.0);
    }

    #[test]
    fn missing_forecast_is_penalized() {
        assert_eq!(magnitude_accuracy(0.0, 0.15), -30.0);
        assert_eq!(magnitude_accuracy(0.0, -0.15), -30.0);
    }

    #[test]
    fn move_that_never_came_gets_small_penalty() {
        assert_eq!(magnitude_accuracy(0.25, 0.0), -10.0);
    }

    #[test]
    fn direction_mismatch_is_worst_case() {
        assert_eq!(magnitude_accuracy(0.30, -0.10), -50.0);
        assert_eq!(magnitude_accuracy(-0.10, 0.30), -50.0);
    }

    #[test]
    fn perfect_magnitude_match_scores_max() {
        assert_eq!(magnitude_accuracy(0.20, 0.20), 50.0);
        assert_eq!(magnitude_accuracy(-0.20, -0.20), 50.0);
    }

    #[test]
    fn conservative_prediction_uses_softer_curve() {
        // Predicted 0.4, actual 0.5: ratio 0.8 on the underestimate curve.
        assert_eq!(magnitude_accuracy(0.40, 0.50), 35.0);
        // Same ratio on the too-aggressive side lands lower.
        assert_eq!(magnitude_accuracy(0.50, 0.40), 30.0);
    }

    #[test]
    fn interior_ratio_interpolates() {
        // Predicted 0.35, actual 0.50 -> ratio 0.7, halfway between the
        // 0.6 and 0.8 underestimate anchors.
        let score = magnitude_accuracy(0.35, 0.50);
        assert!((score - 27.5).abs() < 1e-9);
    }

    #[test]
    fn wildly_aggressive_call_bottoms_out() {
        let score = magnitude_accuracy(1.0, 0.001);
        assert!(score < -45.0);
    }

    #[test]
    fn downside_moves_score_like_upside_moves() {
        assert_eq!(
            magnitude_accuracy(-0.40, -0.50),
            magnitude_accuracy(0.40, 0.50)
        );
    }
}
