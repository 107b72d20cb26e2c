//! Directional accuracy - did the price go the way the prediction said.

/// Thresholds for classifying the size of the realized move.
///
/// The only caller-tunable curve parameters in the engine; everything
/// else is a fixed versioned constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionThresholds {
    /// Moves at or beyond this magnitude earn the full +/-50.
    pub strong: f64,
    /// Moves at or beyond this magnitude earn +/-25.
    pub modest: f64,
}

impl Default for DirectionThresholds {
    fn default() -> Self {
        Self {
            strong: 0.10,
            modest: 0.03,
        }
    }
}

/// Moves smaller than this are flat and score zero either way.
const FLAT_MOVE: f64 = 0.01;

/// Full score for a strong move called correctly.
const STRONG_SCORE: f64 = 50.0;

/// Score for a modest move called correctly.
const MODEST_SCORE: f64 = 25.0;

/// Scores whether the realized move went the predicted direction.
///
/// Both moves are fractional returns relative to entry; only the sign of
/// `predicted_move` matters. A realized move under 1% is flat and scores
/// zero. At or beyond the strong threshold the score is +/-50 by
/// direction match; between the modest and strong thresholds, +/-25;
/// between 1% and the modest threshold, a linear ramp from 0 up to
/// +/-25.
pub fn directional_accuracy(
    predicted_move: f64,
    actual_move: f64,
    thresholds: &DirectionThresholds,
) -> f64 {
    let move_abs = actual_move.abs();
    if move_abs < FLAT_MOVE {
        return 0.0;
    }

    // Sign product instead of signum: a degenerate zero prediction has no
    // direction and can never match (f64::signum maps 0.0 to 1.0).
    let matched = predicted_move * actual_move > 0.0;
    let magnitude = if move_abs >= thresholds.strong {
        STRONG_SCORE
    } else if move_abs >= thresholds.modest {
        MODEST_SCORE
    } else {
        MODEST_SCORE * (move_abs - FLAT_MOVE) / (thresholds.modest - FLAT_MOVE)
    };

    if matched {
        magnitude
    } else {
        -magnitude
    }
}
