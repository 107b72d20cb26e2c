//! Forecast edge curve - asset return relative to the market benchmark.

use super::interpolate::{interpolate, CurvePoint};

/// Market moves smaller than this are treated as flat.
const FLAT_MARKET_EPSILON: f64 = 0.005;

/// Cap for the loss-avoidance reward.
const EDGE_MAX: f64 = 50.0;

/// Base reward for staying non-negative while the market fell.
const LOSS_AVOIDANCE_BASE: f64 = 25.0;

/// Flat-market regime: absolute return bands (return -> score).
const FLAT_MARKET_CURVE: [CurvePoint; 8] = [
    CurvePoint { key: 0.20, score: 50.0 },
    CurvePoint { key: 0.10, score: 35.0 },
    CurvePoint { key: 0.05, score: 20.0 },
    CurvePoint { key: 0.01, score: 10.0 },
    CurvePoint { key: -0.01, score: 0.0 },
    CurvePoint { key: -0.05, score: -15.0 },
    CurvePoint { key: -0.10, score: -30.0 },
    CurvePoint { key: -0.20, score: -50.0 },
];

/// General regime: asset/market multiple -> score.
const MULTIPLE_CURVE: [CurvePoint; 7] = [
    CurvePoint { key: 3.0, score: 50.0 },
    CurvePoint { key: 2.0, score: 40.0 },
    CurvePoint { key: 1.5, score: 25.0 },
    CurvePoint { key: 1.0, score: 0.0 },
    CurvePoint { key: 0.5, score: -20.0 },
    CurvePoint { key: 0.0, score: -35.0 },
    CurvePoint { key: -1.0, score: -50.0 },
];

/// Scores the asset's return against the market benchmark.
///
/// Returns are fractional (0.20 = 20%) over the same window. Three
/// regimes:
/// - flat market (|market| < 0.5%): the asset's absolute return is scored
///   on fixed bands, since a return multiple against ~zero is meaningless;
/// - falling market with a non-negative asset return: loss avoidance is
///   rewarded in proportion to the spread over the market, capped at the
///   top score;
/// - otherwise: the asset/market multiple runs through the multiple curve.
pub fn forecast_edge(asset_return: f64, market_return: f64) -> f64 {
    if market_return.abs() < FLAT_MARKET_EPSILON {
        return interpolate(asset_return, &FLAT_MARKET_CURVE);
    }
    if market_return < 0.0 && asset_return >= 0.0 {
        let spread = asset_return - market_return;
        return (LOSS_AVOIDANCE_BASE + spread * 100.0).min(EDGE_MAX);
    }
    interpolate(asset_return / market_return, &MULTIPLE_CURVE)
}
