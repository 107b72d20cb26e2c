//! Time-normalized profit figures.

use serde::{Deserialize, Serialize};

/// A fractional return spread over the time it took to earn it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeNormalizedProfit {
    pub per_day: f64,
    pub per_month: f64,
    pub per_year: f64,
}

impl TimeNormalizedProfit {
    /// Spreads a fractional move over a duration in days.
    ///
    /// A non-positive duration yields all zeros rather than a division
    /// error.
    pub fn from_move(move_fraction: f64, days: i64) -> Self {
        if days <= 0 {
            return Self::default();
        }
        let per_day = move_fraction / days as f64;
        Self {
            per_day,
            per_month: per_day * 30.0,
            per_year: per_day * 365.0,
        }
    }
}
