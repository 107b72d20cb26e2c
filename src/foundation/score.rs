//! Score value object (-100 to +100 scale, symmetric around the market baseline).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lower bound of the score scale.
pub const SCORE_MIN: f64 = -100.0;

/// Upper bound of the score scale.
pub const SCORE_MAX: f64 = 100.0;

/// A value between -100 and +100 inclusive. Zero means the result matched
/// the market baseline; positive beats it, negative trails it.
///
/// Every leaf metric and every composite score lives on this scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// The market-baseline score.
    pub const ZERO: Self = Self(0.0);

    /// The minimum representable score.
    pub const MIN: Self = Self(SCORE_MIN);

    /// The maximum representable score.
    pub const MAX: Self = Self(SCORE_MAX);

    /// Creates a new Score, saturating at the scale bounds.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(SCORE_MIN, SCORE_MAX))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                SCORE_MIN,
                SCORE_MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this score beats the market baseline.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Returns true if this score trails the market baseline.
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 > 0.0 { "+" } else { "" };
        write!(f, "{}{:.1}", sign, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_in_range_values() {
        assert_eq!(Score::new(0.0).value(), 0.0);
        assert_eq!(Score::new(42.5).value(), 42.5);
        assert_eq!(Score::new(-100.0).value(), -100.0);
        assert_eq!(Score::new(100.0).value(), 100.0);
    }

    #[test]
    fn new_saturates_at_bounds() {
        assert_eq!(Score::new(150.0).value(), 100.0);
        assert_eq!(Score::new(-150.0).value(), -100.0);
    }

    #[test]
    fn new_is_idempotent() {
        for raw in [-500.0, -100.0, -3.7, 0.0, 55.5, 100.0, 250.0] {
            let once = Score::new(raw);
            let twice = Score::new(once.value());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Score::try_new(100.1).is_err());
        assert!(Score::try_new(-100.1).is_err());
        assert!(Score::try_new(99.9).is_ok());
    }

    #[test]
    fn sign_predicates_work() {
        assert!(Score::new(1.0).is_positive());
        assert!(Score::new(-1.0).is_negative());
        assert!(!Score::ZERO.is_positive());
        assert!(!Score::ZERO.is_negative());
    }

    #[test]
    fn displays_with_sign() {
        assert_eq!(format!("{}", Score::new(35.0)), "+35.0");
        assert_eq!(format!("{}", Score::new(-12.25)), "-12.2");
        assert_eq!(format!("{}", Score::ZERO), "0.0");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Score::new(12.5)).unwrap();
        assert_eq!(json, "12.5");
        let back: Score = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, Score::new(12.5));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Score::default(), Score::ZERO);
    }
}
