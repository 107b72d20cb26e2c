//! Scoring module - The four scoring levels.
//!
//! Leaf-first: aims (predictions) and shots (executions) are scored from
//! raw trade facts, targets aggregate their children, and careers
//! aggregate targets. Every scorer is a pure function of its input.

mod profit;
mod aim;
mod shot;
mod target;
mod career;

pub use profit::TimeNormalizedProfit;
pub use aim::{
    AimScore, AimScorer, AimScoringInput, AimWeights, CatalystOutcome, PriceReaction, AIM_WEIGHTS,
};
pub use shot::{ShotScore, ShotScorer, ShotScoringInput, ShotWeights, SHOT_WEIGHTS};
pub use target::{ShotFinancials, TargetScore, TargetScorer, TargetScoringInput};
pub use career::{
    CareerLevel, CareerScorer, ScoreTrend, TrendDirection, UserCareerScore, UserScoringInput,
};
