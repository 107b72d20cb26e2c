//! Risk assessment - plan and discipline folded into a grade and multiplier.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grading::{risk_score_to_grade, RiskGrade, RISK_SCORE_MAX, RISK_SCORE_MIN};

use super::{DisciplineFlags, ExecutionDiscipline, PlanQuality, RiskPlanFlags};

/// Bound for the adaptability bonus after scaling.
const ADAPTABILITY_BONUS_MAX: f64 = 5.0;

/// Raw adaptability scores are divided by this before clamping.
const ADAPTABILITY_DIVISOR: f64 = 10.0;

/// Combined risk verdict for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Bounded risk score on [0, 100].
    pub score: f64,
    /// Plan classification that produced the base score.
    pub plan_quality: PlanQuality,
    /// Execution classification that produced the adjustment.
    pub discipline: ExecutionDiscipline,
    /// Grade derived from the score.
    pub grade: RiskGrade,
    /// Multiplier applied to the shot's base score.
    pub multiplier: f64,
}

/// Assesses risk discipline from the plan and execution flags.
///
/// The plan quality sets a base score, execution discipline adjusts it,
/// and the clamped result maps to a grade and its fixed multiplier.
pub fn assess_risk(plan: &RiskPlanFlags, discipline: &DisciplineFlags) -> RiskAssessment {
    let plan_quality = PlanQuality::from_flags(plan);
    let execution = ExecutionDiscipline::from_flags(discipline);

    let raw = plan_quality.base_score() + execution.adjustment();
    let score = raw.clamp(RISK_SCORE_MIN, RISK_SCORE_MAX);
    let grade = risk_score_to_grade(score);

    trace!(
        plan = %plan_quality,
        discipline = %execution,
        score,
        grade = %grade,
        "assessed risk"
    );

    RiskAssessment {
        score,
        plan_quality,
        discipline: execution,
        grade,
        multiplier: grade.multiplier(),
    }
}

/// Adaptability bonus applied on top of the risk-adjusted shot score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptabilityBonus {
    /// Bonus points, clamped to [-5, +5]. Zero when locked.
    pub bonus: f64,
    /// True when the caller's tier does not unlock the bonus.
    pub locked: bool,
}

/// Computes the Pro-only adaptability bonus.
///
/// Non-Pro callers always get a locked zero bonus regardless of the raw
/// score. Pro callers get the raw score scaled down by 10 and clamped to
/// [-5, +5]; a missing raw score is simply no bonus.
pub fn adaptability_bonus(raw: Option<f64>, is_pro: bool) -> AdaptabilityBonus {
    if !is_pro {
        return AdaptabilityBonus {
            bonus: 0.0,
            locked: true,
        };
    }
    let bonus = raw
        .map(|value| (value / ADAPTABILITY_DIVISOR).clamp(-ADAPTABILITY_BONUS_MAX, ADAPTABILITY_BONUS_MAX))
        .unwrap_or(0.0);
    AdaptabilityBonus {
        bonus,
        locked: false,
    }
}
