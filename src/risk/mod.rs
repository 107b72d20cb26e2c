//! Risk module - Plan quality, execution discipline, and risk assessment.
//!
//! Classifies how a trade was planned and how the plan was followed, then
//! folds both into a bounded risk score, grade, and score multiplier.

mod plan;
mod discipline;
mod assessor;

pub use plan::{PlanQuality, RiskPlanFlags};
pub use discipline::{DisciplineFlags, ExecutionDiscipline};
pub use assessor::{adaptability_bonus, assess_risk, AdaptabilityBonus, RiskAssessment};
