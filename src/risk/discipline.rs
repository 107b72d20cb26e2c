//! Execution discipline classification from trade-management flags.

use serde::{Deserialize, Serialize};

/// What actually happened while the position was open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineFlags {
    /// Price crossed the stop level.
    pub stop_triggered: bool,
    /// The triggered stop was not acted on.
    pub stop_ignored: bool,
    /// More capital was added while the position was losing.
    pub added_to_loser: bool,
    /// The position rode through a major drawdown.
    pub held_through_major_drawdown: bool,
    /// The stop was honored when it triggered.
    pub respected_stop: bool,
    /// Exited early with a documented reason.
    pub reasoned_early_exit: bool,
}

/// How faithfully the plan was executed. Classification precedence runs
/// worst first: neglect, then violation, then clean execution, with minor
/// delay as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionDiscipline {
    /// Ignored a triggered stop or added to a losing position.
    SevereNeglect,
    /// Held through a major drawdown.
    ClearViolation,
    /// Respected the stop, or exited early for a stated reason.
    FollowedCleanly,
    /// Nothing worse than sluggish execution.
    MinorDelay,
}

impl ExecutionDiscipline {
    /// Classifies execution from the observed flags.
    pub fn from_flags(flags: &DisciplineFlags) -> Self {
        if (flags.stop_triggered && flags.stop_ignored) || flags.added_to_loser {
            return ExecutionDiscipline::SevereNeglect;
        }
        if flags.held_through_major_drawdown {
            return ExecutionDiscipline::ClearViolation;
        }
        if flags.respected_stop || flags.reasoned_early_exit {
            return ExecutionDiscipline::FollowedCleanly;
        }
        ExecutionDiscipline::MinorDelay
    }

    /// Risk score adjustment contributed by execution.
    pub fn adjustment(&self) -> f64 {
        match self {
            ExecutionDiscipline::SevereNeglect => -45.0,
            ExecutionDiscipline::ClearViolation => -25.0,
            ExecutionDiscipline::FollowedCleanly => 10.0,
            ExecutionDiscipline::MinorDelay => 0.0,
        }
    }
}

impl std::fmt::Display for ExecutionDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExecutionDiscipline::SevereNeglect => "Severe Neglect",
            ExecutionDiscipline::ClearViolation => "Clear Violation",
            ExecutionDiscipline::FollowedCleanly => "Followed Cleanly",
            ExecutionDiscipline::MinorDelay => "Minor Delay",
        };
        write!(f, "{}", s)
    }
}
