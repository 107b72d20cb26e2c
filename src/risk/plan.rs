//! Plan quality classification from risk-control flags.

use serde::{Deserialize, Serialize};

/// Risk controls declared on a trade plan before entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPlanFlags {
    /// A stop loss level was set.
    pub has_stop_loss: bool,
    /// The stop sits at a sane distance for the position.
    pub stop_is_reasonable: bool,
    /// Position size was capped relative to the account.
    pub has_position_cap: bool,
    /// A concrete exit rule (price or date) was written down.
    pub has_exit_rule: bool,
    /// The plan names what would invalidate the thesis.
    pub has_thesis_invalidation: bool,
}

impl RiskPlanFlags {
    /// Counts the declared controls (the reasonableness of the stop is a
    /// qualifier, not a control of its own).
    fn control_count(&self) -> u8 {
        [
            self.has_stop_loss,
            self.has_position_cap,
            self.has_exit_rule,
            self.has_thesis_invalidation,
        ]
        .iter()
        .filter(|flag| **flag)
        .count() as u8
    }
}

/// How complete the risk plan was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanQuality {
    /// All four controls in place with a reasonable stop.
    Structured,
    /// A stop plus at least one other control.
    Reasonable,
    /// Any single control.
    VeryLiberal,
    /// No controls at all.
    None,
}

impl PlanQuality {
    /// Classifies a plan from its declared controls.
    pub fn from_flags(flags: &RiskPlanFlags) -> Self {
        let controls = flags.control_count();
        if controls == 4 && flags.stop_is_reasonable {
            return PlanQuality::Structured;
        }
        if flags.has_stop_loss && controls >= 2 {
            return PlanQuality::Reasonable;
        }
        if controls >= 1 {
            return PlanQuality::VeryLiberal;
        }
        PlanQuality::None
    }

    /// Base risk score contributed by the plan.
    pub fn base_score(&self) -> f64 {
        match self {
            PlanQuality::Structured => 90.0,
            PlanQuality::Reasonable => 70.0,
            PlanQuality::VeryLiberal => 45.0,
            PlanQuality::None => 20.0,
        }
    }
}

impl std::fmt::Display for PlanQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlanQuality::Structured => "Structured",
            PlanQuality::Reasonable => "Reasonable",
            PlanQuality::VeryLiberal => "Very Liberal",
            PlanQuality::None => "None",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_plan() -> RiskPlanFlags {
        RiskPlanFlags {
            has_stop_loss: true,
            stop_is_reasonable: true,
            has_position_cap: true,
            has_exit_rule: true,
            has_thesis_invalidation: true,
        }
    }

    #[test]
    fn all_controls_with_reasonable_stop_is_structured() {
        assert_eq!(PlanQuality::from_flags(&full_plan()), PlanQuality::Structured);
    }

    #[test]
    fn unreasonable_stop_downgrades_from_structured() {
        let flags = RiskPlanFlags {
            stop_is_reasonable: false,
            ..full_plan()
        };
        assert_eq!(PlanQuality::from_flags(&flags), PlanQuality::Reasonable);
    }

    #[test]
    fn stop_plus_one_control_is_reasonable() {
        let flags = RiskPlanFlags {
            has_stop_loss: true,
            has_position_cap: true,
            ..Default::default()
        };
        assert_eq!(PlanQuality::from_flags(&flags), PlanQuality::Reasonable);
    }

    #[test]
    fn lone_stop_is_very_liberal() {
        let flags = RiskPlanFlags {
            has_stop_loss: true,
            ..Default::default()
        };
        assert_eq!(PlanQuality::from_flags(&flags), PlanQuality::VeryLiberal);
    }

    #[test]
    fn controls_without_a_stop_are_very_liberal() {
        let flags = RiskPlanFlags {
            has_position_cap: true,
            has_exit_rule: true,
            has_thesis_invalidation: true,
            ..Default::default()
        };
        assert_eq!(PlanQuality::from_flags(&flags), PlanQuality::VeryLiberal);
    }

    #[test]
    fn no_controls_is_none() {
        assert_eq!(PlanQuality::from_flags(&RiskPlanFlags::default()), PlanQuality::None);
    }

    #[test]
    fn reasonable_stop_alone_is_not_a_control() {
        let flags = RiskPlanFlags {
            stop_is_reasonable: true,
            ..Default::default()
        };
        assert_eq!(PlanQuality::from_flags(&flags), PlanQuality::None);
    }

    #[test]
    fn base_scores_order_by_quality() {
        assert!(PlanQuality::Structured.base_score() > PlanQuality::Reasonable.base_score());
        assert!(PlanQuality::Reasonable.base_score() > PlanQuality::VeryLiberal.base_score());
        assert!(PlanQuality::VeryLiberal.base_score() > PlanQuality::None.base_score());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PlanQuality::VeryLiberal).unwrap(),
            "\"very_liberal\""
        );
    }
}
