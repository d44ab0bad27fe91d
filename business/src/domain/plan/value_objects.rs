use serde::{Deserialize, Serialize};

/// Lifecycle of a weekly plan.
///
/// `Draft` → `Finalized` once every slot is populated; `Finalized` →
/// `Archived` when a newer plan supersedes it. No other transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    Finalized,
    Archived,
}

impl PlanStatus {
    pub fn can_transition_to(&self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (PlanStatus::Draft, PlanStatus::Finalized)
                | (PlanStatus::Finalized, PlanStatus::Archived)
        )
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Draft => write!(f, "draft"),
            PlanStatus::Finalized => write!(f, "finalized"),
            PlanStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PlanStatus::Draft),
            "finalized" => Ok(PlanStatus::Finalized),
            "archived" => Ok(PlanStatus::Archived),
            _ => Err(format!("Invalid plan status: {}", s)),
        }
    }
}
