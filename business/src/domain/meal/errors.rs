use serde::Serialize;

/// Why no meal could be composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfeasibleReason {
    /// No catalog item suits the slot once exclusions are applied.
    NoCandidates,
    /// Candidates exist but no combination reached the kcal window.
    NoConvergence,
}

impl std::fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibleReason::NoCandidates => write!(f, "no_candidates"),
            InfeasibleReason::NoConvergence => write!(f, "no_convergence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComposeError {
    #[error("meal.infeasible")]
    Infeasible { reason: InfeasibleReason },
}
