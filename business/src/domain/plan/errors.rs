use super::value_objects::PlanStatus;
use crate::domain::meal::errors::ComposeError;
use crate::domain::meal::value_objects::SlotType;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("plan.invalid_profile")]
    InvalidProfile(#[from] crate::domain::nutrition::errors::NutritionError),
    #[error("plan.invalid_request")]
    InvalidRequest(String),
    #[error("plan.build_failure")]
    BuildFailure {
        reason: ComposeError,
        day_index: u8,
        slot_type: SlotType,
    },
    #[error("plan.invalid_transition")]
    InvalidTransition { from: PlanStatus, to: PlanStatus },
    #[error("plan.incomplete")]
    Incomplete { day_index: Option<u8> },
    #[error("plan.not_found")]
    NotFound,
    #[error("plan.cancelled")]
    Cancelled,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
