use crate::domain::plan::value_objects::PlanStatus;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.invalid_state")]
    InvalidState { status: PlanStatus },
    #[error("shopping_list.plan_not_found")]
    PlanNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
