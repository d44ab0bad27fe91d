use business::domain::catalog::errors::CatalogError;
use business::domain::meal::errors::ComposeError;
use business::domain::plan::errors::PlanError;
use business::domain::shopping_list::errors::ShoppingListError;

use crate::cli::error::{ErrorResponse, ExitStatus, IntoCliError, error_response};

impl IntoCliError for PlanError {
    fn into_cli_error(self) -> (ExitStatus, ErrorResponse) {
        let (status, name, message) = match &self {
            PlanError::InvalidProfile(inner) => {
                return (
                    ExitStatus::Validation,
                    error_response("ValidationError", &inner.to_string()),
                );
            }
            PlanError::InvalidRequest(_) => (
                ExitStatus::Validation,
                "ValidationError",
                "plan.invalid_request",
            ),
            PlanError::BuildFailure {
                reason: ComposeError::Infeasible { reason },
                day_index,
                slot_type,
            } => {
                let mut response = error_response("InfeasibleError", "plan.build_failure");
                response.details = Some(serde_json::json!({
                    "day_index": day_index,
                    "slot_type": slot_type,
                    "reason": reason,
                }));
                return (ExitStatus::Infeasible, response);
            }
            PlanError::InvalidTransition { .. } => (
                ExitStatus::Internal,
                "StateError",
                "plan.invalid_transition",
            ),
            PlanError::Incomplete { .. } => {
                (ExitStatus::Internal, "StateError", "plan.incomplete")
            }
            PlanError::NotFound => (ExitStatus::NotFound, "NotFound", "plan.not_found"),
            PlanError::Cancelled => (ExitStatus::Internal, "Cancelled", "plan.cancelled"),
            PlanError::Repository(_) => (
                ExitStatus::Internal,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, error_response(name, message))
    }
}

impl IntoCliError for ShoppingListError {
    fn into_cli_error(self) -> (ExitStatus, ErrorResponse) {
        let (status, name, message) = match &self {
            ShoppingListError::InvalidState { .. } => (
                ExitStatus::Internal,
                "StateError",
                "shopping_list.invalid_state",
            ),
            ShoppingListError::PlanNotFound => (
                ExitStatus::NotFound,
                "NotFound",
                "shopping_list.plan_not_found",
            ),
            ShoppingListError::Repository(_) => (
                ExitStatus::Internal,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, error_response(name, message))
    }
}

impl IntoCliError for CatalogError {
    fn into_cli_error(self) -> (ExitStatus, ErrorResponse) {
        let (status, name) = match &self {
            CatalogError::NotFound(_) => (ExitStatus::NotFound, "NotFound"),
            CatalogError::SourceUnavailable => (ExitStatus::Internal, "CatalogUnavailable"),
            CatalogError::DuplicatedId(_)
            | CatalogError::InvalidItem(_)
            | CatalogError::InvalidFormat => (ExitStatus::Validation, "CatalogError"),
        };

        (status, error_response(name, &self.to_string()))
    }
}
