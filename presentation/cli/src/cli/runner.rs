use std::path::Path;

use business::domain::plan::use_cases::get_by_id::GetWeeklyPlanParams;
use business::domain::plan::use_cases::list::ListWeeklyPlansParams;
use business::domain::shopping_list::use_cases::aggregate::AggregateShoppingListParams;

use crate::cli::dto::{BuildPlanRequestDto, PlanOutput};
use crate::cli::error::{ErrorResponse, ExitStatus, IntoCliError, error_response};
use crate::setup::dependency_injection::DependencyContainer;

pub type CliFailure = (ExitStatus, ErrorResponse);

pub async fn load_request(path: &Path) -> Result<BuildPlanRequestDto, CliFailure> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!("Cannot read request {}: {}", path.display(), e);
        (
            ExitStatus::Internal,
            error_response("RequestError", "request.unreadable"),
        )
    })?;
    serde_json::from_str(&content).map_err(|e| {
        tracing::error!("Invalid request {}: {}", path.display(), e);
        (
            ExitStatus::Validation,
            error_response("ValidationError", "request.invalid_format"),
        )
    })
}

/// Builds the plan, reads it back, aggregates its shopping list and lists the
/// user's plans.
pub async fn run(
    container: &DependencyContainer,
    request: BuildPlanRequestDto,
) -> Result<PlanOutput, CliFailure> {
    let built = container
        .build_plan_use_case
        .execute(request.into())
        .await
        .map_err(IntoCliError::into_cli_error)?;

    let plan = container
        .get_plan_use_case
        .execute(GetWeeklyPlanParams {
            id: built.id,
            user_id: built.user_id.clone(),
        })
        .await
        .map_err(IntoCliError::into_cli_error)?;

    let shopping_list = container
        .shopping_list_use_case
        .execute(AggregateShoppingListParams {
            plan_id: plan.id,
            user_id: plan.user_id.clone(),
        })
        .await
        .map_err(IntoCliError::into_cli_error)?;

    let history = container
        .list_plans_use_case
        .execute(ListWeeklyPlansParams {
            user_id: plan.user_id.clone(),
        })
        .await
        .map_err(IntoCliError::into_cli_error)?;

    Ok(PlanOutput {
        plan: (&plan).into(),
        shopping_list: shopping_list.into(),
        history: history.into_iter().map(Into::into).collect(),
    })
}
