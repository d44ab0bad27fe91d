use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::WeeklyPlan;
use crate::domain::plan::repository::PlanRepository;
use crate::domain::plan::use_cases::get_by_id::{GetWeeklyPlanParams, GetWeeklyPlanUseCase};

pub struct GetWeeklyPlanUseCaseImpl {
    pub repository: Arc<dyn PlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWeeklyPlanUseCase for GetWeeklyPlanUseCaseImpl {
    async fn execute(&self, params: GetWeeklyPlanParams) -> Result<WeeklyPlan, PlanError> {
        self.logger
            .info(&format!("Fetching weekly plan by id: {}", params.id));

        let plan = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PlanError::NotFound,
                other => PlanError::Repository(other),
            })?;

        Ok(plan)
    }
}
