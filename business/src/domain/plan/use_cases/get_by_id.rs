use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::WeeklyPlan;
use crate::domain::shared::value_objects::UserId;

pub struct GetWeeklyPlanParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetWeeklyPlanUseCase: Send + Sync {
    async fn execute(&self, params: GetWeeklyPlanParams) -> Result<WeeklyPlan, PlanError>;
}
