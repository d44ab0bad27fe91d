use async_trait::async_trait;

use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::PlanSummary;
use crate::domain::shared::value_objects::UserId;

pub struct ListWeeklyPlansParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ListWeeklyPlansUseCase: Send + Sync {
    async fn execute(&self, params: ListWeeklyPlansParams) -> Result<Vec<PlanSummary>, PlanError>;
}
