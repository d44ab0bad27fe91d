use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::PlanSummary;
use crate::domain::plan::repository::PlanRepository;
use crate::domain::plan::use_cases::list::{ListWeeklyPlansParams, ListWeeklyPlansUseCase};

pub struct ListWeeklyPlansUseCaseImpl {
    pub repository: Arc<dyn PlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListWeeklyPlansUseCase for ListWeeklyPlansUseCaseImpl {
    async fn execute(&self, params: ListWeeklyPlansParams) -> Result<Vec<PlanSummary>, PlanError> {
        self.logger
            .info(&format!("Listing weekly plans for user {}", params.user_id));

        let mut plans = self.repository.find_by_user(&params.user_id).await?;
        plans.sort_by(|a, b| {
            b.week_start
                .cmp(&a.week_start)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        let summaries: Vec<PlanSummary> = plans.iter().map(|plan| plan.summary()).collect();
        self.logger
            .info(&format!("Found {} weekly plans", summaries.len()));
        Ok(summaries)
    }
}
