use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::plan::model::WeeklyPlan;
use business::domain::plan::repository::PlanRepository;
use business::domain::shared::value_objects::UserId;

/// Process-local plan store. Plans live as long as the process.
pub struct PlanRepositoryInMemory {
    plans: RwLock<HashMap<Uuid, WeeklyPlan>>,
}

impl PlanRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for PlanRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanRepository for PlanRepositoryInMemory {
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<WeeklyPlan, RepositoryError> {
        let plans = self
            .plans
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        plans
            .get(&id)
            .filter(|plan| &plan.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WeeklyPlan>, RepositoryError> {
        let plans = self
            .plans
            .read()
            .map_err(|_| RepositoryError::Persistence)?;

        let mut owned: Vec<WeeklyPlan> = plans
            .values()
            .filter(|plan| &plan.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.week_start
                .cmp(&a.week_start)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(owned)
    }

    async fn save(&self, plan: &WeeklyPlan) -> Result<(), RepositoryError> {
        let mut plans = self
            .plans
            .write()
            .map_err(|_| RepositoryError::Persistence)?;
        plans.insert(plan.id, plan.clone());
        Ok(())
    }
}
