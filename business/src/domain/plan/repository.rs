use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::WeeklyPlan;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Plans of other users are reported as `NotFound`.
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<WeeklyPlan, RepositoryError>;
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WeeklyPlan>, RepositoryError>;
    /// Inserts or replaces by id.
    async fn save(&self, plan: &WeeklyPlan) -> Result<(), RepositoryError>;
}
