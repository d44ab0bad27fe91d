use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::plan::repository::PlanRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::use_cases::aggregate::{
    AggregateShoppingListParams, AggregateShoppingListUseCase,
};

pub struct AggregateShoppingListUseCaseImpl {
    pub repository: Arc<dyn PlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AggregateShoppingListUseCase for AggregateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: AggregateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Aggregating shopping list for plan {}", params.plan_id));

        let plan = self
            .repository
            .get_by_id(params.plan_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::PlanNotFound,
                other => ShoppingListError::Repository(other),
            })?;

        let list = ShoppingList::from_plan(&plan).inspect_err(|e| {
            self.logger.warn(&format!(
                "Shopping list refused for plan {}: {:?}",
                plan.id, e
            ));
        })?;

        self.logger.info(&format!(
            "Shopping list for plan {} has {} entries",
            plan.id,
            list.entries.len()
        ));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample_catalog;
    use crate::domain::nutrition::model::NutrientTarget;
    use crate::domain::plan::builder::{BuildPlanRequest, WeeklyPlanBuilder};
    use crate::domain::plan::model::WeeklyPlan;
    use crate::domain::plan::settings::PlannerSettings;
    use crate::domain::plan::value_objects::PlanStatus;
    use crate::domain::shared::value_objects::UserId;
    use chrono::NaiveDate;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub PlanRepo {}

        #[async_trait]
        impl PlanRepository for PlanRepo {
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<WeeklyPlan, RepositoryError>;
            async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WeeklyPlan>, RepositoryError>;
            async fn save(&self, plan: &WeeklyPlan) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn plan() -> WeeklyPlan {
        let builder = WeeklyPlanBuilder::new(sample_catalog(), PlannerSettings::default());
        let request = BuildPlanRequest::new(
            UserId::new("user-1"),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            NutrientTarget::new(2000.0, 150.0, 200.0, 60.0).unwrap(),
        );
        builder.build(&request).unwrap()
    }

    #[tokio::test]
    async fn should_aggregate_every_item_of_the_plan() {
        let plan = plan();
        let plan_id = plan.id;
        let expected_grams: f64 = plan
            .meal_slots()
            .flat_map(|m| m.items.iter())
            .map(|i| i.grams)
            .sum();
        let fingerprint = plan.fingerprint();
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id, _| *id == plan_id)
            .returning(move |_, _| Ok(plan.clone()));

        let use_case = AggregateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(AggregateShoppingListParams {
                plan_id,
                user_id: UserId::new("user-1"),
            })
            .await
            .unwrap();

        assert_eq!(list.plan_id, plan_id);
        assert_eq!(list.plan_fingerprint, fingerprint);
        assert!((list.total_grams() - expected_grams).abs() < 1e-6);
        assert!(
            list.entries
                .windows(2)
                .all(|w| (w[0].category, &w[0].ingredient_name) < (w[1].category, &w[1].ingredient_name))
        );
    }

    #[tokio::test]
    async fn should_return_plan_not_found() {
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = AggregateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AggregateShoppingListParams {
                plan_id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::PlanNotFound
        ));
    }

    #[tokio::test]
    async fn should_refuse_archived_plan() {
        let mut archived = plan();
        archived.archive().unwrap();
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(archived.clone()));

        let use_case = AggregateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AggregateShoppingListParams {
                plan_id: Uuid::new_v4(),
                user_id: UserId::new("user-1"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::InvalidState {
                status: PlanStatus::Archived
            }
        ));
    }
}
