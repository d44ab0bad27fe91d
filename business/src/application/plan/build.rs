use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::nutrition::model::NutrientTarget;
use crate::domain::plan::builder::{BuildPlanRequest, WeeklyPlanBuilder};
use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::WeeklyPlan;
use crate::domain::plan::repository::PlanRepository;
use crate::domain::plan::use_cases::build::{BuildWeeklyPlanParams, BuildWeeklyPlanUseCase};
use crate::domain::plan::value_objects::PlanStatus;

pub struct BuildWeeklyPlanUseCaseImpl {
    pub builder: Arc<WeeklyPlanBuilder>,
    pub repository: Arc<dyn PlanRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BuildWeeklyPlanUseCase for BuildWeeklyPlanUseCaseImpl {
    async fn execute(&self, params: BuildWeeklyPlanParams) -> Result<WeeklyPlan, PlanError> {
        self.logger.info(&format!(
            "Building weekly plan for user {} starting {}",
            params.user_id, params.week_start
        ));

        let profile =
            NutrientTarget::new(params.kcal, params.protein_g, params.carbs_g, params.fat_g)?;

        let mut request = BuildPlanRequest::new(params.user_id, params.week_start, profile);
        request.variety_window = params
            .variety_window
            .unwrap_or(self.builder.settings().variety_window);
        request.excluded_tags = params.excluded_tags;
        if let Some(days) = params.days {
            request.days = days;
        }
        if let Some(slots) = params.slots {
            request.slots = slots;
        }

        let plan = self.builder.build(&request).inspect_err(|e| {
            self.logger
                .warn(&format!("Weekly plan build failed: {:?}", e));
        })?;

        let superseded: Vec<WeeklyPlan> = self
            .repository
            .find_by_user(&plan.user_id)
            .await?
            .into_iter()
            .filter(|p| {
                p.id != plan.id
                    && p.week_start == plan.week_start
                    && p.status() == PlanStatus::Finalized
            })
            .collect();

        // The previous plan stays finalized unless the new one is stored.
        self.repository.save(&plan).await?;

        for mut previous in superseded {
            previous.archive()?;
            self.repository.save(&previous).await?;
            self.logger.info(&format!(
                "Archived plan {} superseded by {}",
                previous.id, plan.id
            ));
        }

        self.logger.info(&format!(
            "Weekly plan {} built with {} days",
            plan.id,
            plan.days().len()
        ));
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::fixtures::sample_catalog;
    use crate::domain::plan::settings::PlannerSettings;
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

    fn builder() -> Arc<WeeklyPlanBuilder> {
        Arc::new(WeeklyPlanBuilder::new(
            sample_catalog(),
            PlannerSettings::default(),
        ))
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn params() -> BuildWeeklyPlanParams {
        BuildWeeklyPlanParams {
            user_id: UserId::new("user-1"),
            week_start: monday(),
            kcal: 2000.0,
            protein_g: 150.0,
            carbs_g: 200.0,
            fat_g: 60.0,
            days: Some(2),
            slots: None,
            variety_window: None,
            excluded_tags: BTreeSet::new(),
        }
    }

    fn finalized_plan(week_start: NaiveDate) -> WeeklyPlan {
        let mut request = BuildPlanRequest::new(
            UserId::new("user-1"),
            week_start,
            NutrientTarget::new(2000.0, 150.0, 200.0, 60.0).unwrap(),
        );
        request.days = 1;
        builder().build(&request).unwrap()
    }

    #[tokio::test]
    async fn should_build_and_save_finalized_plan() {
        let mut mock_repo = MockPlanRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(vec![]));
        mock_repo
            .expect_save()
            .withf(|plan| plan.status() == PlanStatus::Finalized && plan.days().len() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
        let plan = result.unwrap();
        assert_eq!(plan.user_id, UserId::new("user-1"));
        assert_eq!(plan.week_start, monday());
    }

    #[tokio::test]
    async fn should_archive_finalized_plan_of_same_week() {
        let same_week = finalized_plan(monday());
        let other_week = finalized_plan(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
        let same_week_id = same_week.id;
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(move |_| Ok(vec![same_week.clone(), other_week.clone()]));
        mock_repo
            .expect_save()
            .withf(move |plan| plan.id == same_week_id && plan.status() == PlanStatus::Archived)
            .times(1)
            .returning(|_| Ok(()));
        mock_repo
            .expect_save()
            .withf(move |plan| plan.id != same_week_id && plan.status() == PlanStatus::Finalized)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_keep_previous_plan_finalized_when_saving_new_plan_fails() {
        let same_week = finalized_plan(monday());
        let same_week_id = same_week.id;
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(move |_| Ok(vec![same_week.clone()]));
        mock_repo
            .expect_save()
            .withf(move |plan| plan.id == same_week_id)
            .times(0);
        mock_repo
            .expect_save()
            .withf(move |plan| plan.id != same_week_id)
            .times(1)
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            PlanError::Repository(RepositoryError::Persistence)
        ));
    }

    #[tokio::test]
    async fn should_reject_inconsistent_profile() {
        let mock_repo = MockPlanRepo::new();
        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };
        let mut params = params();
        params.protein_g = 10.0;

        let result = use_case.execute(params).await;

        assert!(matches!(result.unwrap_err(), PlanError::InvalidProfile(_)));
    }

    #[tokio::test]
    async fn should_not_save_when_build_fails() {
        let mock_repo = MockPlanRepo::new();
        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };
        let mut params = params();
        params.excluded_tags = BTreeSet::from([
            "vegan".to_string(),
            "dairy".to_string(),
            "nuts".to_string(),
        ]);

        let result = use_case.execute(params).await;

        assert!(matches!(
            result.unwrap_err(),
            PlanError::BuildFailure { day_index: 0, .. }
        ));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut mock_repo = MockPlanRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = BuildWeeklyPlanUseCaseImpl {
            builder: builder(),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            PlanError::Repository(RepositoryError::Persistence)
        ));
    }
}
