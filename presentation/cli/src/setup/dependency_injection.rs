use std::sync::Arc;

use catalog::json_source::JsonCatalogSource;
use logger::TracingLogger;
use persistence::plan::repository::PlanRepositoryInMemory;

use business::application::plan::build::BuildWeeklyPlanUseCaseImpl;
use business::application::plan::get_by_id::GetWeeklyPlanUseCaseImpl;
use business::application::plan::list::ListWeeklyPlansUseCaseImpl;
use business::application::shopping_list::aggregate::AggregateShoppingListUseCaseImpl;
use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::food_catalog::FoodCatalog;
use business::domain::catalog::source::CatalogSource;
use business::domain::logger::Logger;
use business::domain::plan::builder::WeeklyPlanBuilder;
use business::domain::plan::settings::PlannerSettings;
use business::domain::plan::use_cases::build::BuildWeeklyPlanUseCase;
use business::domain::plan::use_cases::get_by_id::GetWeeklyPlanUseCase;
use business::domain::plan::use_cases::list::ListWeeklyPlansUseCase;
use business::domain::shopping_list::use_cases::aggregate::AggregateShoppingListUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub build_plan_use_case: Arc<dyn BuildWeeklyPlanUseCase>,
    pub get_plan_use_case: Arc<dyn GetWeeklyPlanUseCase>,
    pub list_plans_use_case: Arc<dyn ListWeeklyPlansUseCase>,
    pub shopping_list_use_case: Arc<dyn AggregateShoppingListUseCase>,
}

impl DependencyContainer {
    /// Loads the catalog from the configured source, then wires use cases.
    pub async fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let source = JsonCatalogSource::new(config.catalog.path.clone());
        let catalog = FoodCatalog::new(source.load().await?)?;
        TracingLogger.info(&format!(
            "Loaded {} catalog items from {}",
            catalog.len(),
            source.path().display()
        ));

        Ok(Self::with_catalog(
            Arc::new(catalog),
            config.planner.settings.clone(),
        ))
    }

    pub fn with_catalog(catalog: Arc<FoodCatalog>, settings: PlannerSettings) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let plan_repository = Arc::new(PlanRepositoryInMemory::new());
        let builder = Arc::new(WeeklyPlanBuilder::new(catalog, settings));

        // Plan use cases
        let build_plan_use_case = Arc::new(BuildWeeklyPlanUseCaseImpl {
            builder,
            repository: plan_repository.clone(),
            logger: logger.clone(),
        });
        let get_plan_use_case = Arc::new(GetWeeklyPlanUseCaseImpl {
            repository: plan_repository.clone(),
            logger: logger.clone(),
        });
        let list_plans_use_case = Arc::new(ListWeeklyPlansUseCaseImpl {
            repository: plan_repository.clone(),
            logger: logger.clone(),
        });

        // Shopping list use cases
        let shopping_list_use_case = Arc::new(AggregateShoppingListUseCaseImpl {
            repository: plan_repository,
            logger,
        });

        Self {
            build_plan_use_case,
            get_plan_use_case,
            list_plans_use_case,
            shopping_list_use_case,
        }
    }
}
