use super::catalog_config::CatalogConfig;
use super::planner_config::PlannerConfig;

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub planner: PlannerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
            planner: PlannerConfig::from_env(),
        }
    }
}
