use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::meal::value_objects::SlotType;
use crate::domain::plan::errors::PlanError;
use crate::domain::plan::model::WeeklyPlan;
use crate::domain::shared::value_objects::UserId;

pub struct BuildWeeklyPlanParams {
    pub user_id: UserId,
    pub week_start: NaiveDate,
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub days: Option<u8>,
    pub slots: Option<Vec<SlotType>>,
    pub variety_window: Option<usize>,
    pub excluded_tags: BTreeSet<String>,
}

#[async_trait]
pub trait BuildWeeklyPlanUseCase: Send + Sync {
    async fn execute(&self, params: BuildWeeklyPlanParams) -> Result<WeeklyPlan, PlanError>;
}
