use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Days, NaiveDate};

use super::errors::PlanError;
use super::model::{DayPlan, NewWeeklyPlanProps, WeeklyPlan};
use super::settings::{DEFAULT_DAYS, DEFAULT_VARIETY_WINDOW, MAX_DAYS, PlannerSettings};
use crate::domain::catalog::food_catalog::FoodCatalog;
use crate::domain::catalog::value_objects::FoodId;
use crate::domain::meal::composer::{ComposeRequest, MealComposer};
use crate::domain::meal::value_objects::SlotType;
use crate::domain::nutrition::model::NutrientTarget;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct BuildPlanRequest {
    pub user_id: UserId,
    pub week_start: NaiveDate,
    pub profile: NutrientTarget,
    pub days: u8,
    pub slots: Vec<SlotType>,
    /// Previous days whose dominant item a slot type may not repeat.
    /// Zero disables the check.
    pub variety_window: usize,
    pub excluded_tags: BTreeSet<String>,
}

impl BuildPlanRequest {
    /// A full week of every slot type with the default variety window.
    pub fn new(user_id: UserId, week_start: NaiveDate, profile: NutrientTarget) -> Self {
        Self {
            user_id,
            week_start,
            profile,
            days: DEFAULT_DAYS,
            slots: SlotType::ALL.to_vec(),
            variety_window: DEFAULT_VARIETY_WINDOW,
            excluded_tags: BTreeSet::new(),
        }
    }
}

/// Builds finalized weekly plans, one slot at a time.
///
/// Holds no mutable state; one builder can serve concurrent builds.
pub struct WeeklyPlanBuilder {
    catalog: Arc<FoodCatalog>,
    settings: PlannerSettings,
}

impl WeeklyPlanBuilder {
    pub fn new(catalog: Arc<FoodCatalog>, settings: PlannerSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn build(&self, request: &BuildPlanRequest) -> Result<WeeklyPlan, PlanError> {
        self.build_cancellable(request, &AtomicBool::new(false))
    }

    /// Same as [`build`](Self::build), checking `cancel` before every slot.
    pub fn build_cancellable(
        &self,
        request: &BuildPlanRequest,
        cancel: &AtomicBool,
    ) -> Result<WeeklyPlan, PlanError> {
        self.build_until(request, || cancel.load(Ordering::Relaxed))
    }

    /// Builds unless `is_cancelled` returns true at a slot boundary.
    pub fn build_until(
        &self,
        request: &BuildPlanRequest,
        is_cancelled: impl Fn() -> bool,
    ) -> Result<WeeklyPlan, PlanError> {
        validate(request)?;

        let slot_targets = self
            .settings
            .slot_weights
            .split(request.profile.kcal(), &request.slots)
            .ok_or_else(|| PlanError::InvalidRequest("slot without weight".to_string()))?;
        let macro_ratios = request.profile.macro_ratios();
        let excluded_tags: BTreeSet<String> = request
            .excluded_tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        let composer = MealComposer::new(&self.catalog, self.settings.composer);
        let mut plan = WeeklyPlan::new(NewWeeklyPlanProps {
            user_id: request.user_id.clone(),
            week_start: request.week_start,
            target: request.profile,
        });
        // Dominant item per slot type, one entry per day built so far.
        let mut history: BTreeMap<SlotType, Vec<FoodId>> = BTreeMap::new();

        for day_index in 0..request.days {
            let date = request
                .week_start
                .checked_add_days(Days::new(u64::from(day_index)))
                .ok_or_else(|| PlanError::InvalidRequest("date out of range".to_string()))?;
            let mut meals = Vec::with_capacity(slot_targets.len());

            for (slot_type, target_kcal) in &slot_targets {
                if is_cancelled() {
                    return Err(PlanError::Cancelled);
                }

                let previous = history.entry(*slot_type).or_default();
                let excluded_dominants: BTreeSet<FoodId> = previous
                    .iter()
                    .rev()
                    .take(request.variety_window)
                    .cloned()
                    .collect();

                let meal = composer
                    .compose(&ComposeRequest {
                        day_index,
                        slot_type: *slot_type,
                        target_kcal: *target_kcal,
                        macro_ratios,
                        excluded_tags: &excluded_tags,
                        excluded_dominants: &excluded_dominants,
                    })
                    .map_err(|reason| PlanError::BuildFailure {
                        reason,
                        day_index,
                        slot_type: *slot_type,
                    })?;

                if let Some(dominant) = meal.dominant() {
                    previous.push(dominant.id.clone());
                }
                meals.push(meal);
            }

            plan.add_day(DayPlan {
                day_index,
                date,
                meals,
            })?;
        }

        plan.finalize()?;
        Ok(plan)
    }
}

fn validate(request: &BuildPlanRequest) -> Result<(), PlanError> {
    if request.profile.kcal() <= 0.0 {
        return Err(PlanError::InvalidRequest(
            "kcal target must be positive".to_string(),
        ));
    }
    if !(1..=MAX_DAYS).contains(&request.days) {
        return Err(PlanError::InvalidRequest(format!(
            "days must be between 1 and {}",
            MAX_DAYS
        )));
    }
    if request.slots.is_empty() {
        return Err(PlanError::InvalidRequest(
            "at least one slot is required".to_string(),
        ));
    }
    let unique: BTreeSet<&SlotType> = request.slots.iter().collect();
    if unique.len() != request.slots.len() {
        return Err(PlanError::InvalidRequest(
            "duplicate slot types".to_string(),
        ));
    }
    Ok(())
}
