use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::errors::PlanError;
use super::value_objects::PlanStatus;
use crate::domain::meal::model::MealSlot;
use crate::domain::nutrition::model::{NutrientTarget, NutrientTotals};
use crate::domain::shared::value_objects::UserId;

/// Meals of one day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day_index: u8,
    pub date: NaiveDate,
    pub meals: Vec<MealSlot>,
}

impl DayPlan {
    pub fn totals(&self) -> NutrientTotals {
        self.meals.iter().map(MealSlot::totals).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub id: Uuid,
    pub user_id: UserId,
    pub week_start: NaiveDate,
    pub target: NutrientTarget,
    days: Vec<DayPlan>,
    status: PlanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewWeeklyPlanProps {
    pub user_id: UserId,
    pub week_start: NaiveDate,
    pub target: NutrientTarget,
}

/// Dashboard view of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub id: Uuid,
    pub week_start: NaiveDate,
    pub target_kcal: f64,
    pub status: PlanStatus,
    pub days: usize,
    pub average_daily_kcal: f64,
    pub created_at: DateTime<Utc>,
}

impl WeeklyPlan {
    /// Starts an empty draft.
    pub fn new(props: NewWeeklyPlanProps) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            week_start: props.week_start,
            target: props.target,
            days: Vec::new(),
            status: PlanStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn target_kcal(&self) -> f64 {
        self.target.kcal()
    }

    pub fn status(&self) -> PlanStatus {
        self.status
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn meal_slots(&self) -> impl Iterator<Item = &MealSlot> {
        self.days.iter().flat_map(|day| day.meals.iter())
    }

    /// Appends the next day. Only drafts accept new days, and days must
    /// arrive in order.
    pub fn add_day(&mut self, day: DayPlan) -> Result<(), PlanError> {
        if self.status != PlanStatus::Draft {
            return Err(PlanError::InvalidTransition {
                from: self.status,
                to: PlanStatus::Draft,
            });
        }
        if usize::from(day.day_index) != self.days.len() {
            return Err(PlanError::InvalidRequest(format!(
                "expected day {}, got day {}",
                self.days.len(),
                day.day_index
            )));
        }
        self.days.push(day);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Draft → Finalized. Every day needs meals and every meal needs items.
    pub fn finalize(&mut self) -> Result<(), PlanError> {
        self.guard(PlanStatus::Finalized)?;

        if self.days.is_empty() {
            return Err(PlanError::Incomplete { day_index: None });
        }
        let expected_meals = self.days[0].meals.len();
        for day in &self.days {
            let populated = !day.meals.is_empty()
                && day.meals.len() == expected_meals
                && day.meals.iter().all(|m| !m.items.is_empty());
            if !populated {
                return Err(PlanError::Incomplete {
                    day_index: Some(day.day_index),
                });
            }
        }

        self.apply(PlanStatus::Finalized);
        Ok(())
    }

    /// Finalized → Archived, when a newer plan supersedes this one.
    pub fn archive(&mut self) -> Result<(), PlanError> {
        self.guard(PlanStatus::Archived)?;
        self.apply(PlanStatus::Archived);
        Ok(())
    }

    fn guard(&self, next: PlanStatus) -> Result<(), PlanError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(PlanError::InvalidTransition {
                from: self.status,
                to: next,
            })
        }
    }

    fn apply(&mut self, next: PlanStatus) {
        self.status = next;
        self.updated_at = Utc::now();
    }

    pub fn daily_totals(&self) -> Vec<NutrientTotals> {
        self.days.iter().map(DayPlan::totals).collect()
    }

    pub fn summary(&self) -> PlanSummary {
        let totals = self.daily_totals();
        let average_daily_kcal = if totals.is_empty() {
            0.0
        } else {
            totals.iter().map(|t| t.kcal).sum::<f64>() / totals.len() as f64
        };

        PlanSummary {
            id: self.id,
            week_start: self.week_start,
            target_kcal: self.target_kcal(),
            status: self.status,
            days: self.days.len(),
            average_daily_kcal,
            created_at: self.created_at,
        }
    }

    /// Content hash of the plan's meals, base64url encoded.
    ///
    /// Changes whenever any item or portion changes; status and timestamps
    /// do not take part.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.id.as_bytes());
        for slot in self.meal_slots() {
            hasher.update([slot.day_index]);
            hasher.update(slot.slot_type.to_string().as_bytes());
            for item in &slot.items {
                hasher.update(item.food.id.as_str().as_bytes());
                hasher.update(item.grams.to_bits().to_le_bytes());
            }
        }
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}
