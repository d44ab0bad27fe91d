use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use business::domain::catalog::value_objects::FoodCategory;
use business::domain::meal::model::{MealItem, MealSlot};
use business::domain::meal::value_objects::SlotType;
use business::domain::nutrition::model::NutrientTotals;
use business::domain::plan::model::{DayPlan, PlanSummary, WeeklyPlan};
use business::domain::plan::use_cases::build::BuildWeeklyPlanParams;
use business::domain::plan::value_objects::PlanStatus;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::{ShoppingList, ShoppingListEntry};

// --- Request ---

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildPlanRequestDto {
    pub user_id: String,
    pub week_start: NaiveDate,
    pub profile: ProfileRequest,
    #[serde(default)]
    pub days: Option<u8>,
    #[serde(default)]
    pub slots: Option<Vec<SlotType>>,
    #[serde(default)]
    pub variety_window: Option<usize>,
    #[serde(default)]
    pub excluded_tags: Vec<String>,
}

impl From<BuildPlanRequestDto> for BuildWeeklyPlanParams {
    fn from(dto: BuildPlanRequestDto) -> Self {
        Self {
            user_id: UserId::new(dto.user_id),
            week_start: dto.week_start,
            kcal: dto.profile.kcal,
            protein_g: dto.profile.protein_g,
            carbs_g: dto.profile.carbs_g,
            fat_g: dto.profile.fat_g,
            days: dto.days,
            slots: dto.slots,
            variety_window: dto.variety_window,
            excluded_tags: dto.excluded_tags.into_iter().collect::<BTreeSet<_>>(),
        }
    }
}

// --- Plan ---

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsResponse {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl From<NutrientTotals> for TotalsResponse {
    fn from(totals: NutrientTotals) -> Self {
        Self {
            kcal: round1(totals.kcal),
            protein_g: round1(totals.protein_g),
            carbs_g: round1(totals.carbs_g),
            fat_g: round1(totals.fat_g),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MealItemResponse {
    pub food_id: String,
    pub name: String,
    pub grams: f64,
    pub kcal: f64,
}

impl From<&MealItem> for MealItemResponse {
    fn from(item: &MealItem) -> Self {
        Self {
            food_id: item.food.id.to_string(),
            name: item.food.name.clone(),
            grams: item.grams,
            kcal: round1(item.nutrients().kcal),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MealResponse {
    pub slot_type: SlotType,
    pub totals: TotalsResponse,
    pub items: Vec<MealItemResponse>,
}

impl From<&MealSlot> for MealResponse {
    fn from(meal: &MealSlot) -> Self {
        Self {
            slot_type: meal.slot_type,
            totals: meal.totals().into(),
            items: meal.items.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayResponse {
    pub day_index: u8,
    pub date: NaiveDate,
    pub totals: TotalsResponse,
    pub meals: Vec<MealResponse>,
}

impl From<&DayPlan> for DayResponse {
    fn from(day: &DayPlan) -> Self {
        Self {
            day_index: day.day_index,
            date: day.date,
            totals: day.totals().into(),
            meals: day.meals.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPlanResponse {
    pub id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub status: PlanStatus,
    pub target_kcal: f64,
    pub days: Vec<DayResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WeeklyPlan> for WeeklyPlanResponse {
    fn from(plan: &WeeklyPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            user_id: plan.user_id.to_string(),
            week_start: plan.week_start,
            status: plan.status(),
            target_kcal: plan.target_kcal(),
            days: plan.days().iter().map(Into::into).collect(),
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummaryResponse {
    pub id: String,
    pub week_start: NaiveDate,
    pub status: PlanStatus,
    pub days: usize,
    pub target_kcal: f64,
    pub average_daily_kcal: f64,
}

impl From<PlanSummary> for PlanSummaryResponse {
    fn from(summary: PlanSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            week_start: summary.week_start,
            status: summary.status,
            days: summary.days,
            target_kcal: summary.target_kcal,
            average_daily_kcal: round1(summary.average_daily_kcal),
        }
    }
}

// --- Shopping list ---

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListEntryResponse {
    pub ingredient_name: String,
    pub total_quantity_grams: f64,
    pub category: FoodCategory,
    pub source_meal_slots: Vec<String>,
}

impl From<ShoppingListEntry> for ShoppingListEntryResponse {
    fn from(entry: ShoppingListEntry) -> Self {
        Self {
            ingredient_name: entry.ingredient_name,
            total_quantity_grams: round1(entry.total_quantity_grams),
            category: entry.category,
            source_meal_slots: entry
                .source_meal_slots
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListResponse {
    pub plan_id: String,
    pub plan_fingerprint: String,
    pub entries: Vec<ShoppingListEntryResponse>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            plan_id: list.plan_id.to_string(),
            plan_fingerprint: list.plan_fingerprint,
            entries: list.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything printed on success.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub plan: WeeklyPlanResponse,
    pub shopping_list: ShoppingListResponse,
    pub history: Vec<PlanSummaryResponse>,
}
