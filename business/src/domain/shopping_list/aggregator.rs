use std::collections::{BTreeMap, BTreeSet};

use super::errors::ShoppingListError;
use super::model::{ShoppingList, ShoppingListEntry};
use super::normalize::normalize_ingredient_name;
use crate::domain::plan::model::WeeklyPlan;
use crate::domain::plan::value_objects::PlanStatus;

/// Groups every item of a finalized plan by normalized ingredient name.
///
/// Grams are summed per group and the category is taken from the first
/// item seen in plan order. Entries come out ordered by category, then name.
pub fn aggregate(plan: &WeeklyPlan) -> Result<Vec<ShoppingListEntry>, ShoppingListError> {
    if plan.status() != PlanStatus::Finalized {
        return Err(ShoppingListError::InvalidState {
            status: plan.status(),
        });
    }

    let mut groups: BTreeMap<String, ShoppingListEntry> = BTreeMap::new();
    for slot in plan.meal_slots() {
        for item in &slot.items {
            let mut key = normalize_ingredient_name(&item.food.name);
            if key.is_empty() {
                key = item.food.id.to_string();
            }
            let entry = groups
                .entry(key)
                .or_insert_with_key(|key| ShoppingListEntry {
                    ingredient_name: key.clone(),
                    total_quantity_grams: 0.0,
                    category: item.food.category,
                    source_meal_slots: BTreeSet::new(),
                });
            entry.total_quantity_grams += item.grams;
            entry.source_meal_slots.insert(slot.slot_ref());
        }
    }

    let mut entries: Vec<ShoppingListEntry> = groups.into_values().collect();
    entries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.ingredient_name.cmp(&b.ingredient_name))
    });
    Ok(entries)
}

impl ShoppingList {
    pub fn from_plan(plan: &WeeklyPlan) -> Result<Self, ShoppingListError> {
        Ok(Self {
            plan_id: plan.id,
            plan_fingerprint: plan.fingerprint(),
            entries: aggregate(plan)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::domain::catalog::model::FoodItem;
    use crate::domain::catalog::value_objects::FoodCategory;
    use crate::domain::fixtures::food;
    use crate::domain::meal::model::{MealItem, MealSlot};
    use crate::domain::meal::value_objects::{SlotRef, SlotType};
    use crate::domain::nutrition::model::NutrientTarget;
    use crate::domain::plan::model::{DayPlan, NewWeeklyPlanProps};
    use crate::domain::shared::value_objects::UserId;

    fn meal(day_index: u8, slot_type: SlotType, items: &[(&Arc<FoodItem>, f64)]) -> MealSlot {
        MealSlot {
            day_index,
            slot_type,
            items: items
                .iter()
                .map(|(food, grams)| MealItem {
                    food: Arc::clone(food),
                    grams: *grams,
                })
                .collect(),
        }
    }

    fn plan(days: Vec<Vec<MealSlot>>) -> WeeklyPlan {
        let week_start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut plan = WeeklyPlan::new(NewWeeklyPlanProps {
            user_id: UserId::new("user-1"),
            week_start,
            target: NutrientTarget::new(2000.0, 150.0, 200.0, 60.0).unwrap(),
        });
        for (index, meals) in days.into_iter().enumerate() {
            plan.add_day(DayPlan {
                day_index: index as u8,
                date: week_start + chrono::Days::new(index as u64),
                meals,
            })
            .unwrap();
        }
        plan
    }

    fn finalized(days: Vec<Vec<MealSlot>>) -> WeeklyPlan {
        let mut plan = plan(days);
        plan.finalize().unwrap();
        plan
    }

    #[test]
    fn should_sum_same_ingredient_across_slots() {
        let chicken = food("chicken-breast", "Chicken breast", FoodCategory::Meat);
        let rice = food("rice", "Rice", FoodCategory::Grains);
        let plan = finalized(vec![
            vec![
                meal(0, SlotType::Lunch, &[(&chicken, 100.0)]),
                meal(0, SlotType::Dinner, &[(&chicken, 150.0)]),
            ],
            vec![
                meal(1, SlotType::Lunch, &[(&rice, 200.0)]),
                meal(1, SlotType::Dinner, &[(&chicken, 150.0)]),
            ],
        ]);

        let entries = aggregate(&plan).unwrap();

        let chicken_entry = entries
            .iter()
            .find(|e| e.ingredient_name == "chicken breast")
            .unwrap();
        assert_eq!(chicken_entry.total_quantity_grams, 400.0);
        assert_eq!(chicken_entry.category, FoodCategory::Meat);
        assert_eq!(
            chicken_entry.source_meal_slots,
            BTreeSet::from([
                SlotRef {
                    day_index: 0,
                    slot_type: SlotType::Lunch
                },
                SlotRef {
                    day_index: 0,
                    slot_type: SlotType::Dinner
                },
                SlotRef {
                    day_index: 1,
                    slot_type: SlotType::Dinner
                },
            ])
        );
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn should_merge_names_that_normalize_alike() {
        let eggs = food("eggs", "Eggs", FoodCategory::Eggs);
        let egg = food("free-range-egg", "Egg", FoodCategory::Other);
        let plan = finalized(vec![vec![meal(
            0,
            SlotType::Breakfast,
            &[(&eggs, 100.0), (&egg, 50.0)],
        )]]);

        let entries = aggregate(&plan).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ingredient_name, "egg");
        assert_eq!(entries[0].total_quantity_grams, 150.0);
        assert_eq!(entries[0].category, FoodCategory::Eggs);
    }

    #[test]
    fn should_order_by_category_then_name() {
        let rice = food("rice", "Rice", FoodCategory::Grains);
        let chicken = food("chicken-breast", "Chicken breast", FoodCategory::Meat);
        let spinach = food("spinach", "Spinach", FoodCategory::Produce);
        let broccoli = food("broccoli", "Broccoli", FoodCategory::Produce);
        let plan = finalized(vec![vec![meal(
            0,
            SlotType::Dinner,
            &[(&rice, 150.0), (&spinach, 50.0), (&chicken, 150.0), (&broccoli, 100.0)],
        )]]);

        let names: Vec<String> = aggregate(&plan)
            .unwrap()
            .into_iter()
            .map(|e| e.ingredient_name)
            .collect();

        assert_eq!(names, vec!["broccoli", "spinach", "chicken breast", "rice"]);
    }

    #[test]
    fn should_be_idempotent() {
        let rice = food("rice", "Rice", FoodCategory::Grains);
        let chicken = food("chicken-breast", "Chicken breast", FoodCategory::Meat);
        let plan = finalized(vec![
            vec![meal(0, SlotType::Lunch, &[(&rice, 150.0), (&chicken, 100.0)])],
            vec![meal(1, SlotType::Lunch, &[(&rice, 200.0)])],
        ]);

        let first = ShoppingList::from_plan(&plan).unwrap();
        let second = ShoppingList::from_plan(&plan).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.plan_fingerprint, plan.fingerprint());
        assert_eq!(first.total_grams(), 450.0);
        assert_eq!(first.entries_in(FoodCategory::Grains).count(), 1);
    }

    #[test]
    fn should_reject_plans_that_are_not_finalized() {
        let rice = food("rice", "Rice", FoodCategory::Grains);
        let draft = plan(vec![vec![meal(0, SlotType::Lunch, &[(&rice, 150.0)])]]);
        let mut archived = draft.clone();
        archived.finalize().unwrap();
        archived.archive().unwrap();

        assert!(matches!(
            aggregate(&draft).unwrap_err(),
            ShoppingListError::InvalidState {
                status: PlanStatus::Draft
            }
        ));
        assert!(matches!(
            aggregate(&archived).unwrap_err(),
            ShoppingListError::InvalidState {
                status: PlanStatus::Archived
            }
        ));
    }

    proptest! {
        #[test]
        fn should_preserve_total_grams(portions in prop::collection::vec((0usize..3, 1u32..500), 1..12)) {
            let foods = [
                food("apple", "Apples", FoodCategory::Produce),
                food("apple-green", "Apple", FoodCategory::Produce),
                food("oats", "Rolled oats", FoodCategory::Grains),
            ];
            let items: Vec<(&Arc<FoodItem>, f64)> = portions
                .iter()
                .map(|(index, grams)| (&foods[*index], f64::from(*grams)))
                .collect();
            let plan = finalized(vec![vec![meal(0, SlotType::Snack, &items)]]);

            let entries = aggregate(&plan).unwrap();

            let expected: f64 = items.iter().map(|(_, grams)| grams).sum();
            let actual: f64 = entries.iter().map(|e| e.total_quantity_grams).sum();
            prop_assert!((expected - actual).abs() < 1e-6);
            prop_assert!(entries.len() <= 2);
        }
    }
}
