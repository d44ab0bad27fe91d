use std::collections::BTreeSet;
use std::sync::Arc;

use super::errors::{ComposeError, InfeasibleReason};
use super::model::{MealItem, MealSlot, dominant_of};
use super::value_objects::SlotType;
use crate::domain::catalog::food_catalog::FoodCatalog;
use crate::domain::catalog::model::{CatalogFilter, FoodItem};
use crate::domain::catalog::value_objects::FoodId;
use crate::domain::nutrition::model::{MacroRatios, NutrientTotals};

/// Weight of the kcal distance outside the tolerance window. Keeps the kcal
/// window ahead of every macro concern when comparing two meals.
const KCAL_OUTSIDE_WEIGHT: f64 = 1000.0;
/// Weight of macro distance outside the strategy's macro band.
const MACRO_OUTSIDE_WEIGHT: f64 = 100.0;
/// Minimum score gain for a move to be taken.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Tuning knobs of the composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposerSettings {
    /// Accepted relative kcal deviation from the slot target.
    pub kcal_tolerance: f64,
    /// Maximum number of distinct items in one meal.
    pub max_items: usize,
    /// Anchors tried per relaxation strategy.
    pub max_attempts: usize,
    /// Portion adjustments allowed per attempt.
    pub max_refinements: usize,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            kcal_tolerance: 0.07,
            max_items: 4,
            max_attempts: 6,
            max_refinements: 200,
        }
    }
}

/// Constraint levels tried in order until one produces a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationStrategy {
    /// Kcal window and every macro within ±15% of its goal.
    Strict,
    /// Kcal window and every macro within ±35% of its goal.
    RelaxedMacros,
    /// Kcal window only.
    KcalOnly,
}

impl RelaxationStrategy {
    pub const LADDER: [RelaxationStrategy; 3] = [
        RelaxationStrategy::Strict,
        RelaxationStrategy::RelaxedMacros,
        RelaxationStrategy::KcalOnly,
    ];

    fn macro_tolerance(&self) -> Option<f64> {
        match self {
            RelaxationStrategy::Strict => Some(0.15),
            RelaxationStrategy::RelaxedMacros => Some(0.35),
            RelaxationStrategy::KcalOnly => None,
        }
    }

    fn macro_weight(&self) -> f64 {
        match self {
            RelaxationStrategy::Strict => 1.0,
            RelaxationStrategy::RelaxedMacros => 0.5,
            RelaxationStrategy::KcalOnly => 0.1,
        }
    }
}

/// Inputs for composing a single meal.
#[derive(Debug, Clone)]
pub struct ComposeRequest<'a> {
    pub day_index: u8,
    pub slot_type: SlotType,
    pub target_kcal: f64,
    pub macro_ratios: MacroRatios,
    pub excluded_tags: &'a BTreeSet<String>,
    /// Items that may appear in the meal but must not dominate it.
    pub excluded_dominants: &'a BTreeSet<FoodId>,
}

/// Assembles one meal from catalog items.
///
/// Greedy selection with backtracking over anchor items: each attempt seeds
/// the meal with an anchor, adds the (item, portion) pair that best closes
/// the remaining gap, then nudges portions one step at a time. Candidates
/// are visited in id order and ties keep the first candidate, so identical
/// inputs always give identical meals.
pub struct MealComposer<'c> {
    catalog: &'c FoodCatalog,
    settings: ComposerSettings,
}

struct Goal<'a> {
    nutrients: NutrientTotals,
    kcal_tolerance: f64,
    strategy: RelaxationStrategy,
    excluded_dominants: &'a BTreeSet<FoodId>,
}

impl Goal<'_> {
    fn kcal_error(&self, totals: &NutrientTotals) -> f64 {
        (totals.kcal - self.nutrients.kcal).abs() / self.nutrients.kcal
    }

    fn macro_errors(&self, totals: &NutrientTotals) -> [f64; 3] {
        let relative = |actual: f64, goal: f64| (actual - goal).abs() / goal.max(1.0);
        [
            relative(totals.protein_g, self.nutrients.protein_g),
            relative(totals.carbs_g, self.nutrients.carbs_g),
            relative(totals.fat_g, self.nutrients.fat_g),
        ]
    }

    fn accepts(&self, totals: &NutrientTotals) -> bool {
        if self.kcal_error(totals) > self.kcal_tolerance {
            return false;
        }
        match self.strategy.macro_tolerance() {
            Some(tolerance) => self.macro_errors(totals).iter().all(|e| *e <= tolerance),
            None => true,
        }
    }

    /// Lower is better. `None` when the dominant item is excluded.
    fn score(&self, items: &[MealItem]) -> Option<f64> {
        let dominant = dominant_of(items)?;
        if self.excluded_dominants.contains(&dominant.id) {
            return None;
        }

        let totals: NutrientTotals = items.iter().map(MealItem::nutrients).sum();
        let kcal_error = self.kcal_error(&totals);
        let kcal_outside = (kcal_error - self.kcal_tolerance).max(0.0);

        let macro_errors = self.macro_errors(&totals);
        let macro_mean = macro_errors.iter().sum::<f64>() / macro_errors.len() as f64;
        let macro_outside = match self.strategy.macro_tolerance() {
            Some(tolerance) => macro_errors.iter().map(|e| (e - tolerance).max(0.0)).sum(),
            None => 0.0,
        };

        Some(
            KCAL_OUTSIDE_WEIGHT * kcal_outside
                + MACRO_OUTSIDE_WEIGHT * macro_outside
                + kcal_error
                + self.strategy.macro_weight() * macro_mean,
        )
    }
}

impl<'c> MealComposer<'c> {
    pub fn new(catalog: &'c FoodCatalog, settings: ComposerSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }

    pub fn compose(&self, request: &ComposeRequest<'_>) -> Result<MealSlot, ComposeError> {
        let candidates = self.catalog.find(&CatalogFilter {
            excluded_tags: request.excluded_tags.clone(),
            category: None,
            slot: Some(request.slot_type),
        });
        if candidates.is_empty() {
            return Err(ComposeError::Infeasible {
                reason: InfeasibleReason::NoCandidates,
            });
        }
        if !(request.target_kcal.is_finite() && request.target_kcal > 0.0) {
            return Err(ComposeError::Infeasible {
                reason: InfeasibleReason::NoConvergence,
            });
        }

        let nutrients = request.macro_ratios.grams_for(request.target_kcal);

        for strategy in RelaxationStrategy::LADDER {
            let goal = Goal {
                nutrients,
                kcal_tolerance: self.settings.kcal_tolerance,
                strategy,
                excluded_dominants: request.excluded_dominants,
            };

            let anchors = rank_anchors(&candidates, &goal);
            if anchors.is_empty() {
                return Err(ComposeError::Infeasible {
                    reason: InfeasibleReason::NoCandidates,
                });
            }

            for anchor in anchors.into_iter().take(self.settings.max_attempts) {
                if let Some(items) = self.attempt(anchor, &candidates, &goal) {
                    return Ok(MealSlot {
                        day_index: request.day_index,
                        slot_type: request.slot_type,
                        items,
                    });
                }
            }
        }

        Err(ComposeError::Infeasible {
            reason: InfeasibleReason::NoConvergence,
        })
    }

    fn attempt(
        &self,
        anchor: MealItem,
        candidates: &[Arc<FoodItem>],
        goal: &Goal<'_>,
    ) -> Option<Vec<MealItem>> {
        let mut items = vec![anchor];
        let mut current = goal.score(&items)?;

        // Greedy additions.
        while !accepts(goal, &items) && items.len() < self.settings.max_items {
            let mut best: Option<(f64, MealItem)> = None;

            for candidate in candidates {
                if items.iter().any(|i| i.food.id == candidate.id) {
                    continue;
                }
                for grams in candidate.portion.quantities() {
                    let added = MealItem {
                        food: candidate.clone(),
                        grams,
                    };
                    let mut trial = items.clone();
                    trial.push(added.clone());
                    if let Some(score) = goal.score(&trial) {
                        if best.as_ref().is_none_or(|(b, _)| score < *b) {
                            best = Some((score, added));
                        }
                    }
                }
            }

            match best {
                Some((score, added)) if score < current - IMPROVEMENT_EPSILON => {
                    items.push(added);
                    current = score;
                }
                _ => break,
            }
        }

        // Portion refinement.
        for _ in 0..self.settings.max_refinements {
            if accepts(goal, &items) {
                break;
            }
            match best_adjustment(&items, goal) {
                Some((score, next)) if score < current - IMPROVEMENT_EPSILON => {
                    items = next;
                    current = score;
                }
                _ => break,
            }
        }

        accepts(goal, &items).then_some(items)
    }
}

fn accepts(goal: &Goal<'_>, items: &[MealItem]) -> bool {
    let totals: NutrientTotals = items.iter().map(MealItem::nutrients).sum();
    goal.accepts(&totals)
}

/// Anchors ordered by how close each gets to the goal on its own, using its
/// best portion. Items barred from dominating are skipped.
fn rank_anchors(candidates: &[Arc<FoodItem>], goal: &Goal<'_>) -> Vec<MealItem> {
    let mut ranked: Vec<(f64, MealItem)> = candidates
        .iter()
        .filter(|c| !goal.excluded_dominants.contains(&c.id))
        .filter_map(|candidate| {
            candidate
                .portion
                .quantities()
                .into_iter()
                .filter_map(|grams| {
                    let item = MealItem {
                        food: candidate.clone(),
                        grams,
                    };
                    goal.score(std::slice::from_ref(&item))
                        .map(|score| (score, item))
                })
                .min_by(|a, b| a.0.total_cmp(&b.0))
        })
        .collect();

    // Stable: equal scores keep id order.
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.into_iter().map(|(_, item)| item).collect()
}

/// Best single move: one portion step up or down on any item, or dropping
/// an item when more than one remains.
fn best_adjustment(items: &[MealItem], goal: &Goal<'_>) -> Option<(f64, Vec<MealItem>)> {
    let mut best: Option<(f64, Vec<MealItem>)> = None;
    let mut consider = |trial: Vec<MealItem>| {
        if let Some(score) = goal.score(&trial) {
            if best.as_ref().is_none_or(|(b, _)| score < *b) {
                best = Some((score, trial));
            }
        }
    };

    for (index, item) in items.iter().enumerate() {
        let portion = item.food.portion;
        for grams in [portion.step_up(item.grams), portion.step_down(item.grams)]
            .into_iter()
            .flatten()
        {
            let mut trial = items.to_vec();
            trial[index].grams = grams;
            consider(trial);
        }
        if items.len() > 1 {
            let mut trial = items.to_vec();
            trial.remove(index);
            consider(trial);
        }
    }

    best
}
