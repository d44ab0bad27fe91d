use std::collections::BTreeMap;

use crate::domain::meal::composer::ComposerSettings;
use crate::domain::meal::value_objects::SlotType;

pub const DEFAULT_DAYS: u8 = 7;
pub const MAX_DAYS: u8 = 7;
pub const DEFAULT_VARIETY_WINDOW: usize = 3;

/// Relative share of the daily kcal target assigned to each slot type.
///
/// Only the weights of the slots actually requested are used, normalized so
/// that they add up to the full daily target.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotWeights(BTreeMap<SlotType, f64>);

impl SlotWeights {
    /// Rejects non-positive or non-finite weights.
    pub fn new(weights: BTreeMap<SlotType, f64>) -> Result<Self, String> {
        if let Some((slot, weight)) = weights.iter().find(|(_, w)| !w.is_finite() || **w <= 0.0) {
            return Err(format!("Invalid weight {} for slot {}", weight, slot));
        }
        Ok(Self(weights))
    }

    pub fn weight(&self, slot: SlotType) -> Option<f64> {
        self.0.get(&slot).copied()
    }

    /// Kcal target per requested slot. `None` if a slot has no weight.
    pub fn split(&self, daily_kcal: f64, slots: &[SlotType]) -> Option<Vec<(SlotType, f64)>> {
        let weights: Vec<(SlotType, f64)> = slots
            .iter()
            .map(|slot| self.weight(*slot).map(|w| (*slot, w)))
            .collect::<Option<_>>()?;
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        Some(
            weights
                .into_iter()
                .map(|(slot, w)| (slot, daily_kcal * w / total))
                .collect(),
        )
    }
}

impl Default for SlotWeights {
    fn default() -> Self {
        Self(BTreeMap::from([
            (SlotType::Breakfast, 25.0),
            (SlotType::Lunch, 35.0),
            (SlotType::Dinner, 30.0),
            (SlotType::Snack, 10.0),
        ]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    pub composer: ComposerSettings,
    pub slot_weights: SlotWeights,
    /// Used when a request does not pick its own window.
    pub variety_window: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            composer: ComposerSettings::default(),
            slot_weights: SlotWeights::default(),
            variety_window: DEFAULT_VARIETY_WINDOW,
        }
    }
}
