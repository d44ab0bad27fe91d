use std::collections::BTreeMap;
use std::str::FromStr;

use business::domain::meal::composer::ComposerSettings;
use business::domain::meal::value_objects::SlotType;
use business::domain::plan::settings::{DEFAULT_VARIETY_WINDOW, PlannerSettings, SlotWeights};

/// Planner tuning read from the environment.
///
/// Environment variables:
/// - PLANNER_KCAL_TOLERANCE: relative kcal window per meal (default: 0.07)
/// - PLANNER_MAX_ITEMS: items per meal (default: 4)
/// - PLANNER_MAX_ATTEMPTS: anchors tried per relaxation step (default: 6)
/// - PLANNER_VARIETY_WINDOW: days a dominant item may not repeat (default: 3)
/// - PLANNER_SLOT_WEIGHTS: e.g. "breakfast=25,lunch=35,dinner=30,snack=10"
///
/// Invalid values are logged and replaced by their default.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub settings: PlannerSettings,
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ComposerSettings::default();

        let composer = ComposerSettings {
            kcal_tolerance: parse_or(
                "PLANNER_KCAL_TOLERANCE",
                lookup("PLANNER_KCAL_TOLERANCE"),
                defaults.kcal_tolerance,
                |v: &f64| *v > 0.0 && *v < 1.0,
            ),
            max_items: parse_or(
                "PLANNER_MAX_ITEMS",
                lookup("PLANNER_MAX_ITEMS"),
                defaults.max_items,
                |v: &usize| *v >= 1,
            ),
            max_attempts: parse_or(
                "PLANNER_MAX_ATTEMPTS",
                lookup("PLANNER_MAX_ATTEMPTS"),
                defaults.max_attempts,
                |v: &usize| *v >= 1,
            ),
            max_refinements: defaults.max_refinements,
        };
        let variety_window = parse_or(
            "PLANNER_VARIETY_WINDOW",
            lookup("PLANNER_VARIETY_WINDOW"),
            DEFAULT_VARIETY_WINDOW,
            |v: &usize| *v <= 6,
        );
        let slot_weights = match lookup("PLANNER_SLOT_WEIGHTS") {
            None => SlotWeights::default(),
            Some(raw) => parse_slot_weights(&raw).unwrap_or_else(|e| {
                tracing::warn!("Invalid PLANNER_SLOT_WEIGHTS ({}), using defaults", e);
                SlotWeights::default()
            }),
        };

        Self {
            settings: PlannerSettings {
                composer,
                slot_weights,
                variety_window,
            },
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T, valid: impl Fn(&T) -> bool) -> T
where
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            tracing::warn!("Invalid {}={:?}, using default {:?}", key, raw, default);
            default
        }
    }
}

/// Parses `slot=weight` pairs separated by commas.
pub fn parse_slot_weights(raw: &str) -> Result<SlotWeights, String> {
    let mut weights = BTreeMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (slot, weight) = pair
            .split_once('=')
            .ok_or_else(|| format!("Missing '=' in {}", pair))?;
        let slot = slot.trim().to_lowercase().parse::<SlotType>()?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid weight in {}", pair))?;
        if weights.insert(slot, weight).is_some() {
            return Err(format!("Duplicated slot {}", slot));
        }
    }
    if weights.is_empty() {
        return Err("No slot weights".to_string());
    }
    SlotWeights::new(weights)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> PlannerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlannerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_use_defaults_when_nothing_is_set() {
        let config = config(&[]);

        assert_eq!(config.settings, PlannerSettings::default());
    }

    #[test]
    fn should_read_configured_values() {
        let config = config(&[
            ("PLANNER_KCAL_TOLERANCE", "0.05"),
            ("PLANNER_MAX_ITEMS", "3"),
            ("PLANNER_MAX_ATTEMPTS", "10"),
            ("PLANNER_VARIETY_WINDOW", "0"),
            ("PLANNER_SLOT_WEIGHTS", "lunch=1, dinner=1"),
        ]);

        assert_eq!(config.settings.composer.kcal_tolerance, 0.05);
        assert_eq!(config.settings.composer.max_items, 3);
        assert_eq!(config.settings.composer.max_attempts, 10);
        assert_eq!(config.settings.variety_window, 0);
        assert_eq!(config.settings.slot_weights.weight(SlotType::Lunch), Some(1.0));
        assert_eq!(config.settings.slot_weights.weight(SlotType::Snack), None);
    }

    #[test]
    fn should_fall_back_on_invalid_values() {
        let config = config(&[
            ("PLANNER_KCAL_TOLERANCE", "1.5"),
            ("PLANNER_MAX_ITEMS", "many"),
            ("PLANNER_SLOT_WEIGHTS", "brunch=10"),
        ]);

        assert_eq!(config.settings.composer.kcal_tolerance, 0.07);
        assert_eq!(config.settings.composer.max_items, 4);
        assert_eq!(config.settings.slot_weights, SlotWeights::default());
    }

    #[test]
    fn should_reject_malformed_slot_weights() {
        assert!(parse_slot_weights("").is_err());
        assert!(parse_slot_weights("lunch").is_err());
        assert!(parse_slot_weights("lunch=abc").is_err());
        assert!(parse_slot_weights("lunch=1,lunch=2").is_err());
        assert!(parse_slot_weights("lunch=-1").is_err());
    }
}
