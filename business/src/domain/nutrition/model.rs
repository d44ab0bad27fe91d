use serde::{Deserialize, Serialize};

use super::errors::NutritionError;

/// Atwater factors (kcal per gram).
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Maximum relative gap between the declared kcal and the kcal implied by
/// the macro grams.
pub const MACRO_KCAL_TOLERANCE: f64 = 0.10;

/// Daily nutrient targets for a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientTarget {
    kcal: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

impl NutrientTarget {
    /// Validates the target.
    ///
    /// Business rules:
    /// - kcal and every macro must be finite and non-negative
    /// - macro calories must lie within ±10% of kcal
    /// - a zero kcal target only allows zero macros
    pub fn new(kcal: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Result<Self, NutritionError> {
        if !kcal.is_finite() || kcal < 0.0 {
            return Err(NutritionError::InvalidKcal);
        }
        if [protein_g, carbs_g, fat_g]
            .iter()
            .any(|g| !g.is_finite() || *g < 0.0)
        {
            return Err(NutritionError::NegativeMacro);
        }

        let target = Self {
            kcal,
            protein_g,
            carbs_g,
            fat_g,
        };

        let macro_kcal = target.macro_kcal();
        if kcal == 0.0 {
            if macro_kcal > 0.0 {
                return Err(NutritionError::MacroMismatch);
            }
            return Ok(target);
        }
        if (macro_kcal - kcal).abs() > kcal * MACRO_KCAL_TOLERANCE {
            return Err(NutritionError::MacroMismatch);
        }

        Ok(target)
    }

    pub fn kcal(&self) -> f64 {
        self.kcal
    }

    pub fn protein_g(&self) -> f64 {
        self.protein_g
    }

    pub fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    pub fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Calories implied by the macro grams.
    pub fn macro_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }

    /// Share of macro calories coming from each macro.
    pub fn macro_ratios(&self) -> MacroRatios {
        let total = self.macro_kcal();
        if total <= 0.0 {
            return MacroRatios::default();
        }
        MacroRatios {
            protein: self.protein_g * KCAL_PER_G_PROTEIN / total,
            carbs: self.carbs_g * KCAL_PER_G_CARBS / total,
            fat: self.fat_g * KCAL_PER_G_FAT / total,
        }
    }
}

/// Fractions of calories from protein, carbs and fat. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroRatios {
    /// Balanced split used when a target carries no macro information.
    fn default() -> Self {
        Self {
            protein: 0.25,
            carbs: 0.45,
            fat: 0.30,
        }
    }
}

impl MacroRatios {
    /// Macro grams that deliver `kcal` with this split.
    pub fn grams_for(&self, kcal: f64) -> NutrientTotals {
        NutrientTotals {
            kcal,
            protein_g: kcal * self.protein / KCAL_PER_G_PROTEIN,
            carbs_g: kcal * self.carbs / KCAL_PER_G_CARBS,
            fat_g: kcal * self.fat / KCAL_PER_G_FAT,
        }
    }
}

/// Additive nutrient amounts of a meal, a day or a whole plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self::Output {
        NutrientTotals {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl std::ops::AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), |acc, t| acc + t)
    }
}
