use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog food item (e.g. `chicken-breast`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FoodId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Grocery aisle of a food item.
///
/// Declaration order is the order in which shopping lists are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Produce,
    Meat,
    Seafood,
    Dairy,
    Eggs,
    Bakery,
    Grains,
    Legumes,
    NutsSeeds,
    OilsFats,
    Pantry,
    Frozen,
    Beverages,
    Other,
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodCategory::Produce => write!(f, "produce"),
            FoodCategory::Meat => write!(f, "meat"),
            FoodCategory::Seafood => write!(f, "seafood"),
            FoodCategory::Dairy => write!(f, "dairy"),
            FoodCategory::Eggs => write!(f, "eggs"),
            FoodCategory::Bakery => write!(f, "bakery"),
            FoodCategory::Grains => write!(f, "grains"),
            FoodCategory::Legumes => write!(f, "legumes"),
            FoodCategory::NutsSeeds => write!(f, "nuts_seeds"),
            FoodCategory::OilsFats => write!(f, "oils_fats"),
            FoodCategory::Pantry => write!(f, "pantry"),
            FoodCategory::Frozen => write!(f, "frozen"),
            FoodCategory::Beverages => write!(f, "beverages"),
            FoodCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "produce" => Ok(FoodCategory::Produce),
            "meat" => Ok(FoodCategory::Meat),
            "seafood" => Ok(FoodCategory::Seafood),
            "dairy" => Ok(FoodCategory::Dairy),
            "eggs" => Ok(FoodCategory::Eggs),
            "bakery" => Ok(FoodCategory::Bakery),
            "grains" => Ok(FoodCategory::Grains),
            "legumes" => Ok(FoodCategory::Legumes),
            "nuts_seeds" => Ok(FoodCategory::NutsSeeds),
            "oils_fats" => Ok(FoodCategory::OilsFats),
            "pantry" => Ok(FoodCategory::Pantry),
            "frozen" => Ok(FoodCategory::Frozen),
            "beverages" => Ok(FoodCategory::Beverages),
            "other" => Ok(FoodCategory::Other),
            _ => Err(format!("Invalid food category: {}", s)),
        }
    }
}

/// Upper bound on the number of quantities one rule may allow.
pub const MAX_PORTIONS: usize = 200;

/// Portioning rule: quantities are `min_grams + k * step_grams`, never above
/// `max_grams`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortionRule {
    pub min_grams: f64,
    pub max_grams: f64,
    pub step_grams: f64,
}

impl PortionRule {
    pub fn is_valid(&self) -> bool {
        self.min_grams.is_finite()
            && self.max_grams.is_finite()
            && self.step_grams.is_finite()
            && self.min_grams > 0.0
            && self.step_grams > 0.0
            && self.min_grams <= self.max_grams
            && (self.max_grams - self.min_grams) / self.step_grams < MAX_PORTIONS as f64
    }

    /// Every allowed quantity, smallest first.
    pub fn quantities(&self) -> Vec<f64> {
        let steps = ((self.max_grams - self.min_grams) / self.step_grams + 1e-9).floor() as usize;
        (0..=steps)
            .map(|k| self.min_grams + k as f64 * self.step_grams)
            .collect()
    }

    /// Quantity one step up, if still within the rule.
    pub fn step_up(&self, grams: f64) -> Option<f64> {
        let next = grams + self.step_grams;
        (next <= self.max_grams + 1e-9).then_some(next)
    }

    /// Quantity one step down, if still within the rule.
    pub fn step_down(&self, grams: f64) -> Option<f64> {
        let next = grams - self.step_grams;
        (next >= self.min_grams - 1e-9).then_some(next)
    }
}
