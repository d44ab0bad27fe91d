use serde::{Deserialize, Serialize};

/// Meal occasion within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl SlotType {
    pub const ALL: [SlotType; 4] = [
        SlotType::Breakfast,
        SlotType::Lunch,
        SlotType::Dinner,
        SlotType::Snack,
    ];
}

impl std::fmt::Display for SlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotType::Breakfast => write!(f, "breakfast"),
            SlotType::Lunch => write!(f, "lunch"),
            SlotType::Dinner => write!(f, "dinner"),
            SlotType::Snack => write!(f, "snack"),
        }
    }
}

impl std::str::FromStr for SlotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(SlotType::Breakfast),
            "lunch" => Ok(SlotType::Lunch),
            "dinner" => Ok(SlotType::Dinner),
            "snack" => Ok(SlotType::Snack),
            _ => Err(format!("Invalid slot type: {}", s)),
        }
    }
}

/// Back reference to a meal slot of a plan: day index plus slot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotRef {
    pub day_index: u8,
    pub slot_type: SlotType,
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day{}:{}", self.day_index, self.slot_type)
    }
}
