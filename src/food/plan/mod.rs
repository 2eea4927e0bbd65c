pub mod enrich;
pub mod parser;

pub use enrich::Enricher;
pub use parser::parse;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Slot whose marker appears earliest in `line`, if any.
    pub fn detect(line: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .filter_map(|slot| line.find(slot.marker()).map(|pos| (pos, *slot)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, slot)| slot)
    }

    /// Substring the model is asked to label this meal with.
    pub fn marker(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "아침",
            MealSlot::Lunch => "점심",
            MealSlot::Dinner => "저녁",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        };
        write!(f, "{}", name)
    }
}

/// One meal line pulled out of the model's plan text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub slot: MealSlot,
    pub raw_name: String,
    pub calorie: Option<String>,
}

impl fmt::Display for MealRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.calorie {
            Some(calorie) => write!(f, "{}({})", self.raw_name, calorie),
            None => write!(f, "{}", self.raw_name),
        }
    }
}

/// A record after translation, image lookup and link building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMeal {
    pub record: MealRecord,
    pub translated_name: String,
    pub image_url: Option<String>,
    pub purchase_link: String,
}

/// One `name(calorie)` label per record, newline separated.
pub fn summarize(records: &[MealRecord]) -> String {
    records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
