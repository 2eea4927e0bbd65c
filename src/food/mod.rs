pub mod image;
pub mod plan;
pub mod planner;
pub mod prompt;
pub mod shopping;

pub use image::ImageResolver;
pub use plan::{EnrichedMeal, MealRecord, MealSlot};
pub use planner::{plan_meals, Credential, MealPlan, MealPlanner, PlanError};
