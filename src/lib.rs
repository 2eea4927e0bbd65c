pub mod api;
pub mod commands;
pub mod config;
pub mod food;
pub mod providers;

// Re-export commonly used items
pub use config::{EndpointConfig, SessionConfig};
pub use food::{plan_meals, EnrichedMeal, MealPlan, MealRecord, MealSlot, PlanError};
