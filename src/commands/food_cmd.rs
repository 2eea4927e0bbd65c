use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{EndpointConfig, SessionConfig};
use crate::food::{plan_meals, EnrichedMeal, MealPlan};

pub async fn handle_command(session: SessionConfig, endpoints: &EndpointConfig) -> Result<(), String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("🤖 Building your meal plan...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = plan_meals(session, endpoints).await;
    spinner.finish_and_clear();

    let plan = result.map_err(|e| e.to_string())?;
    println!("{}", render_plan(&plan));
    Ok(())
}

pub fn render_plan(plan: &MealPlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "🍽️ Generated meal plan".bright_yellow().bold()));
    out.push_str(plan.plan.trim_end());
    out.push_str("\n\n");

    out.push_str(&format!("{}\n", "🍴 Meal preview".bright_yellow().bold()));
    if plan.meals.is_empty() {
        out.push_str(&format!("{}\n", "No meal lines found in the plan.".yellow()));
    }
    for meal in &plan.meals {
        out.push_str(&render_meal(meal));
    }
    out
}

fn render_meal(meal: &EnrichedMeal) -> String {
    let record = &meal.record;
    let header = match &record.calorie {
        Some(calorie) => format!("{} ({})", record.raw_name, calorie),
        None => record.raw_name.clone(),
    };

    let mut out = format!("\n### 🍽️ {} {}\n", header.bold(), format!("[{}]", record.slot).dimmed());
    if meal.translated_name != record.raw_name {
        out.push_str(&format!("   {}\n", meal.translated_name.italic()));
    }
    match &meal.image_url {
        Some(url) => out.push_str(&format!("   🖼️  {}\n", url.cyan())),
        None => out.push_str(&format!("   {}\n", format!("❗ {} image lookup failed", record.raw_name).red())),
    }
    out.push_str(&format!("   🛒 buy {}: {}\n", record.raw_name, meal.purchase_link.underline()));
    out
}
