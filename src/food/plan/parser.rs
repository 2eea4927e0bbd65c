use super::{MealRecord, MealSlot};

const SEPARATOR: char = ':';

/// Scan model output for meal lines.
///
/// A line yields a record only when it carries a slot marker and a `:`.
/// Everything after the first `:` is whitespace-tokenized. With two or more
/// tokens the last one is taken as the calorie annotation and the rest form
/// the item name; a single token is the name alone. Anything else is skipped,
/// never reported.
pub fn parse(plan_text: &str) -> Vec<MealRecord> {
    plan_text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<MealRecord> {
    let slot = MealSlot::detect(line)?;
    let (_label, content) = line.split_once(SEPARATOR)?;

    let mut tokens: Vec<&str> = content.split_whitespace().collect();
    let calorie = match tokens.len() {
        0 => return None,
        1 => None,
        _ => tokens.pop().map(str::to_string),
    };

    Some(MealRecord {
        slot,
        raw_name: tokens.join(" "),
        calorie,
    })
}
