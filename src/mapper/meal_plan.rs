use chrono::{Datelike, Days, NaiveDate};
use serde_json::Value;

use super::properties::MealPlanProperties;
use super::{date, number, rich_text, select, title, Properties};
use crate::api::body::{date_field, number_field, text_field};

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Stand-in for a meal slot nobody filled in.
pub const PLACEHOLDER: &str = "TBD";

/// Status given to freshly saved plans.
pub const PLANNING: &str = "Planning";

/// A weekly meal plan as posted by the client, with every gap already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    pub week_start: String,
    pub meals: Value,
    pub total_cost: f64,
    pub nutrition_summary: String,
}

impl MealPlan {
    /// Normalize a raw request body. `today` anchors the default week start.
    pub fn from_body(body: &Value, fallback_total_cost: f64, today: NaiveDate) -> Self {
        Self {
            week_start: date_field(body, "weekStart").unwrap_or_else(|| week_start_for(today)),
            meals: body.get("meals").cloned().unwrap_or(Value::Null),
            total_cost: number_field(body, "totalCost").unwrap_or(fallback_total_cost),
            nutrition_summary: text_field(body, "nutritionSummary").unwrap_or_default(),
        }
    }

    pub fn title(&self) -> String {
        format!("Week of {}", self.week_start)
    }

    pub fn encode(&self, names: &MealPlanProperties) -> Properties {
        let mut properties = Properties::new();
        properties.insert(names.title.clone(), title(&self.title()));
        properties.insert(names.week_start.clone(), date(&self.week_start));
        properties.insert(names.status.clone(), select(PLANNING));
        properties.insert(names.total_cost.clone(), number(self.total_cost));
        properties.insert(names.meals.clone(), rich_text(&format_meals(&self.meals)));
        properties.insert(
            names.nutrition_summary.clone(),
            rich_text(&self.nutrition_summary),
        );
        properties
    }
}

/// Monday of the week containing `today`, as `YYYY-MM-DD`.
pub fn week_start_for(today: NaiveDate) -> String {
    let offset = u64::from(today.weekday().num_days_from_monday());
    today
        .checked_sub_days(Days::new(offset))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// Flatten the weekly meal structure into one line per day, Monday first.
///
/// `{"Monday": {"breakfast": "Eggs"}}` renders as `Monday - B: Eggs, L: TBD, D: TBD`.
/// Anything that is not an object is passed through as text.
pub fn format_meals(meals: &Value) -> String {
    match meals {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Object(days) => WEEKDAYS
            .iter()
            .filter_map(|day| {
                let (_, value) = days.iter().find(|(key, _)| key.eq_ignore_ascii_case(day))?;
                Some(format_day(day, value))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

fn format_day(day: &str, value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Null => format!(
            "{} - B: {}, L: {}, D: {}",
            day,
            slot(value, "breakfast"),
            slot(value, "lunch"),
            slot(value, "dinner"),
        ),
        Value::String(s) => format!("{} - {}", day, s),
        other => format!("{} - {}", day, other),
    }
}

fn slot(day: &Value, meal: &str) -> String {
    text_field(day, meal).unwrap_or_else(|| PLACEHOLDER.to_string())
}
