use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::meal_plan::week_start_for;
use super::properties::GroceryListProperties;
use super::{number, select, title, Properties};
use crate::api::body::date_field;

/// Status given to freshly generated lists.
pub const READY: &str = "Ready";

/// Shopping items grouped by store section, in aisle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrocerySections {
    pub produce: Vec<String>,
    pub proteins: Vec<String>,
    pub dairy: Vec<String>,
    pub pantry: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryList {
    pub week_start: String,
    pub items: GrocerySections,
    pub estimated_total: f64,
}

impl GroceryList {
    pub fn from_body(
        body: &Value,
        items: GrocerySections,
        estimated_total: f64,
        today: NaiveDate,
    ) -> Self {
        Self {
            week_start: date_field(body, "weekStart").unwrap_or_else(|| week_start_for(today)),
            items,
            estimated_total,
        }
    }

    pub fn title(&self) -> String {
        format!("Groceries - {}", self.week_start)
    }

    pub fn encode(&self, names: &GroceryListProperties) -> Properties {
        let mut properties = Properties::new();
        properties.insert(names.title.clone(), title(&self.title()));
        properties.insert(names.estimated_total.clone(), number(self.estimated_total));
        properties.insert(names.status.clone(), select(READY));
        properties
    }
}
