//! Logical field → Notion property name table.
//!
//! Every encode/decode call site looks property names up here instead of
//! spelling them out, so a renamed column in Notion is a config change.
//! A YAML file may override any subset of names:
//!
//! ```yaml
//! grocery_list:
//!   title: Name
//! recipe:
//!   prep_time: Prep (min)
//! agent:
//!   status_kind: status
//! ```
//!
//! `status_kind` tells filters whether the status column is a Notion `select`
//! (the default) or a native `status` property.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyMap {
    pub recipe: RecipeProperties,
    pub meal_plan: MealPlanProperties,
    pub grocery_list: GroceryListProperties,
    pub agent: AgentProperties,
}

/// Notion property type behind a status column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Select,
    Status,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Select => "select",
            StatusKind::Status => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeProperties {
    pub name: String,
    pub category: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: String,
    pub instructions: String,
    pub cost_estimate: String,
    pub status: String,
    pub status_kind: StatusKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealPlanProperties {
    pub title: String,
    pub week_start: String,
    pub status: String,
    pub total_cost: String,
    pub meals: String,
    pub nutrition_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroceryListProperties {
    pub title: String,
    pub estimated_total: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentProperties {
    pub name: String,
    pub role: String,
    pub budget_authority: String,
    pub authority_level: String,
    pub performance_rating: String,
    pub escalation_trigger: String,
    pub status: String,
    pub status_kind: StatusKind,
}

impl PropertyMap {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

impl Default for RecipeProperties {
    fn default() -> Self {
        Self {
            name: "Recipe".into(),
            category: "Category".into(),
            prep_time: "Prep Time".into(),
            cook_time: "Cook Time".into(),
            servings: "Servings".into(),
            ingredients: "Ingredients".into(),
            instructions: "Instructions".into(),
            cost_estimate: "Cost Estimate".into(),
            status: "Status".into(),
            status_kind: StatusKind::Select,
        }
    }
}

impl Default for MealPlanProperties {
    fn default() -> Self {
        Self {
            title: "Week Name".into(),
            week_start: "Week Start".into(),
            status: "Status".into(),
            total_cost: "Total Cost".into(),
            meals: "Meals".into(),
            nutrition_summary: "Nutrition Summary".into(),
        }
    }
}

impl Default for GroceryListProperties {
    fn default() -> Self {
        Self {
            title: "List Name".into(),
            estimated_total: "Estimated Total".into(),
            status: "Status".into(),
        }
    }
}

impl Default for AgentProperties {
    fn default() -> Self {
        Self {
            name: "Name".into(),
            role: "Role".into(),
            budget_authority: "Budget Authority".into(),
            authority_level: "Authority Level".into(),
            performance_rating: "Performance Rating".into(),
            escalation_trigger: "Escalation Trigger".into(),
            status: "Status".into(),
            status_kind: StatusKind::Select,
        }
    }
}
