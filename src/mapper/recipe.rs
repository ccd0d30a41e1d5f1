use serde::{Deserialize, Serialize};

use super::properties::RecipeProperties;
use super::{read_number, read_rich_text, read_select, read_title, serialize_compact};
use crate::notion::Page;

/// Read-only projection of a page in the recipes database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(serialize_with = "serialize_compact")]
    pub prep_time: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub cook_time: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub servings: f64,
    pub ingredients: String,
    pub instructions: String,
    #[serde(serialize_with = "serialize_compact")]
    pub cost_estimate: f64,
}

impl Recipe {
    pub const UNNAMED: &'static str = "Unnamed";

    pub fn decode(page: &Page, names: &RecipeProperties) -> Self {
        let p = &page.properties;

        Self {
            id: page.id.clone(),
            name: read_title(p, &names.name).unwrap_or_else(|| Self::UNNAMED.to_string()),
            category: read_select(p, &names.category).unwrap_or_default(),
            prep_time: read_number(p, &names.prep_time).unwrap_or(0.0),
            cook_time: read_number(p, &names.cook_time).unwrap_or(0.0),
            servings: read_number(p, &names.servings).unwrap_or(0.0),
            ingredients: read_rich_text(p, &names.ingredients).unwrap_or_default(),
            instructions: read_rich_text(p, &names.instructions).unwrap_or_default(),
            cost_estimate: read_number(p, &names.cost_estimate).unwrap_or(0.0),
        }
    }
}
