use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{ApiResponse, ApiResult};
use crate::mapper::{status_equals, Recipe};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    /// Only recipes whose status select equals this value
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecipeList {
    pub count: usize,
    pub recipes: Vec<Recipe>,
}

/// GET /recipes - all recipes from the recipes database
pub async fn list(
    State(state): State<AppState>,
    query: Option<Query<RecipeQuery>>,
) -> ApiResult<RecipeList> {
    // An unreadable query string lists everything
    let query = query.map(|Query(q)| q).unwrap_or_else(|| {
        debug!("Ignoring malformed /recipes query string");
        RecipeQuery::default()
    });
    let database_id = state.databases.recipes()?;
    let names = &state.properties.recipe;

    let filter = query
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|status| status_equals(&names.status, names.status_kind, status));

    info!(database_id, filtered = filter.is_some(), "Fetching recipes from Notion");
    let response = state.notion.query_database(database_id, filter).await?;

    let recipes: Vec<Recipe> = response
        .results
        .iter()
        .map(|page| Recipe::decode(page, names))
        .collect();
    info!("Got {} recipes", recipes.len());

    Ok(ApiResponse::success(RecipeList {
        count: recipes.len(),
        recipes,
    }))
}
