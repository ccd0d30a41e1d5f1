use axum::{body::Bytes, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::api::body::lenient_json;
use crate::api::{ApiResponse, ApiResult};
use crate::fixtures;
use crate::mapper::{serialize_compact, GroceryList, GrocerySections};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListSaved {
    pub grocery_list_id: String,
    pub items: GrocerySections,
    #[serde(serialize_with = "serialize_compact")]
    pub estimated_total: f64,
}

/// POST /grocery-list - generate the weekly list and file it in the grocery database
pub async fn save(State(state): State<AppState>, body: Bytes) -> ApiResult<GroceryListSaved> {
    let body = lenient_json(&body);
    let list = GroceryList::from_body(
        &body,
        fixtures::grocery_sections(),
        state.defaults.grocery_estimated_total,
        Utc::now().date_naive(),
    );

    let database_id = state.databases.grocery()?;
    let properties = list.encode(&state.properties.grocery_list);

    info!(database_id, week_start = %list.week_start, "Saving grocery list");
    let page = state.notion.create_page(database_id, properties).await?;

    Ok(ApiResponse::success(GroceryListSaved {
        grocery_list_id: page.id,
        items: list.items,
        estimated_total: list.estimated_total,
    }))
}
