use axum::{body::Bytes, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::api::body::lenient_json;
use crate::api::{ApiResponse, ApiResult};
use crate::mapper::MealPlan;
use crate::state::AppState;

pub const SAVED: &str = "Meal plan saved successfully!";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSaved {
    pub meal_plan_id: String,
    pub message: &'static str,
}

/// POST /meal-plan - store a weekly plan as a page in the meal plans database
pub async fn save(State(state): State<AppState>, body: Bytes) -> ApiResult<MealPlanSaved> {
    let body = lenient_json(&body);
    let plan = MealPlan::from_body(
        &body,
        state.defaults.meal_plan_total_cost,
        Utc::now().date_naive(),
    );

    let database_id = state.databases.meal_plans()?;
    let properties = plan.encode(&state.properties.meal_plan);

    info!(database_id, week_start = %plan.week_start, "Saving meal plan");
    let page = state.notion.create_page(database_id, properties).await?;

    Ok(ApiResponse::success(MealPlanSaved {
        meal_plan_id: page.id,
        message: SAVED,
    }))
}
