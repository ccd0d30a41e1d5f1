use axum::{body::Bytes, extract::State};
use serde::Serialize;
use tracing::info;

use crate::api::body::{lenient_json, text_field};
use crate::api::ApiResponse;
use crate::state::AppState;

pub const HANDED_OFF: &str = "handed_off";

#[derive(Debug, Serialize)]
pub struct Handoff {
    pub message: String,
    pub status: &'static str,
}

/// POST /coordinate-clark - hand a grocery list to Clark for delivery
pub async fn coordinate_clark(State(state): State<AppState>, body: Bytes) -> ApiResponse<Handoff> {
    let body = lenient_json(&body);
    let delivery = text_field(&body, "preferredDelivery")
        .unwrap_or_else(|| state.defaults.preferred_delivery.clone());

    info!(
        grocery_list_id = text_field(&body, "groceryListId").as_deref().unwrap_or("-"),
        delivery = %delivery,
        "Handing grocery list to Clark"
    );

    ApiResponse::success(Handoff {
        message: format!("Sent to Clark for {} delivery", delivery),
        status: HANDED_OFF,
    })
}
