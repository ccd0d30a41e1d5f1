use serde::Serialize;

use crate::api::ApiResponse;
use crate::fixtures::{self, FamilyPreferences};

#[derive(Debug, Serialize)]
pub struct PreferencesPayload {
    pub preferences: FamilyPreferences,
}

/// GET /preferences - static family food preferences
pub async fn get() -> ApiResponse<PreferencesPayload> {
    ApiResponse::success(PreferencesPayload {
        preferences: fixtures::preferences(),
    })
}
