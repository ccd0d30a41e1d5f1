use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers;
use crate::state::AppState;

/// Full application: routes plus global middleware.
pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    router(state)
        .layer(cors_layer(security))
        .layer(TraceLayer::new_for_http())
}

/// Routes only, for driving handlers directly in tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root::root))
        .merge(nora_routes())
        .merge(clark_routes())
        .fallback(handlers::root::not_found)
        .with_state(state)
}

fn nora_routes() -> Router<AppState> {
    use handlers::nora;

    Router::new()
        .route("/recipes", get(nora::recipes_list))
        .route("/preferences", get(nora::preferences_get))
        // Both spellings have shipped to clients
        .route("/meal-plan", post(nora::meal_plan_save))
        .route("/save-meal-plan", post(nora::meal_plan_save))
        .route("/grocery-list", post(nora::grocery_list_save))
        .route("/save-grocery-list", post(nora::grocery_list_save))
        .route("/coordinate-clark", post(nora::coordinate_clark))
        // Diagnostics
        .route("/test-auth", get(nora::test_auth))
}

fn clark_routes() -> Router<AppState> {
    use handlers::clark;

    Router::new().route("/clark/process", post(clark::process))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(origins))
}
