use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::notion::{Database, NotionError};
use crate::state::AppState;

fn failure(err: &NotionError) -> Value {
    json!({
        "success": false,
        "error": err.to_string(),
        "code": err.code(),
    })
}

async fn retrieve_recipes_database(state: &AppState) -> Result<Database, NotionError> {
    let database_id = state.databases.recipes()?;
    state.notion.retrieve_database(database_id).await
}

/// GET /test-auth - token, user listing and recipes database access, each reported separately.
///
/// Always answers 200; failures are described in the body.
pub async fn test_auth(State(state): State<AppState>) -> Json<Value> {
    let me = match state.notion.users_me().await {
        Ok(me) => me,
        Err(e) => {
            warn!("Notion auth check failed: {}", e);
            return Json(json!({ "auth": failure(&e) }));
        }
    };

    let users = match state.notion.list_users().await {
        Ok(users) => users,
        Err(e) => {
            warn!("Notion user listing failed: {}", e);
            return Json(json!({ "auth": failure(&e) }));
        }
    };

    let database = match retrieve_recipes_database(&state).await {
        Ok(db) => json!({
            "success": true,
            "title": db.plain_title().unwrap_or("No title"),
        }),
        Err(e) => {
            warn!("Recipes database check failed: {}", e);
            failure(&e)
        }
    };

    info!(users = users.results.len(), "Notion auth check passed");
    Json(json!({
        "auth": {
            "success": true,
            "workspace": me.workspace_name().unwrap_or("Unknown"),
            "type": me.user_type,
        },
        "users": {
            "count": users.results.len(),
        },
        "database": database,
    }))
}
