use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

pub const TOKEN: &str = "secret_test_token";
pub const RECIPES_DB: &str = "recipes-db";
pub const MEAL_PLANS_DB: &str = "meal-plans-db";
pub const GROCERY_DB: &str = "grocery-db";
pub const ROLES_DB: &str = "roles-db";
pub const MISSING_DB: &str = "missing-db";

/// Stand-in for api.notion.com, shared by every server a test file spawns.
#[derive(Clone, Default)]
pub struct FakeNotion {
    created: Arc<Mutex<Vec<Value>>>,
}

impl FakeNotion {
    /// Bodies of every `POST /v1/pages` received so far.
    pub fn created(&self) -> Vec<Value> {
        self.created.lock().unwrap().clone()
    }
}

static NOTION: OnceLock<(String, FakeNotion)> = OnceLock::new();

pub fn fake_notion() -> &'static (String, FakeNotion) {
    NOTION.get_or_init(|| {
        let port = portpicker::pick_unused_port().expect("failed to pick free port");
        let fake = FakeNotion::default();
        let app = fake_router(fake.clone());
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();

        // Own runtime: each #[tokio::test] runtime dies with its test
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("fake notion runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
                    .await
                    .expect("failed to bind fake notion");
                let _ = ready_tx.send(());
                axum::serve(listener, app).await.expect("fake notion server");
            });
        });

        ready_rx.recv().expect("fake notion did not start");
        (format!("http://127.0.0.1:{}", port), fake)
    })
}

fn notion_error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "object": "error",
            "status": status.as_u16(),
            "code": code,
            "message": message
        })),
    )
        .into_response()
}

fn unauthorized(headers: &HeaderMap) -> Option<Response> {
    let expected = format!("Bearer {}", TOKEN);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);

    if authorized {
        None
    } else {
        Some(notion_error(StatusCode::UNAUTHORIZED, "unauthorized", "API token is invalid."))
    }
}

fn not_found(id: &str) -> Response {
    notion_error(
        StatusCode::NOT_FOUND,
        "object_not_found",
        &format!("Could not find database with ID: {}.", id),
    )
}

fn recipe_pages() -> Value {
    json!([
        {
            "object": "page",
            "id": "recipe-1",
            "properties": {
                "Recipe": { "type": "title", "title": [{ "plain_text": "Chicken Tacos" }] },
                "Category": { "type": "select", "select": { "name": "Dinner" } },
                "Prep Time": { "type": "number", "number": 15 },
                "Cook Time": { "type": "number", "number": 20 },
                "Servings": { "type": "number", "number": 4 }
            }
        },
        {
            "object": "page",
            "id": "recipe-2",
            "properties": {
                "Recipe": { "type": "title", "title": [] },
                "Category": { "type": "select", "select": null }
            }
        }
    ])
}

fn role_pages() -> Value {
    let role = |name: &str, role: &str, budget: u32| {
        json!({
            "object": "page",
            "id": format!("role-{}", name.to_lowercase()),
            "properties": {
                "Name": { "title": [{ "plain_text": name }] },
                "Role": { "select": { "name": role } },
                "Budget Authority": { "number": budget },
                "Status": { "select": { "name": "Active" } }
            }
        })
    };
    json!([
        role("Clark", "Chief of Staff", 750),
        role("Nora", "Nutritionist", 150),
        role("Oz", "Order Taker", 300)
    ])
}

async fn query_database(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    let results = match id.as_str() {
        RECIPES_DB => recipe_pages(),
        ROLES_DB => role_pages(),
        _ => return not_found(&id),
    };
    Json(json!({
        "object": "list",
        "results": results,
        "has_more": false,
        "next_cursor": null
    }))
    .into_response()
}

async fn retrieve_database(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    if id != RECIPES_DB {
        return not_found(&id);
    }
    Json(json!({
        "object": "database",
        "id": id,
        "title": [{ "type": "text", "plain_text": "Family Recipes" }]
    }))
    .into_response()
}

async fn create_page(
    State(fake): State<FakeNotion>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    let parent = body["parent"]["database_id"].as_str().unwrap_or_default().to_string();
    if parent != MEAL_PLANS_DB && parent != GROCERY_DB {
        return not_found(&parent);
    }

    let mut created = fake.created.lock().unwrap();
    created.push(body);
    Json(json!({ "object": "page", "id": format!("page-{}", created.len()) })).into_response()
}

async fn users_me(headers: HeaderMap) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    Json(json!({
        "object": "user",
        "id": "bot-1",
        "type": "bot",
        "bot": { "workspace_name": "Blair Family" }
    }))
    .into_response()
}

async fn list_users(headers: HeaderMap) -> Response {
    if let Some(denied) = unauthorized(&headers) {
        return denied;
    }
    Json(json!({
        "object": "list",
        "results": [
            { "object": "user", "id": "u1", "type": "person" },
            { "object": "user", "id": "u2", "type": "person" },
            { "object": "user", "id": "bot-1", "type": "bot" }
        ]
    }))
    .into_response()
}

fn fake_router(fake: FakeNotion) -> Router {
    Router::new()
        .route("/v1/databases/:id/query", post(query_database))
        .route("/v1/databases/:id", get(retrieve_database))
        .route("/v1/pages", post(create_page))
        .route("/v1/users/me", get(users_me))
        .route("/v1/users", get(list_users))
        .with_state(fake)
}

pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl TestServer {
    /// Spawn the server binary wired to the fake Notion.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_recipes(RECIPES_DB).await
    }

    /// Same, but with the recipes database id pointing wherever the test needs.
    pub async fn spawn_with_recipes(recipes_db: &str) -> Result<Self> {
        let (notion_url, _) = fake_notion();
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let child = Command::new(env!("CARGO_BIN_EXE_clark-api"))
            .env("CLARK_API_PORT", port.to_string())
            .env("APP_ENV", "development")
            .env("NOTION_API_URL", notion_url)
            .env("NOTION_TOKEN", TOKEN)
            .env("RECIPES_DATABASE_ID", recipes_db)
            .env("MEAL_PLANS_DATABASE_ID", MEAL_PLANS_DB)
            .env("GROCERY_DATABASE_ID", GROCERY_DB)
            .env("ROLES_DATABASE_ID", ROLES_DB)
            .env_remove("PROPERTY_MAP_PATH")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        let server = Self { base_url, child };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(format!("{}/", self.base_url)).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
