// In-memory Notion double and request helpers for handler tests

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::notion::types::{BotInfo, RichText};
use crate::notion::{Database, NotionApi, NotionError, Page, QueryResponse, User, UserList};
use crate::state::AppState;

pub const RECIPES_DB: &str = "recipes-db";
pub const MEAL_PLANS_DB: &str = "meal-plans-db";
pub const GROCERY_DB: &str = "grocery-db";
pub const ROLES_DB: &str = "roles-db";

#[derive(Debug, Clone)]
pub struct CreatedPage {
    pub database_id: String,
    pub properties: Map<String, Value>,
}

/// Databases are keyed by id; anything unknown answers `object_not_found`.
#[derive(Debug, Default)]
pub struct MockNotion {
    databases: HashMap<String, Vec<Page>>,
    failing: HashSet<String>,
    fail_auth: bool,
    created: Mutex<Vec<CreatedPage>>,
    queries: Mutex<Vec<(String, Option<Value>)>>,
}

impl MockNotion {
    pub fn new() -> Self {
        Self::default()
            .with_database(MEAL_PLANS_DB, Vec::new())
            .with_database(GROCERY_DB, Vec::new())
    }

    pub fn with_database(mut self, id: &str, pages: Vec<Page>) -> Self {
        self.databases.insert(id.to_string(), pages);
        self
    }

    /// Every call against `id` fails with a 503 from "Notion".
    pub fn failing_database(mut self, id: &str) -> Self {
        self.failing.insert(id.to_string());
        self
    }

    pub fn failing_auth(mut self) -> Self {
        self.fail_auth = true;
        self
    }

    pub fn created(&self) -> Vec<CreatedPage> {
        self.created.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<(String, Option<Value>)> {
        self.queries.lock().unwrap().clone()
    }

    fn database(&self, id: &str) -> Result<&Vec<Page>, NotionError> {
        if self.failing.contains(id) {
            return Err(NotionError::Api {
                status: 503,
                code: "service_unavailable".into(),
                message: "Notion is unavailable.".into(),
            });
        }
        self.databases.get(id).ok_or_else(|| NotionError::Api {
            status: 404,
            code: "object_not_found".into(),
            message: format!("Could not find database with ID: {}.", id),
        })
    }

    fn authorize(&self) -> Result<(), NotionError> {
        if self.fail_auth {
            return Err(NotionError::Api {
                status: 401,
                code: "unauthorized".into(),
                message: "API token is invalid.".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotionApi for MockNotion {
    async fn query_database(
        &self,
        database_id: &str,
        filter: Option<Value>,
    ) -> Result<QueryResponse, NotionError> {
        self.queries
            .lock()
            .unwrap()
            .push((database_id.to_string(), filter));
        let pages = self.database(database_id)?;
        Ok(QueryResponse {
            results: pages.clone(),
            ..Default::default()
        })
    }

    async fn create_page(
        &self,
        database_id: &str,
        properties: Map<String, Value>,
    ) -> Result<Page, NotionError> {
        self.database(database_id)?;
        let mut created = self.created.lock().unwrap();
        created.push(CreatedPage {
            database_id: database_id.to_string(),
            properties,
        });
        Ok(Page {
            id: format!("page-{}", created.len()),
            properties: Map::new(),
        })
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<Database, NotionError> {
        self.database(database_id)?;
        Ok(Database {
            id: database_id.to_string(),
            title: vec![RichText {
                plain_text: Some("Recipes".into()),
            }],
        })
    }

    async fn users_me(&self) -> Result<User, NotionError> {
        self.authorize()?;
        Ok(User {
            id: "bot-1".into(),
            user_type: Some("bot".into()),
            name: Some("Clark".into()),
            bot: Some(BotInfo {
                workspace_name: Some("Blair Family".into()),
            }),
        })
    }

    async fn list_users(&self) -> Result<UserList, NotionError> {
        self.authorize()?;
        Ok(UserList {
            results: vec![User::default(), User::default()],
        })
    }
}

pub fn test_config(with_roles: bool) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "RECIPES_DATABASE_ID" => Some(RECIPES_DB.into()),
        "MEAL_PLANS_DATABASE_ID" => Some(MEAL_PLANS_DB.into()),
        "GROCERY_DATABASE_ID" => Some(GROCERY_DB.into()),
        "ROLES_DATABASE_ID" if with_roles => Some(ROLES_DB.into()),
        _ => None,
    })
}

pub fn test_app(mock: impl Into<Arc<MockNotion>>) -> Router {
    test_app_with_config(mock, &test_config(false))
}

pub fn test_app_with_config(mock: impl Into<Arc<MockNotion>>, config: &AppConfig) -> Router {
    let notion: Arc<MockNotion> = mock.into();
    crate::server::router(AppState::new(notion, config))
}

pub fn page(id: &str, properties: Value) -> Page {
    Page {
        id: id.to_string(),
        properties: properties.as_object().cloned().unwrap_or_default(),
    }
}

/// Drive one request through the router and decode the JSON reply.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| json!(null));
    (status, value)
}
