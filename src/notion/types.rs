use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A database row. Properties stay untyped; the mapper reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichText>,
}

impl Database {
    pub fn plain_title(&self) -> Option<&str> {
        self.title
            .first()
            .and_then(|t| t.plain_text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(default)]
    pub workspace_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bot: Option<BotInfo>,
}

impl User {
    pub fn workspace_name(&self) -> Option<&str> {
        self.bot.as_ref()?.workspace_name.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub results: Vec<User>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePageRequest<'a> {
    pub parent: Parent<'a>,
    pub properties: &'a Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Parent<'a> {
    pub database_id: &'a str,
}

/// Body of a non-2xx Notion response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
