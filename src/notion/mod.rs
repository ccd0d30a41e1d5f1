// notion - downstream document store boundary
//
// Handlers only see the `NotionApi` trait; `NotionClient` is the reqwest-backed
// implementation used by the server binary.

pub mod client;
pub mod error;
pub mod types;

pub use client::NotionClient;
pub use error::NotionError;
pub use types::{Database, Page, QueryResponse, User, UserList};

use async_trait::async_trait;
use serde_json::{Map, Value};

#[async_trait]
pub trait NotionApi: Send + Sync {
    /// POST /v1/databases/{id}/query
    async fn query_database(
        &self,
        database_id: &str,
        filter: Option<Value>,
    ) -> Result<QueryResponse, NotionError>;

    /// POST /v1/pages with a database parent
    async fn create_page(
        &self,
        database_id: &str,
        properties: Map<String, Value>,
    ) -> Result<Page, NotionError>;

    /// GET /v1/databases/{id}
    async fn retrieve_database(&self, database_id: &str) -> Result<Database, NotionError>;

    /// GET /v1/users/me
    async fn users_me(&self) -> Result<User, NotionError>;

    /// GET /v1/users
    async fn list_users(&self) -> Result<UserList, NotionError>;
}
