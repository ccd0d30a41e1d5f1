use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::time::Duration;
use url::Url;

use super::types::{CreatePageRequest, ErrorBody, Parent};
use super::{Database, NotionApi, NotionError, Page, QueryResponse, User, UserList};
use crate::config::NotionConfig;

/// reqwest-backed Notion REST client.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    version: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // Url::join drops the last path segment unless it ends with '/'
        let mut base = config.api_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            http,
            base_url: Url::parse(&base)?,
            token: config.token.clone(),
            version: config.version.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, NotionError> {
        let token = self
            .token
            .as_deref()
            .ok_or(NotionError::NotConfigured("NOTION_TOKEN"))?;
        let url = self.base_url.join(path)?;

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header("Notion-Version", &self.version))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        Err(NotionError::Api {
            status: body.status.unwrap_or(status.as_u16()),
            code: body.code.unwrap_or_else(|| "unknown".to_string()),
            message: body
                .message
                .unwrap_or_else(|| format!("Notion responded with {}", status)),
        })
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        filter: Option<Value>,
    ) -> Result<QueryResponse, NotionError> {
        let body = match filter {
            Some(filter) => json!({ "filter": filter }),
            None => json!({}),
        };
        let request = self
            .request(Method::POST, &format!("v1/databases/{}/query", database_id))?
            .json(&body);
        self.send(request).await
    }

    async fn create_page(
        &self,
        database_id: &str,
        properties: Map<String, Value>,
    ) -> Result<Page, NotionError> {
        let body = CreatePageRequest {
            parent: Parent { database_id },
            properties: &properties,
        };
        let request = self.request(Method::POST, "v1/pages")?.json(&body);
        self.send(request).await
    }

    async fn retrieve_database(&self, database_id: &str) -> Result<Database, NotionError> {
        let request = self.request(Method::GET, &format!("v1/databases/{}", database_id))?;
        self.send(request).await
    }

    async fn users_me(&self) -> Result<User, NotionError> {
        let request = self.request(Method::GET, "v1/users/me")?;
        self.send(request).await
    }

    async fn list_users(&self) -> Result<UserList, NotionError> {
        let request = self.request(Method::GET, "v1/users")?;
        self.send(request).await
    }
}
