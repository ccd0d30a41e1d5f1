use std::sync::Arc;

use crate::config::{AppConfig, DatabaseIds, DefaultsConfig};
use crate::mapper::PropertyMap;
use crate::notion::{NotionApi, NotionClient, NotionError};

/// Read-only per-process state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub notion: Arc<dyn NotionApi>,
    pub databases: Arc<DatabaseIds>,
    pub properties: Arc<PropertyMap>,
    pub defaults: Arc<DefaultsConfig>,
}

impl AppState {
    pub fn new(notion: Arc<dyn NotionApi>, config: &AppConfig) -> Self {
        Self {
            notion,
            databases: Arc::new(config.databases.clone()),
            properties: Arc::new(config.properties.clone()),
            defaults: Arc::new(config.defaults.clone()),
        }
    }

    /// State backed by the real Notion API.
    pub fn from_config(config: &AppConfig) -> Result<Self, NotionError> {
        let client = NotionClient::new(&config.notion)?;
        Ok(Self::new(Arc::new(client), config))
    }
}
