use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::mapper::properties::PropertyMap;
use crate::notion::NotionError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid property map: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub notion: NotionConfig,
    pub databases: DatabaseIds,
    pub defaults: DefaultsConfig,
    pub properties: PropertyMap,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token. Left unset until the first downstream call needs it.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub api_url: String,
    pub version: String,
    pub timeout_secs: u64,
}

/// Notion database ids, one per document kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseIds {
    pub recipes: Option<String>,
    pub meal_plans: Option<String>,
    pub grocery: Option<String>,
    pub roles: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub meal_plan_total_cost: f64,
    pub grocery_estimated_total: f64,
    pub preferred_delivery: String,
    pub clark_budget_authority: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl DatabaseIds {
    pub fn recipes(&self) -> Result<&str, NotionError> {
        Self::require(&self.recipes, "RECIPES_DATABASE_ID")
    }

    pub fn meal_plans(&self) -> Result<&str, NotionError> {
        Self::require(&self.meal_plans, "MEAL_PLANS_DATABASE_ID")
    }

    pub fn grocery(&self) -> Result<&str, NotionError> {
        Self::require(&self.grocery, "GROCERY_DATABASE_ID")
    }

    pub fn roles(&self) -> Result<&str, NotionError> {
        Self::require(&self.roles, "ROLES_DATABASE_ID")
    }

    fn require<'a>(id: &'a Option<String>, var: &'static str) -> Result<&'a str, NotionError> {
        id.as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(NotionError::NotConfigured(var))
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (the process env in production).
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match var("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_overrides(var)
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        // Server
        if let Some(port) = var("CLARK_API_PORT").or_else(|| var("PORT")) {
            self.server.port = port.parse().unwrap_or(self.server.port);
        }

        // Notion
        if let Some(v) = var("NOTION_TOKEN") {
            self.notion.token = Some(v).filter(|t| !t.is_empty());
        }
        if let Some(v) = var("NOTION_API_URL") {
            self.notion.api_url = v;
        }
        if let Some(v) = var("NOTION_VERSION") {
            self.notion.version = v;
        }
        if let Some(v) = var("NOTION_TIMEOUT_SECS") {
            self.notion.timeout_secs = v.parse().unwrap_or(self.notion.timeout_secs);
        }

        // Databases
        self.databases.recipes = var("RECIPES_DATABASE_ID").or(self.databases.recipes.take());
        self.databases.meal_plans = var("MEAL_PLANS_DATABASE_ID").or(self.databases.meal_plans.take());
        self.databases.grocery = var("GROCERY_DATABASE_ID").or(self.databases.grocery.take());
        self.databases.roles = var("ROLES_DATABASE_ID").or(self.databases.roles.take());

        // Property names
        if let Some(path) = var("PROPERTY_MAP_PATH") {
            match PropertyMap::from_yaml_file(Path::new(&path)) {
                Ok(map) => self.properties = map,
                Err(e) => tracing::warn!("Ignoring PROPERTY_MAP_PATH: {}", e),
            }
        }

        // Security
        if let Some(v) = var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if self.environment == Environment::Production
            && self.security.enable_cors
            && self.security.cors_origins.is_empty()
        {
            tracing::warn!("SECURITY_CORS_ORIGINS is not set, allowing requests from any origin");
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            notion: NotionConfig::default(),
            databases: DatabaseIds::default(),
            defaults: DefaultsConfig::default(),
            properties: PropertyMap::default(),
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: Vec::new(), // any origin
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            notion: NotionConfig {
                timeout_secs: 15,
                ..NotionConfig::default()
            },
            databases: DatabaseIds::default(),
            defaults: DefaultsConfig::default(),
            properties: PropertyMap::default(),
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: Vec::new(),
            },
        }
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.notion.com".to_string(),
            version: "2022-06-28".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            meal_plan_total_cost: 150.0,
            grocery_estimated_total: 185.0,
            preferred_delivery: "Thursday".to_string(),
            clark_budget_authority: 500.0,
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
