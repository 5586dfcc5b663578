//! Database and layered configuration

use crate::error::MorphError;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection URL (e.g. `sqlite::memory:`, `postgres://...`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Log every statement through sqlx
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    pub async fn connect(&self) -> Result<DatabaseConnection, MorphError> {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.max_connections)
            .sqlx_logging(self.sqlx_logging);
        tracing::info!(max_connections = self.max_connections, "connecting to database");
        Ok(Database::connect(opts).await?)
    }
}

fn default_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    // in-memory sqlite is per connection
    1
}

/// Load a typed configuration from an optional YAML file, overridden by
/// environment variables `<PREFIX><SECTION>__<KEY>`.
pub fn load_config<T: DeserializeOwned>(
    path: Option<&Path>,
    env_prefix: &str,
) -> Result<T, MorphError> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment = figment.merge(Env::prefixed(env_prefix).split("__"));
    Ok(figment.extract()?)
}
