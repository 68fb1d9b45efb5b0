//! Configuration management for cinegraph.
//!
//! Configuration is loaded from (in priority order):
//! 1. Command-line flags (applied by the binary after loading)
//! 2. Environment variables (CINEGRAPH_ prefix, `__` separator)
//! 3. Config file (cinegraph.toml, optional)
//! 4. Defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::CoreError;
use crate::export::DEFAULT_EXPORT_PATH;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

/// Connection settings for the graph store.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Pool size. A single interactive user needs very few.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// Where the neighborhood export is written.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_fetch_size() -> usize {
    64
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

impl AppConfig {
    /// Load from `{file_prefix}.toml` (if present) and `CINEGRAPH__*` env vars.
    pub fn load(file_prefix: &str) -> Result<Self, CoreError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("CINEGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = cfg.try_deserialize()?;
        tracing::debug!(uri = %loaded.neo4j.uri, export = %loaded.export.path.display(), "Loaded configuration");
        Ok(loaded)
    }
}
