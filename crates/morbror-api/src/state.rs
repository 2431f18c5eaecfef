//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The catalog is loaded once before the server starts and never changes,
//! so it is shared as a plain `Arc<Catalog>` with no lock around it.

use std::path::PathBuf;
use std::sync::Arc;

use morbror_catalog::{Catalog, LoadOrder, ParseLoadOrderError};
use thiserror::Error;

/// Origin the bundled web frontend is served from during development.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Directory holding the course `*.json` documents.
    pub data_dir: PathBuf,
    /// Order in which course files are loaded.
    pub load_order: LoadOrder,
    /// Origins allowed to call the API from a browser.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            data_dir: PathBuf::from("data"),
            load_order: LoadOrder::Filesystem,
            cors_allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables.
    ///
    /// | Variable               | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `PORT`                 | `8000`                                    |
    /// | `COURSE_DATA_DIR`      | `data` next to the executable, else `./data` |
    /// | `COURSE_LOAD_ORDER`    | `filesystem`                              |
    /// | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` (comma-separated) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self {
            data_dir: default_data_dir(),
            ..Self::default()
        };

        if let Some(raw) = lookup("PORT") {
            config.port = raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?;
        }
        if let Some(dir) = lookup("COURSE_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("COURSE_LOAD_ORDER") {
            config.load_order = raw.parse()?;
        }
        if let Some(raw) = lookup("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(config)
    }
}

/// Invalid value in the server environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("COURSE_LOAD_ORDER: {0}")]
    InvalidLoadOrder(#[from] ParseLoadOrderError),
}

/// `data` next to the running executable, falling back to `./data`.
fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state around a loaded catalog with default configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(AppConfig::default(), catalog)
    }

    /// Create state around a loaded catalog with explicit configuration.
    pub fn with_config(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
