// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of silently falling back to a default.

use serde::{Deserialize, Serialize};

/// Origin of the deployed frontend, allowed by default for CORS.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://contact-form-u2xv.onrender.com";

/// API base URL used by the client when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://contact-form1-l5qc.onrender.com/";

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactbookConfig {
    /// HTTP API server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Contact store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Client settings used by the CLI subcommands.
    #[serde(default)]
    pub client: ClientConfig,
}

/// HTTP API server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. The bare `PORT` env var also sets this.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to make cross-origin requests (with credentials).
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contact store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("contactbook").join("contacts.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("contacts.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the contact API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
