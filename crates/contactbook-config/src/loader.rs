// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./contactbook.toml` > `~/.config/contactbook/contactbook.toml`
//! > `/etc/contactbook/contactbook.toml`, with `CONTACTBOOK_*` environment
//! overrides on top and the bare `PORT` variable honored for the server port.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ContactbookConfig;

/// Local config file name.
pub const LOCAL_CONFIG_FILE: &str = "contactbook.toml";

/// System-wide config file path.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/contactbook/contactbook.toml";

/// User config file under the XDG config dir, if one can be determined.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("contactbook").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/contactbook/contactbook.toml`
/// 3. `~/.config/contactbook/contactbook.toml`
/// 4. `./contactbook.toml`
/// 5. `PORT`
/// 6. `CONTACTBOOK_*` environment variables
pub fn load_config() -> Result<ContactbookConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ContactbookConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ContactbookConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ContactbookConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ContactbookConfig::default()))
        .merge(Toml::file(path))
        .merge(port_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ContactbookConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_file().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(port_provider())
        .merge(env_provider())
}

/// Hosting platforms hand the listen port over as a bare `PORT` variable.
fn port_provider() -> Env {
    Env::raw().only(&["PORT"]).map(|_| "server.port".into())
}

/// Uses `Env::map()` rather than `Env::split("_")` so keys such as
/// `CONTACTBOOK_STORAGE_DATABASE_PATH` map to `storage.database_path`,
/// not `storage.database.path`. Keys arrive with the variable's own case.
fn env_provider() -> Env {
    Env::prefixed("CONTACTBOOK_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("client_", "client.", 1);
        mapped.into()
    })
}
