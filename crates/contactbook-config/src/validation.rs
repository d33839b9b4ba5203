// SPDX-FileCopyrightText: 2026 Contactbook Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::ContactbookConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of failing on the first.
pub fn validate_config(config: &ContactbookConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else if host.parse::<std::net::IpAddr>().is_err()
        && !host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        fail(format!(
            "server.host `{host}` is not a valid IP address or hostname"
        ));
    }

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        fail(format!(
            "server.log_level `{}` must be one of {}",
            config.server.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    for origin in &config.server.allowed_origins {
        if !is_http_url(origin) {
            fail(format!(
                "server.allowed_origins entry `{origin}` must start with http:// or https://"
            ));
        }
    }

    if config.storage.database_path.trim().is_empty() {
        fail("storage.database_path must not be empty".to_string());
    }

    if !is_http_url(&config.client.api_url) {
        fail(format!(
            "client.api_url `{}` must start with http:// or https://",
            config.client.api_url
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&ContactbookConfig::default()).is_ok());
    }

    #[test]
    fn empty_database_path_fails() {
        let mut config = ContactbookConfig::default();
        config.storage.database_path = " ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "database_path"));
    }

    #[test]
    fn origin_without_scheme_fails() {
        let mut config = ContactbookConfig::default();
        config.server.allowed_origins = vec!["example.com".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "allowed_origins"));
    }

    #[test]
    fn unknown_log_level_fails() {
        let mut config = ContactbookConfig::default();
        config.server.log_level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "log_level"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ContactbookConfig::default();
        config.server.host = String::new();
        config.client.api_url = "ftp://nope".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(has_error(&errors, "server.host"));
        assert!(has_error(&errors, "client.api_url"));
    }

    #[test]
    fn localhost_api_url_passes() {
        let mut config = ContactbookConfig::default();
        config.client.api_url = "http://localhost:5000".to_string();
        config.server.host = "localhost".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
