//! Client configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sheetkit_core::{GridError, GridResult};

/// Base URL of the public service.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";
/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_ACCESS_TOKEN: &str = "SHEETKIT_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "SHEETKIT_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SHEETKIT_TIMEOUT_SECS";

/// Where and how to reach the service.
///
/// The access token is an OAuth bearer token obtained elsewhere; this
/// crate does not authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `SHEETKIT_*` environment variables.
    pub fn from_env() -> GridResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> GridResult<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            config.access_token = Some(token);
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                GridError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{timeout}'"))
            })?;
        }
        Ok(config)
    }

    /// Load a YAML config file. Missing keys keep their defaults.
    ///
    /// ```yaml
    /// base_url: https://sheets.googleapis.com/v4
    /// access_token: ya29.a0...
    /// timeout_secs: 60
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> GridResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.access_token.is_none());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (ENV_ACCESS_TOKEN, "token-123"),
            (ENV_BASE_URL, "http://localhost:8080"),
            (ENV_TIMEOUT_SECS, "5"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| (*v).to_string())).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("token-123"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_lookup_ignores_empty() {
        let config = ClientConfig::from_lookup(|_| Some(String::new())).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(|k| (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "access_token: abc\ntimeout_secs: 90").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, 90);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file_errors() {
        let err = ClientConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, GridError::Io(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: [1, 2]").unwrap();
        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, GridError::Yaml(_)));
    }
}
