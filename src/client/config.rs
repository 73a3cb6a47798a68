//! Transport configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

/// Connection settings for an HTTP transport.
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that request paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = timeout_ms;
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Join the base URL and a request path without doubling the slash.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            auth_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:9200");
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.request_timeout_ms, 30_000);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_builder_and_url_join() {
        let config = ClientConfig::new("http://search:9200/")
            .with_request_timeout_ms(1_000)
            .with_auth_token("secret");
        assert_eq!(config.request_timeout_ms, 1_000);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.url_for("/idx/_search"), "http://search:9200/idx/_search");
        assert_eq!(config.url_for("_count"), "http://search:9200/_count");
    }

    #[test]
    fn test_serialize_skips_missing_token() {
        let json = serde_json::to_value(ClientConfig::default()).unwrap();
        assert!(json.get("auth_token").is_none());
    }
}
