//! `reqwest`-backed transport.
//!
//! Only available with the `http` feature.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;

use super::{Client, ClientConfig};
use crate::error::{DslError, Result};

/// Sends requests to the engine over HTTP.
///
/// # Example
///
/// ```no_run
/// # #[cfg(feature = "http")]
/// # fn example() -> search_dsl::Result<()> {
/// use std::sync::Arc;
/// use search_dsl::{ClientConfig, HttpClient, Request};
/// use search_dsl::query::MatchAllQuery;
///
/// let client = HttpClient::from_config(&ClientConfig::new("http://localhost:9200"))?;
/// let request = Request::new()
///     .indices(["twitter"])
///     .query(MatchAllQuery::new())
///     .client(Arc::new(client));
/// let hits = request.do_search_blocking()?;
/// # Ok(())
/// # }
/// ```
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| DslError::internal(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.config.url_for(url));
        if let Some(ref token) = self.config.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                DslError::transport(format!("request timeout: {e}"))
            } else if e.is_connect() {
                DslError::transport(format!("failed to connect to search engine: {e}"))
            } else {
                DslError::transport(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DslError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            log::warn!("search engine returned {status}: {body}");
            return Err(DslError::transport(format!("HTTP {status}: {body}")));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("has_auth_token", &self.config.auth_token.is_some())
            .field("request_timeout_ms", &self.config.request_timeout_ms)
            .finish()
    }
}

#[async_trait]
impl Client for HttpClient {
    async fn get(&self, url: &str) -> Result<Value> {
        self.send(self.request(Method::GET, url)).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        self.send(self.request(Method::POST, url).json(&body)).await
    }

    async fn put(&self, url: &str, body: Value) -> Result<Value> {
        self.send(self.request(Method::PUT, url).json(&body)).await
    }

    async fn del(&self, url: &str, body: Value) -> Result<Value> {
        let request = self.request(Method::DELETE, url);
        let request = if body.is_null() { request } else { request.json(&body) };
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::default().with_auth_token("secret");
        let client = HttpClient::from_config(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_auth_token: true"));
        assert!(!debug.contains("secret"));
    }
}
