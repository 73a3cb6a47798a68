//! Transport boundary.
//!
//! [`Request`](crate::Request) and [`Document`](crate::Document) never talk to
//! the network themselves. They build a REST path and a JSON body and hand
//! both to a [`Client`] that the caller injects explicitly.
//!
//! # Module Structure
//!
//! - `config`: [`ClientConfig`], connection settings for transports
//! - `executor`: [`BlockingExecutor`], drives execution futures for synchronous callers
//! - `http`: [`HttpClient`](http::HttpClient), a `reqwest` transport (feature `http`)

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod config;
pub mod executor;
#[cfg(feature = "http")]
pub mod http;

pub use config::ClientConfig;
pub use executor::BlockingExecutor;

/// An HTTP-verb dispatcher for the search engine's REST API.
///
/// `url` is a path plus query string as produced by
/// [`RestPath`](crate::rest::RestPath), e.g. `/idx/_search?routing=a`.
/// Implementations resolve it against their own base URL.
#[async_trait]
pub trait Client: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value>;

    async fn post(&self, url: &str, body: Value) -> Result<Value>;

    async fn put(&self, url: &str, body: Value) -> Result<Value>;

    async fn del(&self, url: &str, body: Value) -> Result<Value>;
}
