//! # search-dsl
//!
//! Typed builders for the JSON request bodies of a search engine's REST
//! query DSL: queries, filters, facets, sorting, highlighting and
//! suggestions, plus `Request` and `Document` objects that hand the
//! serialized body to a pluggable transport.
//!
//! ## Features
//!
//! - One builder per DSL node, each rendering to exactly the wire keys the engine expects
//! - Category tags checked where builders are composed
//! - Field-scoped builders with a move-on-rename field entry
//! - Unified REST path and query-string construction
//! - Async transport trait with an optional `reqwest` implementation (`http` feature)
//!
//! ```
//! use search_dsl::query::TermQuery;
//! use search_dsl::Request;
//!
//! let body = Request::new()
//!     .query(TermQuery::new("status", "active"))
//!     .size(10)
//!     .from(0)
//!     .to_string();
//! assert_eq!(body, r#"{"query":{"term":{"status":{"term":"active"}}},"size":10,"from":0}"#);
//! ```

#[macro_use]
mod macros;

mod builder;
mod data;
mod error;
mod util;

pub mod client;
pub mod document;
pub mod facet;
pub mod filter;
pub mod geo;
pub mod highlight;
pub mod query;
pub mod request;
pub mod rest;
pub mod script_field;
pub mod sort;
pub mod suggest;

// Re-exports for the public API
pub use builder::{Builder, Facet, Filter, Query, Suggester};
pub use client::{BlockingExecutor, Client, ClientConfig};
#[cfg(feature = "http")]
pub use client::http::HttpClient;
pub use data::{
    Category, Node, is_dsl_object, is_facet, is_filter, is_generator, is_geo_point,
    is_highlight, is_indexed_shape, is_query, is_script_field, is_shape, is_sort, is_suggest,
};
pub use document::Document;
pub use error::{DslError, Result};
pub use geo::{GeoPoint, IndexedShape, Shape};
pub use highlight::{Highlight, HighlightField};
pub use request::Request;
pub use script_field::ScriptField;
pub use sort::{Sort, SortSpec};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
