//! Search requests.
//!
//! A [`Request`] aggregates a query, filters, facets, sorting, highlighting,
//! suggestions and paging into one search body. Body keys are emitted in the
//! order they were first set. Routing-style settings go to the query string
//! instead of the body.
//!
//! Execution hands the body to an injected [`Client`]:
//!
//! | method | verb | endpoint | body |
//! |---|---|---|---|
//! | `do_search` | POST | `_search` | full body |
//! | `do_count` | POST | `_count` | `{"query": ...}` |
//! | `do_delete_by_query` | DELETE | `_query` | `{"query": ...}` |

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::builder::{Builder, Facet, Filter, Query, Suggester};
use crate::client::{BlockingExecutor, Client};
use crate::data::Category;
use crate::error::{DslError, Result};
use crate::highlight::Highlight;
use crate::rest::{QueryParams, RestPath};
use crate::script_field::ScriptField;
use crate::sort::SortSpec;
use crate::util::body::{edit_array, edit_object};
use crate::util::{OptionStore, extend, pick};

const SEARCH_TYPES: &[&str] = &[
    "dfs_query_then_fetch",
    "dfs_query_and_fetch",
    "query_then_fetch",
    "query_and_fetch",
    "scan",
    "count",
];

/// Merge every entry of a `{name: {...}}` value into the object under `key`.
fn merge_named(body: &mut Map<String, Value>, key: &str, value: Value) {
    edit_object(body, key, |target| {
        if let Value::Object(entries) = value {
            extend(target, entries);
        }
    });
}

/// A search request body plus the indices, types and parameters it targets.
#[derive(Clone, Default)]
pub struct Request {
    body: Map<String, Value>,
    params: Map<String, Value>,
    indices: Vec<String>,
    types: Vec<String>,
    client: Option<Arc<dyn Client>>,
    executor: Option<BlockingExecutor>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `client` for the `do_*` methods.
    pub fn client(mut self, client: Arc<dyn Client>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn get_client(&self) -> Option<&Arc<dyn Client>> {
        self.client.as_ref()
    }

    /// Run the `*_blocking` methods on `executor` instead of the shared one.
    pub fn executor(mut self, executor: BlockingExecutor) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Restrict the search to these indices. An empty list searches all.
    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = indices.into_iter().map(Into::into).collect();
        self
    }

    /// Append one index to the search targets.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.indices.push(index.into());
        self
    }

    pub fn get_indices(&self) -> &[String] {
        &self.indices
    }

    /// Restrict the search to these document types.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Append one document type to the search targets.
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.types.push(doc_type.into());
        self
    }

    pub fn get_types(&self) -> &[String] {
        &self.types
    }

    options! {
        child query / get_query => "query": Query;
        /// Filter applied to the hits but not to facets.
        child filter / get_filter => "filter": Filter;
        child post_filter / get_post_filter => "post_filter": Filter;
        object highlight / get_highlight => "highlight": Highlight;
        uint size / get_size => "size";
        uint from / get_from => "from";
        list add_field + fields / get_fields => "fields";
        /// `false`, a field pattern, a list of patterns, or `{include, exclude}`.
        value source / get_source => "_source";
        string timeout / get_timeout => "timeout";
        bool explain / get_explain => "explain";
        bool version / get_version => "version";
        bool track_scores / get_track_scores => "track_scores";
        float min_score / get_min_score => "min_score";
    }

    /// Add a facet. A facet with the same name is replaced.
    pub fn facet(mut self, facet: impl Facet) -> Self {
        merge_named(&mut self.body, "facets", facet.to_value());
        self
    }

    pub fn get_facets(&self) -> Option<&Map<String, Value>> {
        self.body.get("facets").and_then(Value::as_object)
    }

    /// Append one sort clause. A field order other than `asc`/`desc` is dropped.
    pub fn sort(mut self, sort: impl Into<SortSpec>) -> Self {
        if let Some(value) = sort.into().to_value() {
            edit_array(&mut self.body, "sort", |sorts| sorts.push(value));
        }
        self
    }

    /// Replace the sort list.
    pub fn sorts<I, S>(mut self, sorts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SortSpec>,
    {
        let sorts = sorts
            .into_iter()
            .filter_map(|s| s.into().to_value())
            .collect();
        self.body.insert("sort".to_string(), Value::Array(sorts));
        self
    }

    pub fn get_sort(&self) -> &[Value] {
        self.body
            .get("sort")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Text shared by every suggester that does not set its own.
    pub fn suggest_text(mut self, text: impl Into<String>) -> Self {
        let text = Value::String(text.into());
        edit_object(&mut self.body, "suggest", |suggest| {
            suggest.insert("text".to_string(), text);
        });
        self
    }

    /// Add a suggester. A suggester with the same name is replaced.
    pub fn suggest(mut self, suggester: impl Suggester) -> Self {
        merge_named(&mut self.body, "suggest", suggester.to_value());
        self
    }

    pub fn get_suggest(&self) -> Option<&Map<String, Value>> {
        self.body.get("suggest").and_then(Value::as_object)
    }

    pub fn script_field(mut self, field: ScriptField) -> Self {
        merge_named(&mut self.body, "script_fields", field.to_value());
        self
    }

    pub fn get_script_fields(&self) -> Option<&Map<String, Value>> {
        self.body.get("script_fields").and_then(Value::as_object)
    }

    /// Multiply the scores of hits from `index` by `boost`.
    pub fn index_boost(mut self, index: impl Into<String>, boost: f64) -> Self {
        let index = index.into();
        edit_object(&mut self.body, "indices_boost", |boosts| {
            boosts.insert(index, Value::from(boost));
        });
        self
    }

    pub fn get_indices_boost(&self) -> Option<&Map<String, Value>> {
        self.body.get("indices_boost").and_then(Value::as_object)
    }

    fn set_param(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    pub fn routing(self, routing: impl Into<String>) -> Self {
        self.set_param("routing", Value::String(routing.into()))
    }

    pub fn get_routing(&self) -> Option<&str> {
        self.param_str("routing")
    }

    pub fn preference(self, preference: impl Into<String>) -> Self {
        self.set_param("preference", Value::String(preference.into()))
    }

    pub fn get_preference(&self) -> Option<&str> {
        self.param_str("preference")
    }

    pub fn search_type(self, search_type: &str) -> Self {
        match pick("search_type", search_type, SEARCH_TYPES) {
            Some(search_type) => self.set_param("search_type", Value::String(search_type)),
            None => self,
        }
    }

    pub fn get_search_type(&self) -> Option<&str> {
        self.param_str("search_type")
    }

    /// Keep a scroll context alive for this long, e.g. `5m`.
    pub fn scroll(self, scroll: impl Into<String>) -> Self {
        self.set_param("scroll", Value::String(scroll.into()))
    }

    pub fn get_scroll(&self) -> Option<&str> {
        self.param_str("scroll")
    }

    /// `/{indices}/{types}/{endpoint}?{params}`.
    ///
    /// When only types are set the index segment becomes `_all`.
    pub fn get_rest_path(&self, endpoint: &str) -> String {
        let mut path = RestPath::new();
        if self.indices.is_empty() && !self.types.is_empty() {
            path = path.segment("_all");
        } else {
            path = path.list(self.indices.as_slice());
        }
        path.list(self.types.as_slice())
            .segment(endpoint)
            .params(QueryParams::from(&self.params))
            .to_string()
    }

    fn require_client(&self) -> Result<&Arc<dyn Client>> {
        self.client.as_ref().ok_or(DslError::NoClient)
    }

    fn query_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(query) = self.get_query() {
            body.insert("query".to_string(), query.clone());
        }
        Value::Object(body)
    }

    /// Run the search.
    pub async fn do_search(&self) -> Result<Value> {
        let client = self.require_client()?;
        let url = self.get_rest_path("_search");
        log::debug!("POST {url}");
        client.post(&url, self.to_value()).await
    }

    /// Count the hits of the query. Without a query every document is counted.
    pub async fn do_count(&self) -> Result<Value> {
        let client = self.require_client()?;
        let url = self.get_rest_path("_count");
        log::debug!("POST {url}");
        client.post(&url, self.query_body()).await
    }

    /// Delete every document matching the query. A query is required.
    pub async fn do_delete_by_query(&self) -> Result<Value> {
        let client = self.require_client()?;
        if self.get_query().is_none() {
            return Err(DslError::MissingField("query"));
        }
        let url = self.get_rest_path("_query");
        log::debug!("DELETE {url}");
        client.del(&url, self.query_body()).await
    }

    fn block_on<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        self.require_client()?;
        match &self.executor {
            Some(executor) => executor.run(future),
            None => BlockingExecutor::shared()?.run(future),
        }
    }

    pub fn do_search_blocking(&self) -> Result<Value> {
        self.block_on(self.do_search())
    }

    pub fn do_count_blocking(&self) -> Result<Value> {
        self.block_on(self.do_count())
    }

    pub fn do_delete_by_query_blocking(&self) -> Result<Value> {
        self.block_on(self.do_delete_by_query())
    }
}

impl OptionStore for Request {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl Builder for Request {
    fn category(&self) -> Category {
        Category::Request
    }

    fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl_builder!(@display Request);

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("body", &self.body)
            .field("params", &self.params)
            .field("indices", &self.indices)
            .field("types", &self.types)
            .field("has_client", &self.client.is_some())
            .field("executor", &self.executor)
            .finish()
    }
}
