//! Single-document CRUD.
//!
//! A [`Document`] keeps all of its settings in one map. The body-carried
//! keys (`source`, `script`, `lang`, `params`, `upsert`) and the identity
//! keys (`index`, `type`, `id`) never reach the query string; every other
//! key does.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::builder::Builder;
use crate::client::{BlockingExecutor, Client};
use crate::data::Category;
use crate::error::{DslError, Result};
use crate::rest::{QueryParams, RestPath};
use crate::util::OptionStore;

/// Keys that are never sent as query-string parameters.
const NON_PARAM_KEYS: &[&str] = &["index", "type", "id", "source", "script", "lang", "params", "upsert"];

/// One document of an index, addressed by index, type and id.
#[derive(Clone)]
pub struct Document {
    settings: Map<String, Value>,
    client: Option<Arc<dyn Client>>,
    executor: Option<BlockingExecutor>,
}

impl Document {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            settings: Map::new(),
            client: None,
            executor: None,
        }
        .index(index)
        .doc_type(doc_type)
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

    options! {
        string index / get_index => "index";
        string doc_type / get_doc_type => "type";
        string id / get_id => "id";

        /// The document body for indexing, or the partial document for updates.
        value source / get_source => "source";
        string script / get_script => "script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        /// Document to insert when an update targets a missing id.
        value upsert / get_upsert => "upsert";

        string routing / get_routing => "routing";
        string parent / get_parent => "parent";
        string timestamp / get_timestamp => "timestamp";
        value ttl / get_ttl => "ttl";
        choice consistency / get_consistency => "consistency" ["one", "quorum", "all"];
        choice replication / get_replication => "replication" ["sync", "async"];
        bool refresh / get_refresh => "refresh";
        uint version / get_version => "version";
        choice version_type / get_version_type => "version_type" ["internal", "external"];
        string percolate / get_percolate => "percolate";
        choice op_type / get_op_type => "op_type" ["index", "create"];
        list add_field + fields / get_fields => "fields";
        string timeout / get_timeout => "timeout";
        uint retry_on_conflict / get_retry_on_conflict => "retry_on_conflict";
        bool realtime / get_realtime => "realtime";
        string preference / get_preference => "preference";
    }

    /// Query-string parameters: every setting except the identity and body keys.
    pub fn client_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.extend_from(&self.settings, NON_PARAM_KEYS);
        params
    }

    fn require(&self, key: &'static str) -> Result<&str> {
        self.settings
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(DslError::MissingField(key))
    }

    fn require_client(&self) -> Result<&Arc<dyn Client>> {
        self.client.as_ref().ok_or(DslError::NoClient)
    }

    /// `/{index}/{type}` plus the id and `suffix` when given.
    fn rest_path(&self, with_id: bool, suffix: &str) -> Result<String> {
        let mut path = RestPath::new()
            .segment(self.require("index")?)
            .segment(self.require("type")?);
        if with_id {
            path = path.segment(self.require("id")?);
        }
        Ok(path.segment(suffix).params(self.client_params()).to_string())
    }

    fn copy_setting(&self, target: &mut Map<String, Value>, key: &str, as_key: &str) {
        if let Some(value) = self.settings.get(key) {
            target.insert(as_key.to_string(), value.clone());
        }
    }

    /// Fetch the document.
    pub async fn do_get(&self) -> Result<Value> {
        let client = self.require_client()?;
        let url = self.rest_path(true, "")?;
        log::debug!("GET {url}");
        client.get(&url).await
    }

    /// Index the source. Without an id the engine assigns one.
    pub async fn do_index(&self) -> Result<Value> {
        let client = self.require_client()?;
        let source = self.get_source().cloned().ok_or(DslError::MissingField("source"))?;
        if self.get_id().is_some_and(|id| !id.is_empty()) {
            let url = self.rest_path(true, "")?;
            log::debug!("PUT {url}");
            client.put(&url, source).await
        } else {
            let url = self.rest_path(false, "")?;
            log::debug!("POST {url}");
            client.post(&url, source).await
        }
    }

    /// Update by script, by partial document, or both.
    pub async fn do_update(&self) -> Result<Value> {
        let client = self.require_client()?;
        if self.get_script().is_none() && self.get_source().is_none() {
            return Err(DslError::MissingField("script or source"));
        }
        let url = self.rest_path(true, "_update")?;

        let mut body = Map::new();
        self.copy_setting(&mut body, "script", "script");
        self.copy_setting(&mut body, "lang", "lang");
        self.copy_setting(&mut body, "params", "params");
        self.copy_setting(&mut body, "upsert", "upsert");
        self.copy_setting(&mut body, "source", "doc");

        log::debug!("POST {url}");
        client.post(&url, Value::Object(body)).await
    }

    pub async fn do_delete(&self) -> Result<Value> {
        let client = self.require_client()?;
        let url = self.rest_path(true, "")?;
        log::debug!("DELETE {url}");
        client.del(&url, Value::Null).await
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

    pub fn do_get_blocking(&self) -> Result<Value> {
        self.block_on(self.do_get())
    }

    pub fn do_index_blocking(&self) -> Result<Value> {
        self.block_on(self.do_index())
    }

    pub fn do_update_blocking(&self) -> Result<Value> {
        self.block_on(self.do_update())
    }

    pub fn do_delete_blocking(&self) -> Result<Value> {
        self.block_on(self.do_delete())
    }
}

impl OptionStore for Document {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.settings.insert(key.to_string(), value);
    }
}

impl Builder for Document {
    fn category(&self) -> Category {
        Category::Document
    }

    fn to_value(&self) -> Value {
        Value::Object(self.settings.clone())
    }
}

impl_builder!(@display Document);

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("settings", &self.settings)
            .field("has_client", &self.client.is_some())
            .field("executor", &self.executor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_keep_call_order() {
        let doc = Document::new("twitter", "tweet")
            .id("1")
            .source(json!({"user": "kimchy"}))
            .refresh(true);
        assert_eq!(doc.category(), Category::Document);
        assert_eq!(
            doc.to_string(),
            r#"{"index":"twitter","type":"tweet","id":"1","source":{"user":"kimchy"},"refresh":true}"#
        );
    }

    #[test]
    fn test_client_params_skip_body_keys() {
        let doc = Document::new("twitter", "tweet")
            .id("1")
            .script("ctx._source.count += n")
            .params(json!({"n": 1}))
            .routing("kimchy")
            .consistency("QUORUM")
            .consistency("most")
            .add_field("user")
            .add_field("date")
            .version(3);
        assert_eq!(doc.get_consistency(), Some("quorum"));
        assert_eq!(
            doc.client_params().to_string(),
            "routing=kimchy&consistency=quorum&fields=user,date&version=3"
        );
    }

    #[test]
    fn test_missing_identity_is_reported() {
        let doc = Document::new("twitter", "");
        assert!(matches!(doc.rest_path(false, ""), Err(DslError::MissingField("type"))));

        let doc = Document::new("twitter", "tweet");
        assert!(matches!(doc.rest_path(true, ""), Err(DslError::MissingField("id"))));
        assert_eq!(doc.rest_path(false, "").unwrap(), "/twitter/tweet");
    }

    #[test]
    fn test_no_client() {
        let doc = Document::new("twitter", "tweet").id("1");
        let err = tokio_test::block_on(doc.do_get()).unwrap_err();
        assert!(matches!(err, DslError::NoClient));
        assert!(matches!(doc.do_delete_blocking(), Err(DslError::NoClient)));
    }
}
