//! Filters on exact values.

use serde_json::{Map, Value, json};

use crate::builder::Filter;
use crate::util::{FieldBody, KeyedBody, regexp_flags};

/// Matches every document.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAllFilter {
    body: KeyedBody,
}

impl MatchAllFilter {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("match_all"),
        }
    }

    filter_meta!();
}

impl Default for MatchAllFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(MatchAllFilter, Filter);
impl Filter for MatchAllFilter {}

/// Documents whose field holds the exact term: `{"term": {field: term}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermFilter {
    body: FieldBody,
}

impl TermFilter {
    pub fn new(field: impl Into<String>, term: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("term", field, term.into()),
        }
    }

    field_scoped!();

    pub fn term(mut self, term: impl Into<Value>) -> Self {
        self.body.set_value(term.into());
        self
    }

    pub fn get_term(&self) -> &Value {
        self.body.value()
    }

    filter_meta!();
}

impl_builder!(@siblings TermFilter, Filter);
impl Filter for TermFilter {}

const LOOKUP_KEYS: &[&str] = &["index", "type", "id", "path", "routing", "cache"];

/// Documents whose field holds any of the terms.
///
/// The field value is either a list of terms or a terms-lookup object
/// (`index`, `type`, `id`, `path`, `routing`, `cache`) that fetches the
/// terms from another document. Setting a lookup key switches to lookup
/// mode; setting terms switches back. Only one mode is present at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsFilter {
    body: FieldBody,
}

impl TermsFilter {
    pub fn new<I, V>(field: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        Self {
            body: FieldBody::new("terms", field, Value::Array(terms)),
        }
    }

    /// Start in lookup mode with an empty lookup object.
    pub fn lookup(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("terms", field, Value::Object(Map::new())),
        }
    }

    field_scoped!();

    /// Append a term. Leaves lookup mode if it was active.
    pub fn add_term(mut self, term: impl Into<Value>) -> Self {
        let mut terms = self.get_terms().to_vec();
        terms.push(term.into());
        self.body.set_value(Value::Array(terms));
        self
    }

    /// Replace the terms. Leaves lookup mode if it was active.
    pub fn terms<I, V>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        self.body.set_value(Value::Array(terms));
        self
    }

    /// The terms, empty in lookup mode.
    pub fn get_terms(&self) -> &[Value] {
        self.body.value().as_array().map_or(&[], Vec::as_slice)
    }

    pub fn is_lookup(&self) -> bool {
        self.body.value().is_object()
    }

    fn set_lookup(mut self, key: &str, value: Value) -> Self {
        debug_assert!(LOOKUP_KEYS.contains(&key));
        self.body.edit_options(|options| {
            options.insert(key.to_string(), value);
        });
        self
    }

    pub fn index(self, index: impl Into<String>) -> Self {
        self.set_lookup("index", Value::String(index.into()))
    }

    pub fn get_index(&self) -> Option<&str> {
        self.body.option("index").and_then(Value::as_str)
    }

    pub fn doc_type(self, doc_type: impl Into<String>) -> Self {
        self.set_lookup("type", Value::String(doc_type.into()))
    }

    pub fn get_doc_type(&self) -> Option<&str> {
        self.body.option("type").and_then(Value::as_str)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.set_lookup("id", Value::String(id.into()))
    }

    pub fn get_id(&self) -> Option<&str> {
        self.body.option("id").and_then(Value::as_str)
    }

    /// Field of the lookup document holding the terms.
    pub fn path(self, path: impl Into<String>) -> Self {
        self.set_lookup("path", Value::String(path.into()))
    }

    pub fn get_path(&self) -> Option<&str> {
        self.body.option("path").and_then(Value::as_str)
    }

    pub fn routing(self, routing: impl Into<String>) -> Self {
        self.set_lookup("routing", Value::String(routing.into()))
    }

    pub fn get_routing(&self) -> Option<&str> {
        self.body.option("routing").and_then(Value::as_str)
    }

    /// Whether the looked-up terms are cached.
    pub fn lookup_cache(self, cache: bool) -> Self {
        self.set_lookup("cache", Value::Bool(cache))
    }

    pub fn get_lookup_cache(&self) -> Option<bool> {
        self.body.option("cache").and_then(Value::as_bool)
    }

    options! {
        choice execution / get_execution => "execution" [
            "plain",
            "bool",
            "and",
            "or",
            "bool_nocache",
            "and_nocache",
            "or_nocache",
        ];
    }

    filter_meta!();
}

impl_builder!(@siblings TermsFilter, Filter);
impl Filter for TermsFilter {}

/// Documents whose field has a term starting with the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixFilter {
    body: FieldBody,
}

impl PrefixFilter {
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("prefix", field, Value::String(prefix.into())),
        }
    }

    field_scoped!();

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.body.set_value(Value::String(prefix.into()));
        self
    }

    pub fn get_prefix(&self) -> Option<&str> {
        self.body.value().as_str()
    }

    filter_meta!();
}

impl_builder!(@siblings PrefixFilter, Filter);
impl Filter for PrefixFilter {}

/// Documents matching a regular expression.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexpFilter {
    body: FieldBody,
}

impl RegexpFilter {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("regexp", field, json!({ "value": value.into() })),
        }
    }

    field_scoped!();

    pub fn flags(mut self, flags: &[&str]) -> Self {
        if let Some(flags) = regexp_flags(flags) {
            self.body.edit_options(|options| {
                options.insert("flags".into(), Value::String(flags));
            });
        }
        self
    }

    pub fn get_flags(&self) -> Option<&str> {
        self.body.option("flags").and_then(Value::as_str)
    }

    options! {
        value value / get_value => "value";
        int flags_value / get_flags_value => "flags_value";
    }

    filter_meta!();
}

impl_builder!(RegexpFilter, Filter);
impl Filter for RegexpFilter {}

/// Documents where the field has a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsFilter {
    body: KeyedBody,
}

impl ExistsFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("exists"),
        }
        .field(field)
    }

    options! {
        string field / get_field => "field";
    }

    filter_meta!();
}

impl_builder!(ExistsFilter, Filter);
impl Filter for ExistsFilter {}

/// Documents where the field is missing or null.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingFilter {
    body: KeyedBody,
}

impl MissingFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("missing"),
        }
        .field(field)
    }

    options! {
        string field / get_field => "field";
        /// Match documents where the field does not exist at all.
        bool existence / get_existence => "existence";
        /// Match documents where the field holds an explicit null.
        bool null_value / get_null_value => "null_value";
    }

    filter_meta!();
}

impl_builder!(MissingFilter, Filter);
impl Filter for MissingFilter {}

/// Documents with the given ids.
#[derive(Debug, Clone, PartialEq)]
pub struct IdsFilter {
    body: KeyedBody,
}

impl IdsFilter {
    pub fn new<I, V>(ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            body: KeyedBody::new("ids"),
        }
        .values(ids)
    }

    options! {
        list add_value + values / get_values => "values";
        list add_doc_type + doc_types / get_doc_types => "type";
    }

    filter_meta!();
}

impl_builder!(IdsFilter, Filter);
impl Filter for IdsFilter {}

/// Documents of one mapping type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeFilter {
    body: KeyedBody,
}

impl TypeFilter {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("type"),
        }
        .doc_type(doc_type)
    }

    options! {
        string doc_type / get_doc_type => "value";
    }

    filter_meta!();
}

impl_builder!(TypeFilter, Filter);
impl Filter for TypeFilter {}

/// Caps the number of documents examined per shard.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitFilter {
    body: KeyedBody,
}

impl LimitFilter {
    pub fn new(limit: u64) -> Self {
        Self {
            body: KeyedBody::new("limit"),
        }
        .limit(limit)
    }

    options! {
        uint limit / get_limit => "value";
    }

    filter_meta!();
}

impl_builder!(LimitFilter, Filter);
impl Filter for LimitFilter {}

/// Documents for which a script returns true.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFilter {
    body: KeyedBody,
}

impl ScriptFilter {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("script"),
        }
        .script(script)
    }

    options! {
        string script / get_script => "script";
        value params / get_params => "params";
        string lang / get_lang => "lang";
    }

    filter_meta!();
}

impl_builder!(ScriptFilter, Filter);
impl Filter for ScriptFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::data::Category;

    #[test]
    fn test_term_filter_meta_sits_next_to_field() {
        let filter = TermFilter::new("user", "kimchy").name("by_user").cache(true);
        assert_eq!(filter.category(), Category::Filter);
        assert_eq!(
            filter.to_string(),
            r#"{"term":{"user":"kimchy","_name":"by_user","_cache":true}}"#
        );
    }

    #[test]
    fn test_term_filter_rename() {
        let filter = TermFilter::new("user", "kimchy").cache_key("k").field("author");
        assert_eq!(filter.get_term(), &json!("kimchy"));
        assert_eq!(
            filter.to_value(),
            json!({"term": {"author": "kimchy", "_cache_key": "k"}})
        );
    }

    #[test]
    fn test_terms_filter_execution() {
        let filter = TermsFilter::new("color", ["red", "blue"]).execution("and");
        assert_eq!(
            filter.to_string(),
            r#"{"terms":{"color":["red","blue"],"execution":"and"}}"#
        );

        let filter = filter.execution("fastest");
        assert_eq!(filter.get_execution(), Some("and"));
    }

    #[test]
    fn test_terms_filter_lookup_mode_switch() {
        let filter = TermsFilter::new("user", ["a"])
            .index("users")
            .doc_type("user")
            .id("2")
            .path("followers");
        assert!(filter.is_lookup());
        assert!(filter.get_terms().is_empty());
        assert_eq!(
            filter.to_value(),
            json!({"terms": {"user": {"index": "users", "type": "user", "id": "2", "path": "followers"}}})
        );

        let filter = filter.terms(["x", "y"]);
        assert!(!filter.is_lookup());
        assert_eq!(filter.get_index(), None);
        assert_eq!(filter.to_value(), json!({"terms": {"user": ["x", "y"]}}));
    }

    #[test]
    fn test_prefix_filter() {
        let filter = PrefixFilter::new("user", "ki").name("p");
        assert_eq!(filter.to_string(), r#"{"prefix":{"user":"ki","_name":"p"}}"#);
    }

    #[test]
    fn test_regexp_filter_meta_outside_field() {
        let filter = RegexpFilter::new("name", "s.*y").flags(&["all"]).cache(false);
        assert_eq!(
            filter.to_value(),
            json!({"regexp": {"name": {"value": "s.*y", "flags": "ALL"}, "_cache": false}})
        );
    }

    #[test]
    fn test_keyed_filters() {
        assert_eq!(
            ExistsFilter::new("user").to_string(),
            r#"{"exists":{"field":"user"}}"#
        );
        assert_eq!(
            MissingFilter::new("user").existence(true).null_value(true).to_string(),
            r#"{"missing":{"field":"user","existence":true,"null_value":true}}"#
        );
        assert_eq!(TypeFilter::new("my_type").to_string(), r#"{"type":{"value":"my_type"}}"#);
        assert_eq!(LimitFilter::new(100).to_string(), r#"{"limit":{"value":100}}"#);
    }

    #[test]
    fn test_script_filter() {
        let filter = ScriptFilter::new("doc['num1'].value > param1")
            .params(json!({"param1": 5}))
            .name("script");
        assert_eq!(
            filter.to_value(),
            json!({"script": {
                "script": "doc['num1'].value > param1",
                "params": {"param1": 5},
                "_name": "script"
            }})
        );
    }
}
