//! Storage shapes shared by every builder.
//!
//! Three shapes cover the whole DSL:
//!
//! - [`KeyedBody`]: `{type_key: {option: value, ...}}`, e.g. `bool`, `ids`, `match_all`.
//! - [`FieldBody`]: `{type_key: {field: value, sibling: value, ...}}`, e.g. `term`,
//!   `range`, `geo_distance`, where exactly one field key exists at a time.
//! - [`NamedBody`]: `{name: {kind: {...}, shared...}}`, for facets and suggesters.

use serde_json::{Map, Value};

/// Read/write access to the option map a builder's accessors target.
///
/// `meta` covers filter bookkeeping keys (`_name`, `_cache`, `_cache_key`),
/// which live next to the field entry for field-scoped filters and in the
/// main body for everything else.
pub(crate) trait OptionStore {
    fn get_option(&self, key: &str) -> Option<&Value>;

    fn set_option(&mut self, key: &str, value: Value);

    fn get_meta(&self, key: &str) -> Option<&Value> {
        self.get_option(key)
    }

    fn set_meta(&mut self, key: &str, value: Value) {
        self.set_option(key, value);
    }
}

impl OptionStore for Map<String, Value> {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }
}

/// Edit the object stored under `key`, replacing any non-object value.
///
/// The entry keeps its position in `map`.
pub(crate) fn edit_object<R>(
    map: &mut Map<String, Value>,
    key: &str,
    edit: impl FnOnce(&mut Map<String, Value>) -> R,
) -> R {
    let slot = map.entry(key.to_string()).or_insert(Value::Null);
    let mut obj = match std::mem::take(slot) {
        Value::Object(obj) => obj,
        _ => Map::new(),
    };
    let result = edit(&mut obj);
    *slot = Value::Object(obj);
    result
}

/// Edit the array stored under `key`, replacing any non-array value.
pub(crate) fn edit_array<R>(
    map: &mut Map<String, Value>,
    key: &str,
    edit: impl FnOnce(&mut Vec<Value>) -> R,
) -> R {
    let slot = map.entry(key.to_string()).or_insert(Value::Null);
    let mut items = match std::mem::take(slot) {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    let result = edit(&mut items);
    *slot = Value::Array(items);
    result
}

/// A body stored under one key: a DSL type name or a caller-chosen name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct KeyedBody {
    key: String,
    body: Map<String, Value>,
}

impl KeyedBody {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            body: Map::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.body.insert(name.to_string(), value);
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Items of an array-valued slot.
    pub fn list(&self, name: &str) -> Option<&[Value]> {
        self.body.get(name).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Append one item, creating the slot on first use.
    pub fn push(&mut self, name: &str, item: Value) {
        edit_array(&mut self.body, name, |items| items.push(item));
    }

    /// Replace the whole slot.
    pub fn replace(&mut self, name: &str, items: Vec<Value>) {
        self.body.insert(name.to_string(), Value::Array(items));
    }

    pub fn to_value(&self) -> Value {
        let mut root = Map::new();
        root.insert(self.key.clone(), Value::Object(self.body.clone()));
        Value::Object(root)
    }
}

impl OptionStore for KeyedBody {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.set(key, value);
    }
}

/// A body scoped to a single, renameable field.
///
/// The field entry is an explicit `(field, value)` pair rather than a map
/// key, so renaming is a move and the entry is always emitted first under
/// the type key.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldBody {
    key: &'static str,
    field: String,
    value: Value,
    siblings: Map<String, Value>,
}

impl FieldBody {
    pub fn new(key: &'static str, field: impl Into<String>, value: Value) -> Self {
        Self {
            key,
            field: field.into(),
            value,
            siblings: Map::new(),
        }
    }

    /// A field body whose value starts as an empty options object.
    pub fn with_options(key: &'static str, field: impl Into<String>) -> Self {
        Self::new(key, field, Value::Object(Map::new()))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Move the current value under a new field name.
    pub fn rename(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Edit the field value as an options object, converting it if needed.
    pub fn edit_options<R>(&mut self, edit: impl FnOnce(&mut Map<String, Value>) -> R) -> R {
        let mut options = match std::mem::take(&mut self.value) {
            Value::Object(obj) => obj,
            _ => Map::new(),
        };
        let result = edit(&mut options);
        self.value = Value::Object(options);
        result
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.value.as_object().and_then(|obj| obj.get(name))
    }

    pub fn sibling(&self, name: &str) -> Option<&Value> {
        self.siblings.get(name)
    }

    pub fn set_sibling(&mut self, name: &str, value: Value) {
        self.siblings.insert(name.to_string(), value);
    }

    pub fn to_value(&self) -> Value {
        let mut inner = Map::new();
        inner.insert(self.field.clone(), self.value.clone());
        for (k, v) in &self.siblings {
            inner.insert(k.clone(), v.clone());
        }
        let mut root = Map::new();
        root.insert(self.key.to_string(), Value::Object(inner));
        Value::Object(root)
    }
}

impl OptionStore for FieldBody {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.option(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.edit_options(|options| {
            options.insert(key.to_string(), value);
        });
    }

    fn get_meta(&self, key: &str) -> Option<&Value> {
        self.sibling(key)
    }

    fn set_meta(&mut self, key: &str, value: Value) {
        self.set_sibling(key, value);
    }
}

/// A caller-named object holding one kind object plus shared settings:
/// `{name: {kind: {...}, shared...}}`. Used by facets and suggesters.
///
/// Options go into the kind object, meta into the shared settings. Some
/// kinds (`geo_distance`) key their object by a renameable field; that entry
/// is kept apart and always emitted first.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NamedBody {
    outer: KeyedBody,
    kind: &'static str,
    options: Map<String, Value>,
    field: Option<(String, Value)>,
}

impl NamedBody {
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            outer: KeyedBody::new(name),
            kind,
            options: Map::new(),
            field: None,
        }
    }

    pub fn name(&self) -> &str {
        self.outer.key()
    }

    /// Replace the whole kind object (`query` and `filter` facets).
    /// Builders always render as objects; anything else is ignored.
    pub fn set_kind_value(&mut self, value: Value) {
        if let Value::Object(map) = value {
            self.options = map;
        }
    }

    pub fn field_entry(&self) -> Option<(&str, &Value)> {
        self.field.as_ref().map(|(f, v)| (f.as_str(), v))
    }

    pub fn set_field_entry(&mut self, field: impl Into<String>, value: Value) {
        self.field = Some((field.into(), value));
    }

    /// Move the field entry's value under a new name.
    pub fn rename_field(&mut self, field: impl Into<String>) {
        if let Some((name, _)) = self.field.as_mut() {
            *name = field.into();
        }
    }

    pub fn to_value(&self) -> Value {
        let mut kind = Map::new();
        if let Some((field, value)) = &self.field {
            kind.insert(field.clone(), value.clone());
        }
        for (k, v) in &self.options {
            kind.insert(k.clone(), v.clone());
        }

        let mut inner = Map::new();
        inner.insert(self.kind.to_string(), Value::Object(kind));
        for (k, v) in self.outer.body() {
            inner.insert(k.clone(), v.clone());
        }

        let mut root = Map::new();
        root.insert(self.name().to_string(), Value::Object(inner));
        Value::Object(root)
    }
}

impl OptionStore for NamedBody {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.options.insert(key.to_string(), value);
    }

    fn get_meta(&self, key: &str) -> Option<&Value> {
        self.outer.get(key)
    }

    fn set_meta(&mut self, key: &str, value: Value) {
        self.outer.set(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_body_push_and_replace() {
        let mut body = KeyedBody::new("and");
        body.push("filters", json!(1));
        body.push("filters", json!(2));
        assert_eq!(body.list("filters").unwrap().len(), 2);

        body.replace("filters", vec![json!(3)]);
        assert_eq!(body.to_value(), json!({"and": {"filters": [3]}}));
    }

    #[test]
    fn test_field_body_rename_moves_value() {
        let mut body = FieldBody::with_options("range", "age");
        body.set_option("from", json!(10));
        body.set_sibling("_cache", json!(true));
        body.rename("years");

        assert_eq!(body.field(), "years");
        assert_eq!(
            body.to_value(),
            json!({"range": {"years": {"from": 10}, "_cache": true}})
        );
    }

    #[test]
    fn test_edit_options_converts_scalar() {
        let mut body = FieldBody::new("term", "user", json!("kimchy"));
        body.edit_options(|options| options.insert("boost".into(), json!(2.0)));
        assert_eq!(body.value(), &json!({"boost": 2.0}));
    }

    #[test]
    fn test_named_body_layout() {
        let mut body = NamedBody::new("tags", "terms");
        body.set_meta("global", json!(true));
        body.set_option("field", json!("tag"));
        assert_eq!(
            body.to_value(),
            json!({"tags": {"terms": {"field": "tag"}, "global": true}})
        );
    }

    #[test]
    fn test_named_body_field_entry_first() {
        let mut body = NamedBody::new("geo", "geo_distance");
        body.set_option("unit", json!("km"));
        body.set_field_entry("pin", json!([1, 2]));
        body.rename_field("location");
        assert_eq!(
            body.to_value().to_string(),
            r#"{"geo":{"geo_distance":{"location":[1,2],"unit":"km"}}}"#
        );
    }

    #[test]
    fn test_edit_object_replaces_scalar() {
        let mut map = Map::new();
        map.insert("fuzzy".into(), json!(true));
        edit_object(&mut map, "fuzzy", |fuzzy| fuzzy.insert("edit_distance".into(), json!(2)));
        assert_eq!(Value::Object(map), json!({"fuzzy": {"edit_distance": 2}}));
    }

    #[test]
    fn test_edit_array_keeps_entry_position() {
        let mut map = Map::new();
        map.insert("query".into(), json!({}));
        map.insert("sort".into(), json!("oops"));
        map.insert("size".into(), json!(10));
        edit_array(&mut map, "sort", |items| items.push(json!("name")));
        assert_eq!(
            Value::Object(map).to_string(),
            r#"{"query":{},"sort":["name"],"size":10}"#
        );
    }
}
