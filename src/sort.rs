//! Sort clauses.

use serde_json::{Map, Value};

use crate::builder::{Builder, Filter};
use crate::data::Category;
use crate::geo::GeoPoint;
use crate::util::{OptionStore, pick};

#[derive(Debug, Clone, PartialEq)]
enum SortKind {
    Field,
    GeoDistance(Value),
    Script,
}

/// A sort clause on a field, a distance from a point, or a script.
///
/// Starts as a field sort. [`geo_distance`](Sort::geo_distance) and
/// [`script`](Sort::script) switch the clause to `_geo_distance` and
/// `_script` respectively; options set before or after the switch are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    field: String,
    kind: SortKind,
    options: Map<String, Value>,
}

impl Sort {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: SortKind::Field,
            options: Map::new(),
        }
    }

    /// Sort on the distance between `point` and the geo field.
    pub fn geo_distance(mut self, point: GeoPoint) -> Self {
        self.kind = SortKind::GeoDistance(point.to_value());
        self
    }

    /// Sort on a script's result.
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.kind = SortKind::Script;
        self.options.insert("script".into(), Value::String(script.into()));
        self
    }

    pub fn get_script(&self) -> Option<&str> {
        self.options.get("script").and_then(Value::as_str)
    }

    pub fn get_field(&self) -> &str {
        &self.field
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sort in reverse of the natural order; the engine's `reverse` flag.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.options.insert("reverse".into(), Value::Bool(reverse));
        self
    }

    pub fn get_reverse(&self) -> Option<bool> {
        self.options.get("reverse").and_then(Value::as_bool)
    }

    /// Sort order, `asc` or `desc`.
    pub fn order(mut self, order: &str) -> Self {
        if let Some(order) = pick("order", order, &["asc", "desc"]) {
            self.options.insert("order".into(), Value::String(order));
        }
        self
    }

    pub fn get_order(&self) -> Option<&str> {
        self.options.get("order").and_then(Value::as_str)
    }

    /// Restrict nested-field sorting to matching nested documents.
    pub fn nested_filter(mut self, filter: impl Filter) -> Self {
        self.options.insert("nested_filter".into(), filter.to_value());
        self
    }

    pub fn get_nested_filter(&self) -> Option<&Value> {
        self.options.get("nested_filter")
    }

    options! {
        /// `_first`, `_last` or a custom value for documents without the field.
        value missing / get_missing => "missing";
        bool ignore_unmapped / get_ignore_unmapped => "ignore_unmapped";
        /// How multi-valued fields pick the sort value.
        choice mode / get_mode => "mode" ["min", "max", "avg", "sum"];
        string nested_path / get_nested_path => "nested_path";
        choice unit / get_unit => "unit" ["mi", "km"];
        choice distance_type / get_distance_type => "distance_type" ["arc", "plane"];
        bool normalize / get_normalize => "normalize";
        /// Type of the script result, e.g. `number` or `string`.
        string script_type / get_script_type => "type";
        value params / get_params => "params";
        string lang / get_lang => "lang";
    }
}

impl OptionStore for Sort {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.options.insert(key.to_string(), value);
    }
}

impl Builder for Sort {
    fn category(&self) -> Category {
        Category::Sort
    }

    fn to_value(&self) -> Value {
        let (key, body) = match &self.kind {
            SortKind::Field => (self.field.clone(), self.options.clone()),
            SortKind::GeoDistance(point) => {
                let mut body = Map::new();
                body.insert(self.field.clone(), point.clone());
                for (k, v) in &self.options {
                    body.insert(k.clone(), v.clone());
                }
                ("_geo_distance".to_string(), body)
            }
            SortKind::Script => ("_script".to_string(), self.options.clone()),
        };
        let mut root = Map::new();
        root.insert(key, Value::Object(body));
        Value::Object(root)
    }
}

impl_builder!(@display Sort);

/// One entry of a request's `sort` list.
#[derive(Debug, Clone, PartialEq)]
pub enum SortSpec {
    /// A bare field name, sorted in its default order.
    Field(String),
    /// A field with an explicit `asc`/`desc` order.
    FieldOrder(String, String),
    /// A full sort clause.
    Sort(Sort),
}

impl SortSpec {
    /// The wire value, or `None` for a field order outside `asc`/`desc`.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            SortSpec::Field(field) => Some(Value::String(field.clone())),
            SortSpec::FieldOrder(field, order) => {
                let order = pick("order", order, &["asc", "desc"])?;
                let mut inner = Map::new();
                inner.insert("order".into(), Value::String(order));
                let mut root = Map::new();
                root.insert(field.clone(), Value::Object(inner));
                Some(Value::Object(root))
            }
            SortSpec::Sort(sort) => Some(sort.to_value()),
        }
    }
}

impl From<&str> for SortSpec {
    fn from(field: &str) -> Self {
        SortSpec::Field(field.to_string())
    }
}

impl From<String> for SortSpec {
    fn from(field: String) -> Self {
        SortSpec::Field(field)
    }
}

impl From<(&str, &str)> for SortSpec {
    fn from((field, order): (&str, &str)) -> Self {
        SortSpec::FieldOrder(field.to_string(), order.to_string())
    }
}

impl From<Sort> for SortSpec {
    fn from(sort: Sort) -> Self {
        SortSpec::Sort(sort)
    }
}
