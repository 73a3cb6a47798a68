use serde_json::{Map, Value};

use crate::builder::Facet;
use crate::util::{NamedBody, OptionStore};

/// Counts and statistics per caller-defined range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFacet {
    body: NamedBody,
}

impl RangeFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "range"),
        }
    }

    facet_common!();

    fn push_range(mut self, range: Map<String, Value>) -> Self {
        let mut ranges = self.get_ranges().to_vec();
        ranges.push(Value::Object(range));
        self.set_option("ranges", Value::Array(ranges));
        self
    }

    /// Append a bounded range `[from, to)`.
    pub fn add_range(self, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        let mut range = Map::new();
        range.insert("from".into(), from.into());
        range.insert("to".into(), to.into());
        self.push_range(range)
    }

    /// Append a range with only a lower bound.
    pub fn add_unbounded_from(self, from: impl Into<Value>) -> Self {
        let mut range = Map::new();
        range.insert("from".into(), from.into());
        self.push_range(range)
    }

    /// Append a range with only an upper bound.
    pub fn add_unbounded_to(self, to: impl Into<Value>) -> Self {
        let mut range = Map::new();
        range.insert("to".into(), to.into());
        self.push_range(range)
    }

    /// Replace every range with raw `{from, to}` objects.
    pub fn ranges<I, V>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ranges = ranges.into_iter().map(Into::into).collect();
        self.set_option("ranges", Value::Array(ranges));
        self
    }

    pub fn get_ranges(&self) -> &[Value] {
        self.get_option("ranges")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    options! {
        string field / get_field => "field";
        string key_field / get_key_field => "key_field";
        string value_field / get_value_field => "value_field";
        string key_script / get_key_script => "key_script";
        string value_script / get_value_script => "value_script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
    }
}

impl_builder!(RangeFacet, Facet);
impl Facet for RangeFacet {}
