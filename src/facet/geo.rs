use serde_json::{Map, Value, json};

use crate::builder::{Builder, Facet};
use crate::geo::GeoPoint;
use crate::util::{NamedBody, OptionStore};

/// Counts per distance ring around a point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoDistanceFacet {
    body: NamedBody,
}

impl GeoDistanceFacet {
    /// A facet over the geo field `field`, centered on `[0, 0]` until
    /// [`point`](Self::point) is called.
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        let mut body = NamedBody::new(name, "geo_distance");
        body.set_field_entry(field, json!([0, 0]));
        Self { body }
    }

    facet_common!();

    /// Move the origin under another geo field.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.body.rename_field(field);
        self
    }

    pub fn get_field(&self) -> &str {
        self.body.field_entry().map_or("", |(field, _)| field)
    }

    pub fn point(mut self, point: GeoPoint) -> Self {
        let field = self.get_field().to_string();
        self.body.set_field_entry(field, point.to_value());
        self
    }

    pub fn get_point(&self) -> Option<&Value> {
        self.body.field_entry().map(|(_, point)| point)
    }

    fn push_range(mut self, range: Map<String, Value>) -> Self {
        let mut ranges = self.get_ranges().to_vec();
        ranges.push(Value::Object(range));
        self.set_option("ranges", Value::Array(ranges));
        self
    }

    pub fn add_range(self, from: f64, to: f64) -> Self {
        let mut range = Map::new();
        range.insert("from".into(), json!(from));
        range.insert("to".into(), json!(to));
        self.push_range(range)
    }

    pub fn add_unbounded_from(self, from: f64) -> Self {
        let mut range = Map::new();
        range.insert("from".into(), json!(from));
        self.push_range(range)
    }

    pub fn add_unbounded_to(self, to: f64) -> Self {
        let mut range = Map::new();
        range.insert("to".into(), json!(to));
        self.push_range(range)
    }

    pub fn get_ranges(&self) -> &[Value] {
        self.get_option("ranges")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    options! {
        choice unit / get_unit => "unit" ["mi", "km"];
        choice distance_type / get_distance_type => "distance_type" ["arc", "plane"];
        bool normalize / get_normalize => "normalize";
        string value_field / get_value_field => "value_field";
        string value_script / get_value_script => "value_script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
    }
}

impl_builder!(GeoDistanceFacet, Facet);
impl Facet for GeoDistanceFacet {}
