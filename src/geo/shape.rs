use serde_json::{Map, Value};

use crate::builder::Builder;
use crate::data::Category;
use crate::util::OptionStore;

/// An inline GeoJSON-style shape: `{"type": .., "coordinates": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    body: Map<String, Value>,
}

impl Shape {
    /// Create a shape. An unsupported `kind` is dropped, as with any
    /// enumerated option, leaving only the coordinates.
    pub fn new(kind: &str, coordinates: impl Into<Value>) -> Self {
        Self { body: Map::new() }.kind(kind).coordinates(coordinates)
    }

    options! {
        choice kind / get_kind => "type" [
            "point",
            "linestring",
            "polygon",
            "multipoint",
            "envelope",
            "multipolygon",
            "circle",
            "multilinestring",
        ];
        value coordinates / get_coordinates => "coordinates";
        /// Radius for `circle` shapes, e.g. `"100m"`.
        value radius / get_radius => "radius";
    }
}

impl OptionStore for Shape {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl Builder for Shape {
    fn category(&self) -> Category {
        Category::Shape
    }

    fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl_builder!(@display Shape);

/// A reference to a shape already indexed in another document.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedShape {
    body: Map<String, Value>,
}

impl IndexedShape {
    /// Reference the shape stored in document `id` of mapping type `doc_type`.
    pub fn new(doc_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self { body: Map::new() }.id(id).doc_type(doc_type)
    }

    options! {
        string id / get_id => "id";
        string doc_type / get_doc_type => "type";
        /// Index holding the shape document (engine default: `shapes`).
        string index / get_index => "index";
        /// Field of the shape document holding the shape (engine default: `shape`).
        string shape_field_name / get_shape_field_name => "shape_field_name";
    }
}

impl OptionStore for IndexedShape {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl Builder for IndexedShape {
    fn category(&self) -> Category {
        Category::IndexedShape
    }

    fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl_builder!(@display IndexedShape);
