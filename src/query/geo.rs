use crate::builder::Query;
use crate::geo::{IndexedShape, Shape};
use crate::util::FieldBody;

/// Documents whose shape field relates to the given shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoShapeQuery {
    body: FieldBody,
}

impl GeoShapeQuery {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_options("geo_shape", field),
        }
    }

    field_scoped!();

    options! {
        object shape / get_shape => "shape": Shape;
        /// A shape already indexed in another document.
        object indexed_shape / get_indexed_shape => "indexed_shape": IndexedShape;
        choice relation / get_relation => "relation" ["intersects", "disjoint", "within"];
        choice strategy / get_strategy => "strategy" ["recursive", "term"];
        float boost / get_boost => "boost";
    }
}

impl_builder!(GeoShapeQuery, Query);
impl Query for GeoShapeQuery {}
