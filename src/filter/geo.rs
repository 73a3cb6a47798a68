//! Geographic filters.

use serde_json::{Value, json};

use crate::builder::{Builder, Filter};
use crate::geo::{GeoPoint, IndexedShape, Shape};
use crate::util::{FieldBody, pick};

/// Documents within a distance of a point.
///
/// The point is the field value; every option sits next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoDistanceFilter {
    body: FieldBody,
}

impl GeoDistanceFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("geo_distance", field, json!([0, 0])),
        }
    }

    field_scoped!();

    pub fn point(mut self, point: GeoPoint) -> Self {
        self.body.set_value(point.to_value());
        self
    }

    pub fn get_point(&self) -> &Value {
        self.body.value()
    }

    options! {
        /// A number in `unit`, or a string with its own unit such as `"12km"`.
        value distance / get_distance => "distance";
        choice unit / get_unit => "unit" ["mi", "km"];
        choice distance_type / get_distance_type => "distance_type" ["arc", "plane"];
        choice optimize_bbox / get_optimize_bbox => "optimize_bbox" ["memory", "indexed", "none"];
        bool normalize / get_normalize => "normalize";
    }

    filter_meta!();
}

impl_builder!(@siblings GeoDistanceFilter, Filter);
impl Filter for GeoDistanceFilter {}

/// Documents within a ring around a point.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoDistanceRangeFilter {
    body: FieldBody,
}

impl GeoDistanceRangeFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("geo_distance_range", field, json!([0, 0])),
        }
    }

    field_scoped!();

    pub fn point(mut self, point: GeoPoint) -> Self {
        self.body.set_value(point.to_value());
        self
    }

    pub fn get_point(&self) -> &Value {
        self.body.value()
    }

    options! {
        value from / get_from => "from";
        value to / get_to => "to";
        bool include_lower / get_include_lower => "include_lower";
        bool include_upper / get_include_upper => "include_upper";
        value gt / get_gt => "gt";
        value gte / get_gte => "gte";
        value lt / get_lt => "lt";
        value lte / get_lte => "lte";
        choice unit / get_unit => "unit" ["mi", "km"];
        choice distance_type / get_distance_type => "distance_type" ["arc", "plane"];
        choice optimize_bbox / get_optimize_bbox => "optimize_bbox" ["memory", "indexed", "none"];
        bool normalize / get_normalize => "normalize";
    }

    filter_meta!();
}

impl_builder!(@siblings GeoDistanceRangeFilter, Filter);
impl Filter for GeoDistanceRangeFilter {}

/// Documents inside a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoBboxFilter {
    body: FieldBody,
}

impl GeoBboxFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_options("geo_bounding_box", field),
        }
    }

    field_scoped!();

    options! {
        object top_left / get_top_left => "top_left": GeoPoint;
        object bottom_right / get_bottom_right => "bottom_right": GeoPoint;
    }

    /// Execution type: `memory` or `indexed`.
    pub fn bbox_type(mut self, bbox_type: &str) -> Self {
        if let Some(bbox_type) = pick("type", bbox_type, &["memory", "indexed"]) {
            self.body.set_sibling("type", Value::String(bbox_type));
        }
        self
    }

    pub fn get_bbox_type(&self) -> Option<&str> {
        self.body.sibling("type").and_then(Value::as_str)
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.body.set_sibling("normalize", Value::Bool(normalize));
        self
    }

    pub fn get_normalize(&self) -> Option<bool> {
        self.body.sibling("normalize").and_then(Value::as_bool)
    }

    filter_meta!();
}

impl_builder!(GeoBboxFilter, Filter);
impl Filter for GeoBboxFilter {}

/// Documents inside a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPolygonFilter {
    body: FieldBody,
}

impl GeoPolygonFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_options("geo_polygon", field),
        }
    }

    field_scoped!();

    /// Append one vertex.
    pub fn add_point(mut self, point: GeoPoint) -> Self {
        let point = point.to_value();
        self.body.edit_options(|options| {
            crate::util::body::edit_array(options, "points", |points| points.push(point))
        });
        self
    }

    /// Replace all vertices.
    pub fn points(mut self, points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let points = points.into_iter().map(|p| p.to_value()).collect();
        self.body.edit_options(|options| {
            options.insert("points".into(), Value::Array(points));
        });
        self
    }

    pub fn get_points(&self) -> &[Value] {
        self.body
            .option("points")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.body.set_sibling("normalize", Value::Bool(normalize));
        self
    }

    pub fn get_normalize(&self) -> Option<bool> {
        self.body.sibling("normalize").and_then(Value::as_bool)
    }

    filter_meta!();
}

impl_builder!(GeoPolygonFilter, Filter);
impl Filter for GeoPolygonFilter {}

/// Documents whose shape field relates to the given shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoShapeFilter {
    body: FieldBody,
}

impl GeoShapeFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_options("geo_shape", field),
        }
    }

    field_scoped!();

    options! {
        object shape / get_shape => "shape": Shape;
        object indexed_shape / get_indexed_shape => "indexed_shape": IndexedShape;
        choice relation / get_relation => "relation" ["intersects", "disjoint", "within"];
        choice strategy / get_strategy => "strategy" ["recursive", "term"];
    }

    filter_meta!();
}

impl_builder!(GeoShapeFilter, Filter);
impl Filter for GeoShapeFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_distance_filter() {
        let filter = GeoDistanceFilter::new("pin.location")
            .point(GeoPoint::new(40.0, -70.0))
            .distance("12km")
            .distance_type("PLANE")
            .unit("furlong");
        assert_eq!(filter.get_unit(), None);
        assert_eq!(
            filter.to_string(),
            r#"{"geo_distance":{"pin.location":[-70.0,40.0],"distance":"12km","distance_type":"plane"}}"#
        );
    }

    #[test]
    fn test_geo_distance_range_rename_keeps_point_first() {
        let filter = GeoDistanceRangeFilter::new("pin")
            .from("200km")
            .to("400km")
            .point(GeoPoint::new(40.0, -70.0).properties())
            .field("location");
        assert_eq!(
            filter.to_string(),
            r#"{"geo_distance_range":{"location":{"lat":40.0,"lon":-70.0},"from":"200km","to":"400km"}}"#
        );
    }

    #[test]
    fn test_geo_bbox_filter() {
        let filter = GeoBboxFilter::new("pin.location")
            .top_left(GeoPoint::new(40.73, -74.1))
            .bottom_right(GeoPoint::new(40.717, -73.99))
            .bbox_type("indexed")
            .cache(true);
        assert_eq!(
            filter.to_value(),
            json!({"geo_bounding_box": {
                "pin.location": {"top_left": [-74.1, 40.73], "bottom_right": [-73.99, 40.717]},
                "type": "indexed",
                "_cache": true
            }})
        );
    }

    #[test]
    fn test_geo_polygon_points() {
        let filter = GeoPolygonFilter::new("person.location")
            .add_point(GeoPoint::new(40.0, -70.0))
            .add_point(GeoPoint::new(30.0, -80.0));
        assert_eq!(filter.get_points().len(), 2);

        let filter = filter.points([GeoPoint::from_geohash("drn5x1g8cu2y")]);
        assert_eq!(
            filter.to_value(),
            json!({"geo_polygon": {"person.location": {"points": ["drn5x1g8cu2y"]}}})
        );
    }

    #[test]
    fn test_geo_shape_filter() {
        let filter = GeoShapeFilter::new("location")
            .indexed_shape(IndexedShape::new("country", "DEU"))
            .relation("disjoint")
            .name("shape");
        assert_eq!(
            filter.to_value(),
            json!({"geo_shape": {
                "location": {"indexed_shape": {"id": "DEU", "type": "country"}, "relation": "disjoint"},
                "_name": "shape"
            }})
        );
    }
}
