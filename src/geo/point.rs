use serde_json::{Map, Value, json};

use crate::builder::Builder;
use crate::data::Category;

/// How a [`GeoPoint`] is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointFormat {
    /// `[lon, lat]`, GeoJSON order.
    #[default]
    Array,
    /// `{"lat": .., "lon": ..}`
    Properties,
    /// `"lat,lon"`
    String,
}

/// A latitude/longitude pair, or a geohash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
    geohash: Option<String>,
    format: PointFormat,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            geohash: None,
            format: PointFormat::Array,
        }
    }

    /// A point given as a geohash string. Serializes as the hash itself.
    pub fn from_geohash(hash: impl Into<String>) -> Self {
        Self {
            geohash: Some(hash.into()),
            ..Self::default()
        }
    }

    pub fn lat(mut self, lat: f64) -> Self {
        self.lat = lat;
        self.geohash = None;
        self
    }

    pub fn lon(mut self, lon: f64) -> Self {
        self.lon = lon;
        self.geohash = None;
        self
    }

    pub fn get_lat(&self) -> f64 {
        self.lat
    }

    pub fn get_lon(&self) -> f64 {
        self.lon
    }

    pub fn get_geohash(&self) -> Option<&str> {
        self.geohash.as_deref()
    }

    /// Write the point as `{"lat": .., "lon": ..}`.
    pub fn properties(mut self) -> Self {
        self.format = PointFormat::Properties;
        self
    }

    /// Write the point as `"lat,lon"`.
    pub fn string(mut self) -> Self {
        self.format = PointFormat::String;
        self
    }

    /// Write the point as `[lon, lat]`.
    pub fn array(mut self) -> Self {
        self.format = PointFormat::Array;
        self
    }

    pub fn format(&self) -> PointFormat {
        self.format
    }
}

impl Builder for GeoPoint {
    fn category(&self) -> Category {
        Category::GeoPoint
    }

    fn to_value(&self) -> Value {
        if let Some(hash) = &self.geohash {
            return Value::String(hash.clone());
        }
        match self.format {
            PointFormat::Array => json!([self.lon, self.lat]),
            PointFormat::Properties => {
                let mut obj = Map::new();
                obj.insert("lat".into(), json!(self.lat));
                obj.insert("lon".into(), json!(self.lon));
                Value::Object(obj)
            }
            PointFormat::String => Value::String(format!("{},{}", self.lat, self.lon)),
        }
    }
}

impl_builder!(@display GeoPoint);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_array_is_lon_lat() {
        let point = GeoPoint::new(40.5, -73.25);
        assert_eq!(point.to_value(), json!([-73.25, 40.5]));
        assert_eq!(point.category(), Category::GeoPoint);
    }

    #[test]
    fn test_formats() {
        let point = GeoPoint::new(1.5, 2.5);
        assert_eq!(point.clone().properties().to_string(), r#"{"lat":1.5,"lon":2.5}"#);
        assert_eq!(point.clone().string().to_value(), json!("1.5,2.5"));
        assert_eq!(point.properties().array().to_value(), json!([2.5, 1.5]));
    }

    #[test]
    fn test_geohash_overrides_format_until_coordinates_set() {
        let point = GeoPoint::from_geohash("drm3btev3e86");
        assert_eq!(point.to_value(), json!("drm3btev3e86"));

        let point = point.lat(10.0).lon(20.0);
        assert_eq!(point.get_geohash(), None);
        assert_eq!(point.to_value(), json!([20.0, 10.0]));
    }
}
