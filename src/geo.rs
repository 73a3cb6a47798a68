//! Geographic value objects embedded by geo queries, filters, facets and sorts.

pub mod point;
pub mod shape;

pub use point::{GeoPoint, PointFormat};
pub use shape::{IndexedShape, Shape};
