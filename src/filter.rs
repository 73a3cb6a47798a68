//! Filter builders.
//!
//! Filters are tagged `filter`. Every filter carries the `_name`, `_cache`
//! and `_cache_key` accessors (`name`, `cache`, `cache_key`). On field-scoped
//! filters these sit next to the field entry rather than inside it.
//!
//! # Module Structure
//!
//! - `term`: exact-value filters (`term`, `terms`, `prefix`, `exists`, `ids`, ...)
//! - `range`: `range`, `numeric_range`
//! - `compound`: `and`, `or`, `not`, `bool`, `fquery`
//! - `joining`: `nested`, `has_child`, `has_parent`
//! - `geo`: distance, bounding box, polygon and shape filters

pub mod compound;
pub mod geo;
pub mod joining;
pub mod range;
pub mod term;

// Re-exports
pub use compound::{AndFilter, BoolFilter, NotFilter, OrFilter, QueryFilter};
pub use geo::{
    GeoBboxFilter, GeoDistanceFilter, GeoDistanceRangeFilter, GeoPolygonFilter, GeoShapeFilter,
};
pub use joining::{HasChildFilter, HasParentFilter, NestedFilter};
pub use range::{NumericRangeFilter, RangeFilter};
pub use term::{
    ExistsFilter, IdsFilter, LimitFilter, MatchAllFilter, MissingFilter, PrefixFilter,
    RegexpFilter, ScriptFilter, TermFilter, TermsFilter, TypeFilter,
};
