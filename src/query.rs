//! Query builders.
//!
//! Every type here is tagged `query` and can be embedded wherever a query is
//! accepted: `Request::query`, the clauses of a [`BoolQuery`], the query of a
//! `QueryFilter`, and so on.
//!
//! # Module Structure
//!
//! - `term`: exact-term queries (`term`, `terms`, `prefix`, `wildcard`, `regexp`, `fuzzy`, ...)
//! - `full_text`: analyzed queries (`match`, `multi_match`, `query_string`, ...)
//! - `range`: `range`
//! - `compound`: queries wrapping other queries or filters
//! - `joining`: `nested`, `has_child`, `has_parent`
//! - `geo`: `geo_shape`

pub mod compound;
pub mod full_text;
pub mod geo;
pub mod joining;
pub mod range;
pub mod term;

// Re-exports
pub use compound::{BoolQuery, BoostingQuery, ConstantScoreQuery, DisMaxQuery, FilteredQuery};
pub use full_text::{CommonTermsQuery, FieldQuery, MatchQuery, MultiMatchQuery, QueryStringQuery};
pub use geo::GeoShapeQuery;
pub use joining::{HasChildQuery, HasParentQuery, NestedQuery};
pub use range::RangeQuery;
pub use term::{
    FuzzyQuery, IdsQuery, MatchAllQuery, PrefixQuery, RegexpQuery, SpanTermQuery, TermQuery,
    TermsQuery, WildcardQuery,
};
