//! Queries that wrap other queries or filters.

use serde_json::Value;

use crate::builder::Query;
use crate::util::KeyedBody;

/// Combines queries with `must`, `must_not` and `should` clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery {
    body: KeyedBody,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("bool"),
        }
    }

    children! {
        /// Clause that must appear in matching documents.
        must + try_must / get_must => "must": Query;
        /// Clause that must not appear in matching documents.
        must_not + try_must_not / get_must_not => "must_not": Query;
        /// Clause that should appear in matching documents.
        should + try_should / get_should => "should": Query;
    }

    options! {
        bool adjust_pure_negative / get_adjust_pure_negative => "adjust_pure_negative";
        bool disable_coord / get_disable_coord => "disable_coord";
        /// How many `should` clauses have to match.
        value minimum_number_should_match / get_minimum_number_should_match => "minimum_number_should_match";
        float boost / get_boost => "boost";
    }
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(BoolQuery, Query);
impl Query for BoolQuery {}

/// Union of its queries, scored by the best match plus a tie breaker.
#[derive(Debug, Clone, PartialEq)]
pub struct DisMaxQuery {
    body: KeyedBody,
}

impl DisMaxQuery {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("dis_max"),
        }
    }

    children! {
        add_query + try_queries / get_queries => "queries": Query;
    }

    options! {
        float tie_breaker / get_tie_breaker => "tie_breaker";
        float boost / get_boost => "boost";
    }
}

impl Default for DisMaxQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(DisMaxQuery, Query);
impl Query for DisMaxQuery {}

/// Gives every matching document the same score.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantScoreQuery {
    body: KeyedBody,
}

impl ConstantScoreQuery {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("constant_score"),
        }
    }

    options! {
        child query / get_query => "query": Query;
        child filter / get_filter => "filter": Filter;
        bool cache / get_cache => "_cache";
        string cache_key / get_cache_key => "_cache_key";
        float boost / get_boost => "boost";
    }
}

impl Default for ConstantScoreQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(ConstantScoreQuery, Query);
impl Query for ConstantScoreQuery {}

const FILTER_STRATEGIES: &[&str] = &[
    "query_first",
    "random_access_always",
    "leap_frog",
    "leap_frog_filter_first",
    "leap_frog_query_first",
];

/// A query whose results are restricted by a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredQuery {
    body: KeyedBody,
}

impl FilteredQuery {
    pub fn new(query: impl Query) -> Self {
        Self {
            body: KeyedBody::new("filtered"),
        }
        .query(query)
    }

    /// How the filter is applied: one of the fixed strategies or
    /// `random_access_N`.
    pub fn strategy(mut self, strategy: &str) -> Self {
        let strategy = strategy.to_lowercase();
        if FILTER_STRATEGIES.contains(&strategy.as_str()) || strategy.starts_with("random_access_") {
            self.body.set("strategy", Value::String(strategy));
        } else {
            log::debug!("ignoring unsupported value '{strategy}' for option 'strategy'");
        }
        self
    }

    pub fn get_strategy(&self) -> Option<&str> {
        self.body.get("strategy").and_then(Value::as_str)
    }

    options! {
        child query / get_query => "query": Query;
        child filter / get_filter => "filter": Filter;
        bool cache / get_cache => "_cache";
        string cache_key / get_cache_key => "_cache_key";
        float boost / get_boost => "boost";
    }
}

impl_builder!(FilteredQuery, Query);
impl Query for FilteredQuery {}

/// Demotes documents matching the negative query.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostingQuery {
    body: KeyedBody,
}

impl BoostingQuery {
    pub fn new(positive: impl Query, negative: impl Query, negative_boost: f64) -> Self {
        Self {
            body: KeyedBody::new("boosting"),
        }
        .positive(positive)
        .negative(negative)
        .negative_boost(negative_boost)
    }

    options! {
        child positive / get_positive => "positive": Query;
        child negative / get_negative => "negative": Query;
        float negative_boost / get_negative_boost => "negative_boost";
        float boost / get_boost => "boost";
    }
}

impl_builder!(BoostingQuery, Query);
impl Query for BoostingQuery {}
