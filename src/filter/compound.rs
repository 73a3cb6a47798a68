//! Filters combining other filters.

use crate::builder::Filter;
use crate::data::{Category, Node, expect_all};
use crate::error::Result;
use crate::util::KeyedBody;

/// Documents matching all of its filters.
#[derive(Debug, Clone, PartialEq)]
pub struct AndFilter {
    body: KeyedBody,
}

impl AndFilter {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("and"),
        }
    }

    /// Build from a mixed list; fails unless every node is a filter.
    pub fn try_new(filters: Vec<Node>) -> Result<Self> {
        let values = expect_all(filters, Category::Filter)?;
        let mut filter = Self::new();
        filter.body.replace("filters", values);
        Ok(filter)
    }

    children! {
        add_filter + try_filters / get_filters => "filters": Filter;
    }

    filter_meta!();
}

impl Default for AndFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(AndFilter, Filter);
impl Filter for AndFilter {}

/// Documents matching any of its filters.
#[derive(Debug, Clone, PartialEq)]
pub struct OrFilter {
    body: KeyedBody,
}

impl OrFilter {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("or"),
        }
    }

    /// Build from a mixed list; fails unless every node is a filter.
    pub fn try_new(filters: Vec<Node>) -> Result<Self> {
        let values = expect_all(filters, Category::Filter)?;
        let mut filter = Self::new();
        filter.body.replace("filters", values);
        Ok(filter)
    }

    children! {
        add_filter + try_filters / get_filters => "filters": Filter;
    }

    filter_meta!();
}

impl Default for OrFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(OrFilter, Filter);
impl Filter for OrFilter {}

/// Documents not matching the wrapped filter.
#[derive(Debug, Clone, PartialEq)]
pub struct NotFilter {
    body: KeyedBody,
}

impl NotFilter {
    pub fn new(filter: impl Filter) -> Self {
        Self {
            body: KeyedBody::new("not"),
        }
        .filter(filter)
    }

    options! {
        child filter / get_filter => "filter": Filter;
    }

    filter_meta!();
}

impl_builder!(NotFilter, Filter);
impl Filter for NotFilter {}

/// Boolean combination of filters.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolFilter {
    body: KeyedBody,
}

impl BoolFilter {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("bool"),
        }
    }

    children! {
        must + try_must / get_must => "must": Filter;
        must_not + try_must_not / get_must_not => "must_not": Filter;
        should + try_should / get_should => "should": Filter;
    }

    filter_meta!();
}

impl Default for BoolFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(BoolFilter, Filter);
impl Filter for BoolFilter {}

/// Wraps a query so it can be used as a filter (`fquery`).
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilter {
    body: KeyedBody,
}

impl QueryFilter {
    pub fn new(query: impl crate::builder::Query) -> Self {
        Self {
            body: KeyedBody::new("fquery"),
        }
        .query(query)
    }

    options! {
        child query / get_query => "query": Query;
    }

    filter_meta!();
}

impl_builder!(QueryFilter, Filter);
impl Filter for QueryFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::error::DslError;
    use crate::filter::{RangeFilter, TermFilter};
    use crate::query::{MatchAllQuery, TermQuery};
    use serde_json::json;

    #[test]
    fn test_and_filter_try_new_rejects_untyped() {
        let result = AndFilter::try_new(vec![
            TermFilter::new("a", "b").into(),
            Node::untyped(json!({})),
        ]);
        match result {
            Err(DslError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, Category::Filter);
                assert_eq!(found, "untyped value");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_and_filter_rejects_query() {
        let err = AndFilter::try_new(vec![TermQuery::new("a", "b").into()]).unwrap_err();
        assert_eq!(err.to_string(), "argument must be a filter, got query");
    }

    #[test]
    fn test_or_filter_replace_is_all_or_nothing() {
        let filter = OrFilter::new().add_filter(TermFilter::new("a", "1"));
        assert!(
            filter
                .clone()
                .try_filters(vec![TermFilter::new("b", "2").into(), MatchAllQuery::new().into()])
                .is_err()
        );

        let filter = filter
            .try_filters(vec![TermFilter::new("b", "2").into()])
            .unwrap();
        assert_eq!(filter.to_string(), r#"{"or":{"filters":[{"term":{"b":"2"}}]}}"#);
    }

    #[test]
    fn test_not_filter() {
        let filter = NotFilter::new(RangeFilter::new("age").gt(10)).cache(true);
        assert_eq!(
            filter.to_value(),
            json!({"not": {"filter": {"range": {"age": {"gt": 10}}}, "_cache": true}})
        );
    }

    #[test]
    fn test_bool_filter() {
        let filter = BoolFilter::new()
            .must(TermFilter::new("tag", "wow"))
            .must_not(RangeFilter::new("age").from(10).to(20))
            .should(TermFilter::new("tag", "sometag"));
        assert_eq!(filter.get_must().len(), 1);
        assert_eq!(
            filter.to_value(),
            json!({"bool": {
                "must": [{"term": {"tag": "wow"}}],
                "must_not": [{"range": {"age": {"from": 10, "to": 20}}}],
                "should": [{"term": {"tag": "sometag"}}]
            }})
        );
    }

    #[test]
    fn test_query_filter() {
        let filter = QueryFilter::new(MatchAllQuery::new()).name("all");
        assert_eq!(
            filter.to_string(),
            r#"{"fquery":{"query":{"match_all":{}},"_name":"all"}}"#
        );
    }
}
