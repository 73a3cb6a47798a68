use crate::builder::{Builder, Facet, Filter, Query};
use crate::util::NamedBody;

/// Number of documents matching a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFacet {
    body: NamedBody,
}

impl QueryFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "query"),
        }
    }

    facet_common!();

    pub fn query(mut self, query: impl Query) -> Self {
        self.body.set_kind_value(query.to_value());
        self
    }
}

impl_builder!(QueryFacet, Facet);
impl Facet for QueryFacet {}

/// Number of documents matching a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterFacet {
    body: NamedBody,
}

impl FilterFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "filter"),
        }
    }

    facet_common!();

    pub fn filter(mut self, filter: impl Filter) -> Self {
        self.body.set_kind_value(filter.to_value());
        self
    }
}

impl_builder!(FilterFacet, Facet);
impl Facet for FilterFacet {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use crate::query::TermQuery;

    #[test]
    fn test_query_facet() {
        let facet = QueryFacet::new("wow").query(TermQuery::new("tag", "wow"));
        assert_eq!(
            facet.to_string(),
            r#"{"wow":{"query":{"term":{"tag":{"term":"wow"}}}}}"#
        );
    }

    #[test]
    fn test_filter_facet() {
        let facet = FilterFacet::new("wow")
            .filter(TermFilter::new("tag", "wow"))
            .global(true);
        assert_eq!(
            facet.to_string(),
            r#"{"wow":{"filter":{"term":{"tag":"wow"}},"global":true}}"#
        );
    }
}
