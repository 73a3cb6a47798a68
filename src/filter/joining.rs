use crate::builder::{Filter, Query};
use crate::util::KeyedBody;

/// Filters on nested objects under `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedFilter {
    body: KeyedBody,
}

impl NestedFilter {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("nested"),
        }
        .path(path)
    }

    options! {
        string path / get_path => "path";
        child query / get_query => "query": Query;
        child filter / get_filter => "filter": Filter;
        /// Also index the nested documents as part of the root result.
        bool join / get_join => "join";
        string scope / get_scope => "_scope";
        float boost / get_boost => "boost";
    }

    filter_meta!();
}

impl_builder!(NestedFilter, Filter);
impl Filter for NestedFilter {}

/// Parent documents whose children match.
#[derive(Debug, Clone, PartialEq)]
pub struct HasChildFilter {
    body: KeyedBody,
}

impl HasChildFilter {
    pub fn new(query: impl Query, doc_type: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("has_child"),
        }
        .query(query)
        .doc_type(doc_type)
    }

    options! {
        child query / get_query => "query": Query;
        /// Match children with a filter instead of a query.
        child filter / get_filter => "filter": Filter;
        string doc_type / get_doc_type => "type";
        string scope / get_scope => "_scope";
    }

    filter_meta!();
}

impl_builder!(HasChildFilter, Filter);
impl Filter for HasChildFilter {}

/// Child documents whose parent matches.
#[derive(Debug, Clone, PartialEq)]
pub struct HasParentFilter {
    body: KeyedBody,
}

impl HasParentFilter {
    pub fn new(query: impl Query, parent_type: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("has_parent"),
        }
        .query(query)
        .parent_type(parent_type)
    }

    options! {
        child query / get_query => "query": Query;
        child filter / get_filter => "filter": Filter;
        string parent_type / get_parent_type => "parent_type";
        string scope / get_scope => "_scope";
    }

    filter_meta!();
}

impl_builder!(HasParentFilter, Filter);
impl Filter for HasParentFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::filter::TermFilter;
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_nested_filter() {
        let filter = NestedFilter::new("obj1")
            .filter(TermFilter::new("obj1.color", "blue"))
            .join(false)
            .name("nested");
        assert_eq!(
            filter.to_value(),
            json!({"nested": {
                "path": "obj1",
                "filter": {"term": {"obj1.color": "blue"}},
                "join": false,
                "_name": "nested"
            }})
        );
    }

    #[test]
    fn test_has_child_filter() {
        let filter = HasChildFilter::new(TermQuery::new("tag", "something"), "blog_tag");
        assert_eq!(
            filter.to_string(),
            r#"{"has_child":{"query":{"term":{"tag":{"term":"something"}}},"type":"blog_tag"}}"#
        );
    }

    #[test]
    fn test_has_parent_filter() {
        let filter = HasParentFilter::new(TermQuery::new("tag", "x"), "blog").cache(true);
        assert_eq!(filter.get_parent_type(), Some("blog"));
        assert_eq!(filter.get_cache(), Some(true));
    }
}
