//! Queries across nested objects and parent/child documents.

use crate::builder::Query;
use crate::util::KeyedBody;

/// Runs a query against nested objects under `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedQuery {
    body: KeyedBody,
}

impl NestedQuery {
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
        /// How nested hit scores feed the root document score.
        choice score_mode / get_score_mode => "score_mode" ["avg", "total", "max", "none", "sum"];
        string scope / get_scope => "_scope";
        float boost / get_boost => "boost";
    }
}

impl_builder!(NestedQuery, Query);
impl Query for NestedQuery {}

/// Parent documents whose children match the query.
#[derive(Debug, Clone, PartialEq)]
pub struct HasChildQuery {
    body: KeyedBody,
}

impl HasChildQuery {
    pub fn new(query: impl Query, doc_type: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("has_child"),
        }
        .query(query)
        .doc_type(doc_type)
    }

    options! {
        child query / get_query => "query": Query;
        string doc_type / get_doc_type => "type";
        choice score_type / get_score_type => "score_type" ["none", "max", "sum", "avg"];
        string scope / get_scope => "_scope";
        float boost / get_boost => "boost";
    }
}

impl_builder!(HasChildQuery, Query);
impl Query for HasChildQuery {}

/// Child documents whose parent matches the query.
#[derive(Debug, Clone, PartialEq)]
pub struct HasParentQuery {
    body: KeyedBody,
}

impl HasParentQuery {
    pub fn new(query: impl Query, parent_type: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("has_parent"),
        }
        .query(query)
        .parent_type(parent_type)
    }

    options! {
        child query / get_query => "query": Query;
        string parent_type / get_parent_type => "parent_type";
        choice score_type / get_score_type => "score_type" ["none", "score"];
        string scope / get_scope => "_scope";
        float boost / get_boost => "boost";
    }
}

impl_builder!(HasParentQuery, Query);
impl Query for HasParentQuery {}
