use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{DslError, Result};

/// The closed set of object categories a builder can belong to.
///
/// This tag is the only discriminator used when one builder is embedded into
/// another: a bool query accepts `Query` children, an and-filter accepts
/// `Filter` children, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Query,
    Filter,
    Facet,
    Sort,
    Highlight,
    Suggest,
    Generator,
    GeoPoint,
    Shape,
    IndexedShape,
    ScriptField,
    Document,
    Request,
}

impl Category {
    /// The tag string as exposed by the query DSL tooling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Query => "query",
            Category::Filter => "filter",
            Category::Facet => "facet",
            Category::Sort => "sort",
            Category::Highlight => "highlight",
            Category::Suggest => "suggest",
            Category::Generator => "generator",
            Category::GeoPoint => "geo point",
            Category::Shape => "shape",
            Category::IndexedShape => "indexed shape",
            Category::ScriptField => "script field",
            Category::Document => "document",
            Category::Request => "request",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wire value tagged with the category of the builder that produced it.
///
/// Nodes are what array-valued composition methods accept, so a caller can
/// mix builders of different concrete types in one `Vec`. A node built from
/// plain JSON with [`Node::untyped`] carries no category and is rejected
/// wherever a typed child is required.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    category: Option<Category>,
    value: Value,
}

impl Node {
    pub fn new(category: Category, value: Value) -> Self {
        Self {
            category: Some(category),
            value,
        }
    }

    /// Wrap a plain JSON value that did not come from a builder.
    pub fn untyped(value: Value) -> Self {
        Self {
            category: None,
            value,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Check whether this node carries the given category.
    pub fn is(&self, category: Category) -> bool {
        self.category == Some(category)
    }

    /// Unwrap the value if the node is of the expected category.
    pub fn expect(self, expected: Category) -> Result<Value> {
        if self.is(expected) {
            Ok(self.value)
        } else {
            Err(DslError::type_mismatch(expected, self.category))
        }
    }
}

/// Validate every node before returning any of them.
///
/// Callers assign the returned values only on success, so a rejected
/// element leaves the caller's state untouched.
pub(crate) fn expect_all(nodes: Vec<Node>, expected: Category) -> Result<Vec<Value>> {
    if let Some(bad) = nodes.iter().find(|n| !n.is(expected)) {
        return Err(DslError::type_mismatch(expected, bad.category));
    }
    Ok(nodes.into_iter().map(Node::into_value).collect())
}

pub fn is_query(node: &Node) -> bool {
    node.is(Category::Query)
}

pub fn is_filter(node: &Node) -> bool {
    node.is(Category::Filter)
}

pub fn is_facet(node: &Node) -> bool {
    node.is(Category::Facet)
}

pub fn is_sort(node: &Node) -> bool {
    node.is(Category::Sort)
}

pub fn is_highlight(node: &Node) -> bool {
    node.is(Category::Highlight)
}

pub fn is_suggest(node: &Node) -> bool {
    node.is(Category::Suggest)
}

pub fn is_generator(node: &Node) -> bool {
    node.is(Category::Generator)
}

pub fn is_geo_point(node: &Node) -> bool {
    node.is(Category::GeoPoint)
}

pub fn is_shape(node: &Node) -> bool {
    node.is(Category::Shape)
}

pub fn is_indexed_shape(node: &Node) -> bool {
    node.is(Category::IndexedShape)
}

pub fn is_script_field(node: &Node) -> bool {
    node.is(Category::ScriptField)
}

/// True for any node produced by a builder, whatever its category.
pub fn is_dsl_object(node: &Node) -> bool {
    node.category.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_strings() {
        assert_eq!(Category::Query.to_string(), "query");
        assert_eq!(Category::GeoPoint.to_string(), "geo point");
        assert_eq!(Category::IndexedShape.to_string(), "indexed shape");
        assert_eq!(Category::ScriptField.to_string(), "script field");
    }

    #[test]
    fn test_guards() {
        let node = Node::new(Category::Filter, json!({"match_all": {}}));
        assert!(is_filter(&node));
        assert!(!is_query(&node));
        assert!(is_dsl_object(&node));

        let raw = Node::untyped(json!({}));
        assert!(!is_filter(&raw));
        assert!(!is_dsl_object(&raw));
    }

    #[test]
    fn test_expect_all_rejects_whole_batch() {
        let nodes = vec![
            Node::new(Category::Filter, json!({"match_all": {}})),
            Node::untyped(json!({})),
        ];
        let err = expect_all(nodes, Category::Filter).unwrap_err();
        assert!(matches!(err, DslError::TypeMismatch { expected: Category::Filter, .. }));
    }

    #[test]
    fn test_expect_mismatch() {
        let node = Node::new(Category::Query, json!({"match_all": {}}));
        assert!(node.clone().expect(Category::Query).is_ok());
        assert!(node.expect(Category::Filter).is_err());
    }
}
