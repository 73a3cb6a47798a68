//! The builder contract shared by every DSL object.

use std::fmt;

use serde_json::Value;

use crate::data::{Category, Node};

/// A DSL object that can render itself as a wire value.
///
/// `Display` renders the same value as compact JSON, in insertion order.
pub trait Builder: fmt::Display {
    /// The category tag of this object. Constant for the object's lifetime.
    fn category(&self) -> Category;

    /// An owned snapshot of the wire representation.
    ///
    /// Embedding copies this snapshot, so later changes to the child do not
    /// reach a parent it was already embedded into.
    fn to_value(&self) -> Value;

    /// The snapshot tagged with its category.
    fn to_node(&self) -> Node {
        Node::new(self.category(), self.to_value())
    }
}

/// Marker for builders of category `query`.
pub trait Query: Builder {}

/// Marker for builders of category `filter`.
pub trait Filter: Builder {}

/// Marker for builders of category `facet`.
pub trait Facet: Builder {}

/// Marker for builders of category `suggest`.
pub trait Suggester: Builder {}

impl<B: Builder> From<B> for Node {
    fn from(builder: B) -> Self {
        builder.to_node()
    }
}
