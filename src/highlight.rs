//! Highlighting of matched fragments.

use serde_json::{Map, Value};

use crate::builder::{Builder, Query};
use crate::data::Category;
use crate::util::OptionStore;
use crate::util::body::edit_object;

/// Options valid both globally and per field.
macro_rules! highlight_options {
    () => {
        options! {
            list add_pre_tag + pre_tags / get_pre_tags => "pre_tags";
            list add_post_tag + post_tags / get_post_tags => "post_tags";
            /// `score` sorts fragments by relevance.
            choice order / get_order => "order" ["score"];
            bool highlight_filter / get_highlight_filter => "highlight_filter";
            uint fragment_size / get_fragment_size => "fragment_size";
            uint number_of_fragments / get_number_of_fragments => "number_of_fragments";
            bool require_field_match / get_require_field_match => "require_field_match";
            uint boundary_max_scan / get_boundary_max_scan => "boundary_max_scan";
            string boundary_chars / get_boundary_chars => "boundary_chars";
            choice highlighter_type / get_highlighter_type => "type" [
                "highlighter",
                "fast-vector-highlighter",
                "plain",
                "postings",
            ];
            choice fragmenter / get_fragmenter => "fragmenter" ["simple", "span"];
            /// Highlighter-specific options, passed through as-is.
            value options / get_options => "options";
            uint no_match_size / get_no_match_size => "no_match_size";
        }
    };
}

/// Per-field highlight settings.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightField {
    name: String,
    body: Map<String, Value>,
}

impl HighlightField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Map::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    highlight_options!();

    options! {
        uint fragment_offset / get_fragment_offset => "fragment_offset";
        /// Fields whose matches are combined into this field's highlight.
        list add_matched_field + matched_fields / get_matched_fields => "matched_fields";
    }

    /// Highlight with this query instead of the search query.
    pub fn highlight_query(mut self, query: impl Query) -> Self {
        self.body.insert("highlight_query".into(), query.to_value());
        self
    }

    pub fn get_highlight_query(&self) -> Option<&Value> {
        self.body.get("highlight_query")
    }
}

impl OptionStore for HighlightField {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

/// Highlight settings of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    body: Map<String, Value>,
}

impl Highlight {
    /// Highlight the given fields with default settings.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut highlight = Self { body: Map::new() };
        edit_object(&mut highlight.body, "fields", |_| ());
        fields.into_iter().fold(highlight, |h, field| h.add_field(field))
    }

    /// Add a field with default settings. An existing entry is kept.
    pub fn add_field(mut self, field: impl Into<String>) -> Self {
        edit_object(&mut self.body, "fields", |fields| {
            fields
                .entry(field)
                .or_insert_with(|| Value::Object(Map::new()));
        });
        self
    }

    /// Add or replace a field's settings.
    pub fn field(mut self, field: HighlightField) -> Self {
        edit_object(&mut self.body, "fields", |fields| {
            fields.insert(field.name, Value::Object(field.body));
        });
        self
    }

    /// Settings of one field, `None` if it is not highlighted.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.get_fields().and_then(|fields| fields.get(name))
    }

    pub fn get_fields(&self) -> Option<&Map<String, Value>> {
        self.body.get("fields").and_then(Value::as_object)
    }

    highlight_options!();

    options! {
        choice tags_schema / get_tags_schema => "tags_schema" ["styled"];
        choice encoder / get_encoder => "encoder" ["default", "html"];
    }
}

impl OptionStore for Highlight {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl Builder for Highlight {
    fn category(&self) -> Category {
        Category::Highlight
    }

    fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl_builder!(@display Highlight);
