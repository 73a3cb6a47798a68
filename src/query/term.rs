//! Queries matching exact, non-analyzed terms.

use serde_json::{Value, json};

use crate::builder::Query;
use crate::util::{FieldBody, KeyedBody, regexp_flags};

/// Matches every document: `{"match_all": {}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAllQuery {
    body: KeyedBody,
}

impl MatchAllQuery {
    pub fn new() -> Self {
        Self {
            body: KeyedBody::new("match_all"),
        }
    }

    options! {
        float boost / get_boost => "boost";
    }
}

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl_builder!(MatchAllQuery, Query);
impl Query for MatchAllQuery {}

/// Documents whose field contains the exact term.
///
/// Wire shape: `{"term": {field: {"term": value, "boost": ..}}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    body: FieldBody,
}

impl TermQuery {
    pub fn new(field: impl Into<String>, term: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("term", field, json!({ "term": term.into() })),
        }
    }

    field_scoped!();

    options! {
        value term / get_term => "term";
        float boost / get_boost => "boost";
    }
}

impl_builder!(TermQuery, Query);
impl Query for TermQuery {}

/// Documents whose field contains any of the terms.
///
/// Wire shape: `{"terms": {field: [..], "minimum_should_match": .., ...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    body: FieldBody,
}

impl TermsQuery {
    pub fn new<I, V>(field: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        Self {
            body: FieldBody::new("terms", field, Value::Array(terms)),
        }
    }

    field_scoped!();

    /// Append one term.
    pub fn add_term(mut self, term: impl Into<Value>) -> Self {
        let mut terms = self.get_terms().to_vec();
        terms.push(term.into());
        self.body.set_value(Value::Array(terms));
        self
    }

    /// Replace all terms.
    pub fn terms<I, V>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let terms = terms.into_iter().map(Into::into).collect();
        self.body.set_value(Value::Array(terms));
        self
    }

    pub fn get_terms(&self) -> &[Value] {
        self.body.value().as_array().map_or(&[], Vec::as_slice)
    }

    options! {
        value minimum_should_match / get_minimum_should_match => "minimum_should_match";
        bool disable_coord / get_disable_coord => "disable_coord";
        float boost / get_boost => "boost";
    }
}

impl_builder!(@siblings TermsQuery, Query);
impl Query for TermsQuery {}

/// Documents whose field has a term starting with the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixQuery {
    body: FieldBody,
}

impl PrefixQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("prefix", field, json!({ "value": value.into() })),
        }
    }

    field_scoped!();

    options! {
        value value / get_value => "value";
        rewrite rewrite / get_rewrite => "rewrite";
        float boost / get_boost => "boost";
    }
}

impl_builder!(PrefixQuery, Query);
impl Query for PrefixQuery {}

/// Documents matching a wildcard pattern (`*` and `?`).
#[derive(Debug, Clone, PartialEq)]
pub struct WildcardQuery {
    body: FieldBody,
}

impl WildcardQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("wildcard", field, json!({ "value": value.into() })),
        }
    }

    field_scoped!();

    options! {
        value value / get_value => "value";
        rewrite rewrite / get_rewrite => "rewrite";
        float boost / get_boost => "boost";
    }
}

impl_builder!(WildcardQuery, Query);
impl Query for WildcardQuery {}

/// Documents matching a regular expression.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexpQuery {
    body: FieldBody,
}

impl RegexpQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("regexp", field, json!({ "value": value.into() })),
        }
    }

    field_scoped!();

    /// Enable regular-expression operators, stored as `"A|B"`.
    pub fn flags(mut self, flags: &[&str]) -> Self {
        if let Some(flags) = regexp_flags(flags) {
            self.body.edit_options(|options| {
                options.insert("flags".into(), Value::String(flags));
            });
        }
        self
    }

    pub fn get_flags(&self) -> Option<&str> {
        self.body.option("flags").and_then(Value::as_str)
    }

    options! {
        value value / get_value => "value";
        /// Flags as the engine's integer bit set.
        int flags_value / get_flags_value => "flags_value";
        rewrite rewrite / get_rewrite => "rewrite";
        float boost / get_boost => "boost";
    }
}

impl_builder!(RegexpQuery, Query);
impl Query for RegexpQuery {}

/// Terms within an edit distance of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyQuery {
    body: FieldBody,
}

impl FuzzyQuery {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("fuzzy", field, json!({ "value": value.into() })),
        }
    }

    field_scoped!();

    options! {
        value value / get_value => "value";
        bool transpositions / get_transpositions => "transpositions";
        uint max_expansions / get_max_expansions => "max_expansions";
        float min_similarity / get_min_similarity => "min_similarity";
        uint prefix_length / get_prefix_length => "prefix_length";
        rewrite rewrite / get_rewrite => "rewrite";
        float boost / get_boost => "boost";
    }
}

impl_builder!(FuzzyQuery, Query);
impl Query for FuzzyQuery {}

/// The span counterpart of [`TermQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTermQuery {
    body: FieldBody,
}

impl SpanTermQuery {
    pub fn new(field: impl Into<String>, term: impl Into<Value>) -> Self {
        Self {
            body: FieldBody::new("span_term", field, json!({ "term": term.into() })),
        }
    }

    field_scoped!();

    options! {
        value term / get_term => "term";
        float boost / get_boost => "boost";
    }
}

impl_builder!(SpanTermQuery, Query);
impl Query for SpanTermQuery {}

/// Documents with the given ids.
#[derive(Debug, Clone, PartialEq)]
pub struct IdsQuery {
    body: KeyedBody,
}

impl IdsQuery {
    pub fn new<I, V>(ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            body: KeyedBody::new("ids"),
        }
        .values(ids)
    }

    options! {
        list add_value + values / get_values => "values";
        list add_doc_type + doc_types / get_doc_types => "type";
        float boost / get_boost => "boost";
    }
}

impl_builder!(IdsQuery, Query);
impl Query for IdsQuery {}
