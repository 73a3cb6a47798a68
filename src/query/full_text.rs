//! Analyzed, full-text queries.

use serde_json::{Value, json};

use crate::builder::Query;
use crate::util::{FieldBody, KeyedBody, OptionStore};

/// Analyzes the text and builds a boolean, phrase or phrase-prefix query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    body: FieldBody,
}

impl MatchQuery {
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("match", field, json!({ "query": query.into() })),
        }
    }

    field_scoped!();

    options! {
        string query / get_query => "query";
        /// One of `boolean`, `phrase`, `phrase_prefix`.
        choice match_type / get_match_type => "type" ["boolean", "phrase", "phrase_prefix"];
        choice operator / get_operator => "operator" ["and", "or"];
        string analyzer / get_analyzer => "analyzer";
        value fuzziness / get_fuzziness => "fuzziness";
        uint prefix_length / get_prefix_length => "prefix_length";
        uint max_expansions / get_max_expansions => "max_expansions";
        uint slop / get_slop => "slop";
        float cutoff_frequency / get_cutoff_frequency => "cutoff_frequency";
        value minimum_should_match / get_minimum_should_match => "minimum_should_match";
        rewrite fuzzy_rewrite / get_fuzzy_rewrite => "fuzzy_rewrite";
        rewrite rewrite / get_rewrite => "rewrite";
        bool fuzzy_transpositions / get_fuzzy_transpositions => "fuzzy_transpositions";
        bool lenient / get_lenient => "lenient";
        choice zero_terms_query / get_zero_terms_query => "zero_terms_query" ["all", "none"];
        float boost / get_boost => "boost";
    }
}

impl_builder!(MatchQuery, Query);
impl Query for MatchQuery {}

/// A match query run against several fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchQuery {
    body: KeyedBody,
}

impl MultiMatchQuery {
    pub fn new<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<Value> = fields.into_iter().map(|f| Value::String(f.into())).collect();
        Self {
            body: KeyedBody::new("multi_match"),
        }
        .query(query)
        .fields(fields)
    }

    options! {
        string query / get_query => "query";
        /// `field^boost` syntax is passed through untouched.
        list add_field + fields / get_fields => "fields";
        choice match_type / get_match_type => "type" [
            "best_fields",
            "most_fields",
            "cross_fields",
            "phrase",
            "phrase_prefix",
            "boolean",
        ];
        bool use_dis_max / get_use_dis_max => "use_dis_max";
        float tie_breaker / get_tie_breaker => "tie_breaker";
        choice operator / get_operator => "operator" ["and", "or"];
        string analyzer / get_analyzer => "analyzer";
        value fuzziness / get_fuzziness => "fuzziness";
        uint prefix_length / get_prefix_length => "prefix_length";
        uint max_expansions / get_max_expansions => "max_expansions";
        uint slop / get_slop => "slop";
        float cutoff_frequency / get_cutoff_frequency => "cutoff_frequency";
        value minimum_should_match / get_minimum_should_match => "minimum_should_match";
        rewrite fuzzy_rewrite / get_fuzzy_rewrite => "fuzzy_rewrite";
        rewrite rewrite / get_rewrite => "rewrite";
        bool lenient / get_lenient => "lenient";
        choice zero_terms_query / get_zero_terms_query => "zero_terms_query" ["all", "none"];
        float boost / get_boost => "boost";
    }
}

impl_builder!(MultiMatchQuery, Query);
impl Query for MultiMatchQuery {}

/// A query written in the engine's Lucene-style query syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStringQuery {
    body: KeyedBody,
}

impl QueryStringQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new("query_string"),
        }
        .query(query)
    }

    options! {
        string query / get_query => "query";
        string default_field / get_default_field => "default_field";
        list add_field + fields / get_fields => "fields";
        bool use_dis_max / get_use_dis_max => "use_dis_max";
        float tie_breaker / get_tie_breaker => "tie_breaker";
        /// Stored upper-case: `AND` or `OR`.
        upper_choice default_operator / get_default_operator => "default_operator" ["AND", "OR"];
        string analyzer / get_analyzer => "analyzer";
        string quote_analyzer / get_quote_analyzer => "quote_analyzer";
        string quote_field_suffix / get_quote_field_suffix => "quote_field_suffix";
        bool allow_leading_wildcard / get_allow_leading_wildcard => "allow_leading_wildcard";
        bool lowercase_expanded_terms / get_lowercase_expanded_terms => "lowercase_expanded_terms";
        bool enable_position_increments / get_enable_position_increments => "enable_position_increments";
        uint fuzzy_prefix_length / get_fuzzy_prefix_length => "fuzzy_prefix_length";
        float fuzzy_min_sim / get_fuzzy_min_sim => "fuzzy_min_sim";
        uint fuzzy_max_expansions / get_fuzzy_max_expansions => "fuzzy_max_expansions";
        rewrite fuzzy_rewrite / get_fuzzy_rewrite => "fuzzy_rewrite";
        rewrite rewrite / get_rewrite => "rewrite";
        uint phrase_slop / get_phrase_slop => "phrase_slop";
        bool analyze_wildcard / get_analyze_wildcard => "analyze_wildcard";
        bool auto_generate_phrase_queries / get_auto_generate_phrase_queries => "auto_generate_phrase_queries";
        value minimum_should_match / get_minimum_should_match => "minimum_should_match";
        bool escape / get_escape => "escape";
        bool lenient / get_lenient => "lenient";
        float boost / get_boost => "boost";
    }
}

impl_builder!(QueryStringQuery, Query);
impl Query for QueryStringQuery {}

/// A query-string query scoped to one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldQuery {
    body: FieldBody,
}

impl FieldQuery {
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("field", field, json!({ "query": query.into() })),
        }
    }

    field_scoped!();

    options! {
        string query / get_query => "query";
        upper_choice default_operator / get_default_operator => "default_operator" ["AND", "OR"];
        string analyzer / get_analyzer => "analyzer";
        string quote_analyzer / get_quote_analyzer => "quote_analyzer";
        string quote_field_suffix / get_quote_field_suffix => "quote_field_suffix";
        bool auto_generate_phrase_queries / get_auto_generate_phrase_queries => "auto_generate_phrase_queries";
        bool allow_leading_wildcard / get_allow_leading_wildcard => "allow_leading_wildcard";
        bool lowercase_expanded_terms / get_lowercase_expanded_terms => "lowercase_expanded_terms";
        bool enable_position_increments / get_enable_position_increments => "enable_position_increments";
        float fuzzy_min_sim / get_fuzzy_min_sim => "fuzzy_min_sim";
        uint fuzzy_prefix_length / get_fuzzy_prefix_length => "fuzzy_prefix_length";
        uint fuzzy_max_expansions / get_fuzzy_max_expansions => "fuzzy_max_expansions";
        rewrite fuzzy_rewrite / get_fuzzy_rewrite => "fuzzy_rewrite";
        rewrite rewrite / get_rewrite => "rewrite";
        uint phrase_slop / get_phrase_slop => "phrase_slop";
        bool analyze_wildcard / get_analyze_wildcard => "analyze_wildcard";
        bool escape / get_escape => "escape";
        value minimum_should_match / get_minimum_should_match => "minimum_should_match";
        float boost / get_boost => "boost";
    }
}

impl_builder!(FieldQuery, Query);
impl Query for FieldQuery {}

/// Splits query terms into low- and high-frequency groups.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTermsQuery {
    body: FieldBody,
}

impl CommonTermsQuery {
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            body: FieldBody::new("common", field, json!({ "query": query.into() })),
        }
    }

    field_scoped!();

    /// Minimum matches among the low-frequency terms.
    pub fn minimum_should_match_low_freq(mut self, min: impl Into<Value>) -> Self {
        self.set_msm("low_freq", min.into());
        self
    }

    /// Minimum matches among the high-frequency terms.
    pub fn minimum_should_match_high_freq(mut self, min: impl Into<Value>) -> Self {
        self.set_msm("high_freq", min.into());
        self
    }

    pub fn get_minimum_should_match_low_freq(&self) -> Option<&Value> {
        self.msm("low_freq")
    }

    pub fn get_minimum_should_match_high_freq(&self) -> Option<&Value> {
        self.msm("high_freq")
    }

    fn msm(&self, key: &str) -> Option<&Value> {
        self.get_option("minimum_should_match")
            .and_then(Value::as_object)
            .and_then(|m| m.get(key))
    }

    fn set_msm(&mut self, key: &str, min: Value) {
        self.body.edit_options(|options| {
            crate::util::body::edit_object(options, "minimum_should_match", |msm| {
                msm.insert(key.to_string(), min);
            })
        });
    }

    options! {
        string query / get_query => "query";
        float cutoff_frequency / get_cutoff_frequency => "cutoff_frequency";
        choice high_freq_operator / get_high_freq_operator => "high_freq_operator" ["and", "or"];
        choice low_freq_operator / get_low_freq_operator => "low_freq_operator" ["and", "or"];
        string analyzer / get_analyzer => "analyzer";
        bool disable_coords / get_disable_coords => "disable_coords";
        float boost / get_boost => "boost";
    }
}

impl_builder!(CommonTermsQuery, Query);
impl Query for CommonTermsQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn test_match_query_type_and_operator() {
        let query = MatchQuery::new("message", "this is a test")
            .match_type("PHRASE")
            .operator("and")
            .operator("xor");
        assert_eq!(query.get_match_type(), Some("phrase"));
        assert_eq!(query.get_operator(), Some("and"));
        assert_eq!(
            query.to_string(),
            r#"{"match":{"message":{"query":"this is a test","type":"phrase","operator":"and"}}}"#
        );
    }

    #[test]
    fn test_multi_match_fields() {
        let query = MultiMatchQuery::new(["subject", "message"], "quick fox")
            .add_field("title^2")
            .tie_breaker(0.3);
        assert_eq!(
            query.to_value(),
            json!({"multi_match": {
                "query": "quick fox",
                "fields": ["subject", "message", "title^2"],
                "tie_breaker": 0.3
            }})
        );
    }

    #[test]
    fn test_query_string_default_operator_upper() {
        let query = QueryStringQuery::new("this AND that").default_operator("and");
        assert_eq!(query.get_default_operator(), Some("AND"));

        let query = query.default_operator("maybe");
        assert_eq!(query.get_default_operator(), Some("AND"));
    }

    #[test]
    fn test_field_query_rename() {
        let query = FieldQuery::new("name.first", "+something -else").phrase_slop(2).field("name.last");
        assert_eq!(
            query.to_value(),
            json!({"field": {"name.last": {"query": "+something -else", "phrase_slop": 2}}})
        );
    }

    #[test]
    fn test_common_terms_minimum_should_match() {
        let query = CommonTermsQuery::new("body", "nelly the elephant")
            .cutoff_frequency(0.001)
            .minimum_should_match_low_freq(2)
            .minimum_should_match_high_freq(3);
        assert_eq!(query.get_minimum_should_match_low_freq(), Some(&json!(2)));
        assert_eq!(
            query.to_value(),
            json!({"common": {"body": {
                "query": "nelly the elephant",
                "cutoff_frequency": 0.001,
                "minimum_should_match": {"low_freq": 2, "high_freq": 3}
            }}})
        );
    }
}
