use serde_json::Value;

use crate::builder::Facet;
use crate::util::{NamedBody, OptionStore, pick_upper};

const REGEX_FLAGS: &[&str] = &[
    "CANON_EQ",
    "CASE_INSENSITIVE",
    "COMMENTS",
    "DOTALL",
    "LITERAL",
    "MULTILINE",
    "UNICODE_CASE",
    "UNICODE_CHARACTER_CLASS",
    "UNIX_LINES",
];

/// The most frequent terms of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsFacet {
    body: NamedBody,
}

impl TermsFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "terms"),
        }
    }

    facet_common!();

    /// Flags for `regex`, joined with `|`. Unknown flags are dropped.
    pub fn regex_flags(mut self, flags: &[&str]) -> Self {
        let kept: Vec<String> = flags
            .iter()
            .filter_map(|flag| pick_upper("regex_flags", flag, REGEX_FLAGS))
            .collect();
        if !kept.is_empty() {
            self.set_option("regex_flags", Value::String(kept.join("|")));
        }
        self
    }

    pub fn get_regex_flags(&self) -> Option<&str> {
        self.get_option("regex_flags").and_then(Value::as_str)
    }

    options! {
        string field / get_field => "field";
        /// Aggregate terms over several fields.
        list add_field + fields / get_fields => "fields";
        string script_field / get_script_field => "script_field";
        uint size / get_size => "size";
        uint shard_size / get_shard_size => "shard_size";
        choice order / get_order => "order" ["count", "term", "reverse_count", "reverse_term"];
        bool all_terms / get_all_terms => "all_terms";
        list add_exclude + exclude / get_exclude => "exclude";
        string regex / get_regex => "regex";
        string script / get_script => "script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        string execution_hint / get_execution_hint => "execution_hint";
    }
}

impl_builder!(TermsFacet, Facet);
impl Facet for TermsFacet {}

/// Statistics of a value field grouped by the terms of a key field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermStatsFacet {
    body: NamedBody,
}

impl TermStatsFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "terms_stats"),
        }
    }

    facet_common!();

    options! {
        string key_field / get_key_field => "key_field";
        string value_field / get_value_field => "value_field";
        string value_script / get_value_script => "value_script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        uint size / get_size => "size";
        uint shard_size / get_shard_size => "shard_size";
        choice order / get_order => "order" [
            "term",
            "reverse_term",
            "count",
            "reverse_count",
            "total",
            "reverse_total",
            "min",
            "reverse_min",
            "max",
            "reverse_max",
            "mean",
            "reverse_mean",
        ];
        bool all_terms / get_all_terms => "all_terms";
    }
}

impl_builder!(TermStatsFacet, Facet);
impl Facet for TermStatsFacet {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::data::Category;
    use crate::filter::TermFilter;
    use serde_json::json;

    #[test]
    fn test_terms_facet() {
        let facet = TermsFacet::new("tags")
            .field("tag")
            .size(10)
            .order("REVERSE_COUNT")
            .order("random")
            .global(true);
        assert_eq!(facet.get_name(), "tags");
        assert_eq!(facet.category(), Category::Facet);
        assert_eq!(
            facet.to_string(),
            r#"{"tags":{"terms":{"field":"tag","size":10,"order":"reverse_count"},"global":true}}"#
        );
    }

    #[test]
    fn test_terms_facet_regex_and_filter() {
        let facet = TermsFacet::new("t")
            .field("tag")
            .regex("_.*")
            .regex_flags(&["dotall", "bogus", "multiline"])
            .facet_filter(TermFilter::new("user", "kimchy"))
            .mode("POST");
        assert_eq!(facet.get_regex_flags(), Some("DOTALL|MULTILINE"));
        assert_eq!(facet.get_mode(), Some("post"));
        assert_eq!(
            facet.to_value(),
            json!({"t": {
                "terms": {"field": "tag", "regex": "_.*", "regex_flags": "DOTALL|MULTILINE"},
                "facet_filter": {"term": {"user": "kimchy"}},
                "mode": "post"
            }})
        );
    }

    #[test]
    fn test_term_stats_facet() {
        let facet = TermStatsFacet::new("tag_price")
            .key_field("tag")
            .value_field("price")
            .order("mean")
            .order("median");
        assert_eq!(facet.get_order(), Some("mean"));
        assert_eq!(
            facet.to_value(),
            json!({"tag_price": {"terms_stats": {"key_field": "tag", "value_field": "price", "order": "mean"}}})
        );
    }
}
