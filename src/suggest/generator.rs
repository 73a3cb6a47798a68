use serde_json::{Map, Value};

use crate::builder::Builder;
use crate::data::Category;
use crate::util::OptionStore;

/// Candidate generator for a phrase suggester.
///
/// Renders as a bare options object; the phrase suggester collects these
/// into its `direct_generator` list.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectGenerator {
    body: Map<String, Value>,
}

impl DirectGenerator {
    pub fn new(field: impl Into<String>) -> Self {
        Self { body: Map::new() }.field(field)
    }

    options! {
        string field / get_field => "field";
        uint size / get_size => "size";
        choice suggest_mode / get_suggest_mode => "suggest_mode" ["missing", "popular", "always"];
        float accuracy / get_accuracy => "accuracy";
        choice sort / get_sort => "sort" ["score", "frequency"];
        choice string_distance / get_string_distance => "string_distance" [
            "internal",
            "damerau_levenshtein",
            "levenstein",
            "jarowinkler",
            "ngram",
        ];
        uint max_edits / get_max_edits => "max_edits";
        uint max_inspections / get_max_inspections => "max_inspections";
        float max_term_freq / get_max_term_freq => "max_term_freq";
        uint prefix_length / get_prefix_length => "prefix_length";
        uint min_word_len / get_min_word_len => "min_word_len";
        float min_doc_freq / get_min_doc_freq => "min_doc_freq";
        /// Analyzer applied to each token before candidates are generated.
        string pre_filter / get_pre_filter => "pre_filter";
        /// Analyzer applied to each candidate before it is returned.
        string post_filter / get_post_filter => "post_filter";
    }
}

impl OptionStore for DirectGenerator {
    fn get_option(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    fn set_option(&mut self, key: &str, value: Value) {
        self.body.insert(key.to_string(), value);
    }
}

impl Builder for DirectGenerator {
    fn category(&self) -> Category {
        Category::Generator
    }

    fn to_value(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl_builder!(@display DirectGenerator);
