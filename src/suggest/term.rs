use crate::builder::Suggester;
use crate::util::NamedBody;

/// Suggests corrections for each term of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct TermSuggester {
    body: NamedBody,
}

impl TermSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "term"),
        }
    }

    suggest_common!();

    options! {
        /// When to suggest: only for missing terms, for more popular terms, or always.
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
    }
}

impl_builder!(TermSuggester, Suggest);
impl Suggester for TermSuggester {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::data::Category;
    use serde_json::json;

    #[test]
    fn test_term_suggester() {
        let suggester = TermSuggester::new("my-suggestion")
            .text("devloper")
            .field("body")
            .suggest_mode("POPULAR")
            .sort("relevance")
            .max_edits(2);
        assert_eq!(suggester.category(), Category::Suggest);
        assert_eq!(suggester.get_sort(), None);
        assert_eq!(
            suggester.to_value(),
            json!({"my-suggestion": {
                "term": {"field": "body", "suggest_mode": "popular", "max_edits": 2},
                "text": "devloper"
            }})
        );
    }
}
