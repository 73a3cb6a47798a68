use serde_json::{Value, json};

use crate::builder::{Builder, Suggester};
use crate::suggest::DirectGenerator;
use crate::util::{NamedBody, OptionStore};

/// Suggests corrected phrases, scored by an n-gram language model.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseSuggester {
    body: NamedBody,
}

impl PhraseSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "phrase"),
        }
    }

    suggest_common!();

    /// Wrap changed tokens in the suggestion text.
    pub fn highlight(mut self, pre_tag: impl Into<String>, post_tag: impl Into<String>) -> Self {
        let tags = json!({ "pre_tag": pre_tag.into(), "post_tag": post_tag.into() });
        self.set_option("highlight", tags);
        self
    }

    pub fn get_highlight(&self) -> Option<&Value> {
        self.get_option("highlight")
    }

    /// Stupid-backoff smoothing; the default model.
    pub fn stupid_backoff_smoothing(mut self, discount: f64) -> Self {
        self.set_option("smoothing", json!({ "stupid_backoff": { "discount": discount } }));
        self
    }

    /// Additive (Laplace) smoothing.
    pub fn laplace_smoothing(mut self, alpha: f64) -> Self {
        self.set_option("smoothing", json!({ "laplace": { "alpha": alpha } }));
        self
    }

    /// Linear interpolation of the trigram, bigram and unigram weights.
    pub fn linear_interpolation_smoothing(mut self, trigram: f64, bigram: f64, unigram: f64) -> Self {
        let model = json!({
            "linear_interpolation": {
                "trigram_lambda": trigram,
                "bigram_lambda": bigram,
                "unigram_lambda": unigram,
            }
        });
        self.set_option("smoothing", model);
        self
    }

    pub fn get_smoothing(&self) -> Option<&Value> {
        self.get_option("smoothing")
    }

    pub fn add_direct_generator(mut self, generator: DirectGenerator) -> Self {
        let mut generators = self.get_direct_generators().to_vec();
        generators.push(generator.to_value());
        self.set_option("direct_generator", Value::Array(generators));
        self
    }

    pub fn direct_generators(mut self, generators: impl IntoIterator<Item = DirectGenerator>) -> Self {
        let generators = generators.into_iter().map(|g| g.to_value()).collect();
        self.set_option("direct_generator", Value::Array(generators));
        self
    }

    pub fn get_direct_generators(&self) -> &[Value] {
        self.get_option("direct_generator")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    options! {
        uint gram_size / get_gram_size => "gram_size";
        float real_word_error_likelihood / get_real_word_error_likelihood => "real_word_error_likelihood";
        float confidence / get_confidence => "confidence";
        /// Maximum misspelled terms per phrase, absolute or as a fraction.
        float max_errors / get_max_errors => "max_errors";
        string separator / get_separator => "separator";
        bool force_unigrams / get_force_unigrams => "force_unigrams";
        uint token_limit / get_token_limit => "token_limit";
    }
}

impl_builder!(PhraseSuggester, Suggest);
impl Suggester for PhraseSuggester {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_suggester() {
        let suggester = PhraseSuggester::new("simple_phrase")
            .field("bigram")
            .gram_size(2)
            .highlight("<em>", "</em>")
            .laplace_smoothing(0.7)
            .add_direct_generator(DirectGenerator::new("body").suggest_mode("always"))
            .text("noble prize");
        assert_eq!(suggester.get_direct_generators().len(), 1);
        assert_eq!(
            suggester.to_value(),
            json!({"simple_phrase": {
                "phrase": {
                    "field": "bigram",
                    "gram_size": 2,
                    "highlight": {"pre_tag": "<em>", "post_tag": "</em>"},
                    "smoothing": {"laplace": {"alpha": 0.7}},
                    "direct_generator": [{"field": "body", "suggest_mode": "always"}]
                },
                "text": "noble prize"
            }})
        );
    }

    #[test]
    fn test_smoothing_replaces_model() {
        let suggester = PhraseSuggester::new("p")
            .stupid_backoff_smoothing(0.4)
            .linear_interpolation_smoothing(0.5, 0.3, 0.2);
        assert_eq!(
            suggester.get_smoothing(),
            Some(&json!({"linear_interpolation": {
                "trigram_lambda": 0.5,
                "bigram_lambda": 0.3,
                "unigram_lambda": 0.2
            }}))
        );
    }
}
