use serde_json::Value;

use crate::builder::Suggester;
use crate::util::{NamedBody, OptionStore};

/// Prefix completion over a `completion` field.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSuggester {
    body: NamedBody,
}

impl CompletionSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "completion"),
        }
    }

    suggest_common!();

    fn set_fuzzy(mut self, key: &str, value: Value) -> Self {
        let mut fuzzy = self
            .get_option("fuzzy")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        fuzzy.insert(key.to_string(), value);
        self.set_option("fuzzy", Value::Object(fuzzy));
        self
    }

    fn fuzzy_option(&self, key: &str) -> Option<&Value> {
        self.get_option("fuzzy").and_then(|f| f.get(key))
    }

    /// Enable fuzzy completion with default settings.
    pub fn fuzzy(mut self) -> Self {
        if self.get_option("fuzzy").is_none() {
            self.set_option("fuzzy", Value::Object(serde_json::Map::new()));
        }
        self
    }

    pub fn edit_distance(self, distance: u64) -> Self {
        self.set_fuzzy("edit_distance", Value::from(distance))
    }

    pub fn get_edit_distance(&self) -> Option<u64> {
        self.fuzzy_option("edit_distance").and_then(Value::as_u64)
    }

    pub fn transpositions(self, transpositions: bool) -> Self {
        self.set_fuzzy("transpositions", Value::Bool(transpositions))
    }

    pub fn get_transpositions(&self) -> Option<bool> {
        self.fuzzy_option("transpositions").and_then(Value::as_bool)
    }

    /// Input length below which no fuzzy suggestions are made.
    pub fn min_length(self, length: u64) -> Self {
        self.set_fuzzy("min_length", Value::from(length))
    }

    pub fn get_min_length(&self) -> Option<u64> {
        self.fuzzy_option("min_length").and_then(Value::as_u64)
    }

    /// Leading characters that must match exactly.
    pub fn prefix_length(self, length: u64) -> Self {
        self.set_fuzzy("prefix_length", Value::from(length))
    }

    pub fn get_prefix_length(&self) -> Option<u64> {
        self.fuzzy_option("prefix_length").and_then(Value::as_u64)
    }

    /// Measure edits in code points instead of bytes.
    pub fn unicode_aware(self, aware: bool) -> Self {
        self.set_fuzzy("unicode_aware", Value::Bool(aware))
    }

    pub fn get_unicode_aware(&self) -> Option<bool> {
        self.fuzzy_option("unicode_aware").and_then(Value::as_bool)
    }
}

impl_builder!(CompletionSuggester, Suggest);
impl Suggester for CompletionSuggester {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use serde_json::json;

    #[test]
    fn test_completion_suggester_fuzzy_block() {
        let suggester = CompletionSuggester::new("song-suggest")
            .text("n")
            .field("suggest")
            .edit_distance(2)
            .unicode_aware(true);
        assert_eq!(suggester.get_edit_distance(), Some(2));
        assert_eq!(
            suggester.to_value(),
            json!({"song-suggest": {
                "completion": {"field": "suggest", "fuzzy": {"edit_distance": 2, "unicode_aware": true}},
                "text": "n"
            }})
        );
    }

    #[test]
    fn test_completion_fuzzy_defaults() {
        let suggester = CompletionSuggester::new("s").field("suggest").fuzzy();
        assert_eq!(
            suggester.to_string(),
            r#"{"s":{"completion":{"field":"suggest","fuzzy":{}}}}"#
        );
    }
}
