//! Suggesters.
//!
//! A suggester is named by the caller and renders as
//! `{name: {kind: {...}, text}}`. Requests merge every suggester they are
//! given into their `suggest` object, next to the optional global `text`.
//!
//! # Module Structure
//!
//! - `term`: per-term corrections
//! - `phrase`: whole-phrase corrections, with [`DirectGenerator`] candidates
//! - `completion`: prefix completion
//! - `generator`: `DirectGenerator`

/// `text`, `field`, `analyzer`, `size` and `shard_size`, shared by every suggester.
macro_rules! suggest_common {
    () => {
        /// Text to suggest for. Overrides the request-wide suggest text.
        pub fn text(mut self, text: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "text", serde_json::Value::String(text.into()));
            self
        }

        pub fn get_text(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "text").and_then(serde_json::Value::as_str)
        }

        pub fn get_name(&self) -> &str {
            self.body.name()
        }

        options! {
            string field / get_field => "field";
            string analyzer / get_analyzer => "analyzer";
            uint size / get_size => "size";
            uint shard_size / get_shard_size => "shard_size";
        }
    };
}

pub mod completion;
pub mod generator;
pub mod phrase;
pub mod term;

// Re-exports
pub use completion::CompletionSuggester;
pub use generator::DirectGenerator;
pub use phrase::PhraseSuggester;
pub use term::TermSuggester;
