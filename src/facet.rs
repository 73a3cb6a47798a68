//! Facet builders.
//!
//! A facet is named by the caller and renders as
//! `{name: {kind: {...}, facet_filter, global, mode, scope, cache_filter, nested}}`.
//! Kind-specific options go inside the kind object; the settings shared by
//! every facet sit next to it.
//!
//! # Module Structure
//!
//! - `terms`: `terms`, `terms_stats`
//! - `statistical`: `statistical`
//! - `histogram`: `histogram`, `date_histogram`
//! - `range`: `range`
//! - `query`: `query`, `filter`
//! - `geo`: `geo_distance`

/// Settings shared by every facet, backed by `OptionStore::set_meta`.
macro_rules! facet_common {
    () => {
        /// Restrict the documents the facet is computed on.
        pub fn facet_filter(mut self, filter: impl $crate::builder::Filter) -> Self {
            let value = $crate::builder::Builder::to_value(&filter);
            $crate::util::OptionStore::set_meta(&mut self, "facet_filter", value);
            self
        }

        pub fn get_facet_filter(&self) -> Option<&serde_json::Value> {
            $crate::util::OptionStore::get_meta(self, "facet_filter")
        }

        /// Compute over every document in the search scope, ignoring the query.
        pub fn global(mut self, global: bool) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "global", serde_json::Value::Bool(global));
            self
        }

        pub fn get_global(&self) -> Option<bool> {
            $crate::util::OptionStore::get_meta(self, "global").and_then(serde_json::Value::as_bool)
        }

        /// `collector` or `post`.
        pub fn mode(mut self, mode: &str) -> Self {
            if let Some(mode) = $crate::util::pick("mode", mode, &["collector", "post"]) {
                $crate::util::OptionStore::set_meta(&mut self, "mode", serde_json::Value::String(mode));
            }
            self
        }

        pub fn get_mode(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "mode").and_then(serde_json::Value::as_str)
        }

        pub fn scope(mut self, scope: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "scope", serde_json::Value::String(scope.into()));
            self
        }

        pub fn get_scope(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "scope").and_then(serde_json::Value::as_str)
        }

        pub fn cache_filter(mut self, cache: bool) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "cache_filter", serde_json::Value::Bool(cache));
            self
        }

        pub fn get_cache_filter(&self) -> Option<bool> {
            $crate::util::OptionStore::get_meta(self, "cache_filter").and_then(serde_json::Value::as_bool)
        }

        /// Compute the facet on the nested documents under this path.
        pub fn nested(mut self, path: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "nested", serde_json::Value::String(path.into()));
            self
        }

        pub fn get_nested(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "nested").and_then(serde_json::Value::as_str)
        }

        pub fn get_name(&self) -> &str {
            self.body.name()
        }
    };
}

pub mod geo;
pub mod histogram;
pub mod query;
pub mod range;
pub mod statistical;
pub mod terms;

// Re-exports
pub use geo::GeoDistanceFacet;
pub use histogram::{DateHistogramFacet, HistogramFacet};
pub use query::{FilterFacet, QueryFacet};
pub use range::RangeFacet;
pub use statistical::StatisticalFacet;
pub use terms::{TermStatsFacet, TermsFacet};
