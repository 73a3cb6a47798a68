//! Accessor tables.
//!
//! Each builder lists its wire options once, as `kind setter / getter => "wire_key";`
//! entries, and [`options!`] expands them into a consuming setter plus a `get_*`
//! getter that both go through the builder's `OptionStore` implementation.
//!
//! Kinds:
//!
//! - `float`, `uint`, `int`, `bool`: plain scalars
//! - `string`: `impl Into<String>`, read back as `&str`
//! - `value`: any JSON value (`impl Into<Value>`)
//! - `choice ... ["a", "b"]`: lower-cased and checked against the list, dropped if absent
//! - `upper_choice ... ["A", "B"]`: same, upper-cased
//! - `rewrite`: multi-term rewrite method
//! - `list add + set / get`: append one item or replace the whole array
//! - `child ... : Marker`: embed a builder of the marker's category (copied on embed)
//! - `object ... : Type`: embed a concrete builder type such as `GeoPoint`
//!
//! [`children!`] expands append/replace/get triples for arrays of typed children.

macro_rules! options {
    () => {};

    ($(#[$meta:meta])* float $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: f64) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::from(value));
            self
        }

        pub fn $get(&self) -> Option<f64> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_f64)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* uint $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: u64) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::from(value));
            self
        }

        pub fn $get(&self) -> Option<u64> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_u64)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* int $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: i64) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::from(value));
            self
        }

        pub fn $get(&self) -> Option<i64> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_i64)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* bool $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: bool) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::Bool(value));
            self
        }

        pub fn $get(&self) -> Option<bool> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_bool)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* string $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::String(value.into()));
            self
        }

        pub fn $get(&self) -> Option<&str> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_str)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* value $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: impl Into<serde_json::Value>) -> Self {
            $crate::util::OptionStore::set_option(&mut self, $key, value.into());
            self
        }

        pub fn $get(&self) -> Option<&serde_json::Value> {
            $crate::util::OptionStore::get_option(self, $key)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* choice $set:ident / $get:ident => $key:literal [$($allowed:literal),+ $(,)?]; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: &str) -> Self {
            if let Some(value) = $crate::util::pick($key, value, &[$($allowed),+]) {
                $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::String(value));
            }
            self
        }

        pub fn $get(&self) -> Option<&str> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_str)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* upper_choice $set:ident / $get:ident => $key:literal [$($allowed:literal),+ $(,)?]; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: &str) -> Self {
            if let Some(value) = $crate::util::pick_upper($key, value, &[$($allowed),+]) {
                $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::String(value));
            }
            self
        }

        pub fn $get(&self) -> Option<&str> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_str)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* rewrite $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, value: &str) -> Self {
            if let Some(value) = $crate::util::rewrite_method($key, value) {
                $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::String(value));
            }
            self
        }

        pub fn $get(&self) -> Option<&str> {
            $crate::util::OptionStore::get_option(self, $key).and_then(serde_json::Value::as_str)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* list $add:ident + $set:ident / $get:ident => $key:literal; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $add(mut self, item: impl Into<serde_json::Value>) -> Self {
            let mut items = $crate::util::OptionStore::get_option(&self, $key)
                .and_then(serde_json::Value::as_array)
                .cloned()
                .unwrap_or_default();
            items.push(item.into());
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::Array(items));
            self
        }

        pub fn $set<I, V>(mut self, items: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<serde_json::Value>,
        {
            let items = items.into_iter().map(Into::into).collect();
            $crate::util::OptionStore::set_option(&mut self, $key, serde_json::Value::Array(items));
            self
        }

        pub fn $get(&self) -> Option<&[serde_json::Value]> {
            $crate::util::OptionStore::get_option(self, $key)
                .and_then(serde_json::Value::as_array)
                .map(Vec::as_slice)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* child $set:ident / $get:ident => $key:literal : $marker:ident; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, child: impl $crate::builder::$marker) -> Self {
            let value = $crate::builder::Builder::to_value(&child);
            $crate::util::OptionStore::set_option(&mut self, $key, value);
            self
        }

        pub fn $get(&self) -> Option<&serde_json::Value> {
            $crate::util::OptionStore::get_option(self, $key)
        }

        options!($($rest)*);
    };

    ($(#[$meta:meta])* object $set:ident / $get:ident => $key:literal : $ty:ty; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $set(mut self, object: $ty) -> Self {
            let value = $crate::builder::Builder::to_value(&object);
            $crate::util::OptionStore::set_option(&mut self, $key, value);
            self
        }

        pub fn $get(&self) -> Option<&serde_json::Value> {
            $crate::util::OptionStore::get_option(self, $key)
        }

        options!($($rest)*);
    };
}

/// Arrays of typed children stored in a `KeyedBody` named `body`.
///
/// The append form is checked at compile time through the marker trait; the
/// replace form takes [`Node`](crate::Node)s, validates all of them and only
/// then swaps the array in.
macro_rules! children {
    () => {};

    ($(#[$meta:meta])* $add:ident + $replace:ident / $get:ident => $key:literal : $marker:ident; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $add(mut self, child: impl $crate::builder::$marker) -> Self {
            self.body.push($key, $crate::builder::Builder::to_value(&child));
            self
        }

        pub fn $replace(mut self, children: Vec<$crate::data::Node>) -> $crate::error::Result<Self> {
            let values = $crate::data::expect_all(children, $crate::data::Category::$marker)?;
            self.body.replace($key, values);
            Ok(self)
        }

        pub fn $get(&self) -> &[serde_json::Value] {
            self.body.list($key).unwrap_or(&[])
        }

        children!($($rest)*);
    };
}

/// `_name`, `_cache` and `_cache_key`, shared by every filter.
macro_rules! filter_meta {
    () => {
        /// Name the filter so matches can be reported per filter.
        pub fn name(mut self, name: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "_name", serde_json::Value::String(name.into()));
            self
        }

        pub fn get_name(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "_name").and_then(serde_json::Value::as_str)
        }

        /// Enable or disable caching of the filter result.
        pub fn cache(mut self, cache: bool) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "_cache", serde_json::Value::Bool(cache));
            self
        }

        pub fn get_cache(&self) -> Option<bool> {
            $crate::util::OptionStore::get_meta(self, "_cache").and_then(serde_json::Value::as_bool)
        }

        pub fn cache_key(mut self, key: impl Into<String>) -> Self {
            $crate::util::OptionStore::set_meta(&mut self, "_cache_key", serde_json::Value::String(key.into()));
            self
        }

        pub fn get_cache_key(&self) -> Option<&str> {
            $crate::util::OptionStore::get_meta(self, "_cache_key").and_then(serde_json::Value::as_str)
        }
    };
}

/// Implement `Builder`, `Display` and `OptionStore` for a type whose state
/// lives in a `body` field exposing `to_value()` and `OptionStore`.
macro_rules! impl_builder {
    (@display $ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", $crate::builder::Builder::to_value(self))
            }
        }
    };

    (@category $ty:ty, $category:ident) => {
        impl $crate::builder::Builder for $ty {
            fn category(&self) -> $crate::data::Category {
                $crate::data::Category::$category
            }

            fn to_value(&self) -> serde_json::Value {
                self.body.to_value()
            }
        }

        impl_builder!(@display $ty);
    };

    // Field-scoped types whose field value is a bare term or list: every
    // option sits next to the field entry.
    (@siblings $ty:ty, $category:ident) => {
        impl_builder!(@category $ty, $category);

        impl $crate::util::OptionStore for $ty {
            fn get_option(&self, key: &str) -> Option<&serde_json::Value> {
                self.body.sibling(key)
            }

            fn set_option(&mut self, key: &str, value: serde_json::Value) {
                self.body.set_sibling(key, value)
            }
        }
    };

    ($ty:ty, $category:ident) => {
        impl_builder!(@category $ty, $category);

        impl $crate::util::OptionStore for $ty {
            fn get_option(&self, key: &str) -> Option<&serde_json::Value> {
                $crate::util::OptionStore::get_option(&self.body, key)
            }

            fn set_option(&mut self, key: &str, value: serde_json::Value) {
                $crate::util::OptionStore::set_option(&mut self.body, key, value)
            }

            fn get_meta(&self, key: &str) -> Option<&serde_json::Value> {
                $crate::util::OptionStore::get_meta(&self.body, key)
            }

            fn set_meta(&mut self, key: &str, value: serde_json::Value) {
                $crate::util::OptionStore::set_meta(&mut self.body, key, value)
            }
        }
    };
}

/// `field` / `get_field` for builders holding a `FieldBody` named `body`.
macro_rules! field_scoped {
    () => {
        /// Move the current value under another field name.
        pub fn field(mut self, field: impl Into<String>) -> Self {
            self.body.rename(field);
            self
        }

        pub fn get_field(&self) -> &str {
            self.body.field()
        }
    };
}
