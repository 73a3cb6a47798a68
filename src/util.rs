//! Shared helpers for holding and editing builder state.

pub mod body;
pub mod options;

pub(crate) use body::{FieldBody, KeyedBody, NamedBody, OptionStore};
pub(crate) use options::{extend, pick, pick_upper, regexp_flags, rewrite_method};
