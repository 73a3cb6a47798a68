//! Validation of enumerated option values.
//!
//! Setters for enumerated options never fail: a value outside the
//! allow-list is dropped and the previous value is kept.

use serde_json::{Map, Value};

/// Lower-case `value` and return it if it is one of `allowed`.
pub(crate) fn pick(option: &str, value: &str, allowed: &[&str]) -> Option<String> {
    let value = value.to_lowercase();
    if allowed.contains(&value.as_str()) {
        Some(value)
    } else {
        log::debug!("ignoring unsupported value '{value}' for option '{option}'");
        None
    }
}

/// Upper-case variant of [`pick`] for options the engine expects in capitals.
pub(crate) fn pick_upper(option: &str, value: &str, allowed: &[&str]) -> Option<String> {
    let value = value.to_uppercase();
    if allowed.contains(&value.as_str()) {
        Some(value)
    } else {
        log::debug!("ignoring unsupported value '{value}' for option '{option}'");
        None
    }
}

const REWRITE_METHODS: &[&str] = &[
    "constant_score_auto",
    "scoring_boolean",
    "constant_score_boolean",
    "constant_score_filter",
];

/// Validate a multi-term rewrite method.
///
/// Besides the fixed names, `top_terms_N` and `top_terms_boost_N` are accepted.
pub(crate) fn rewrite_method(option: &str, value: &str) -> Option<String> {
    let value = value.to_lowercase();
    if REWRITE_METHODS.contains(&value.as_str())
        || value.starts_with("top_terms_boost_")
        || value.starts_with("top_terms_")
    {
        Some(value)
    } else {
        log::debug!("ignoring unsupported value '{value}' for option '{option}'");
        None
    }
}

const REGEXP_FLAGS: &[&str] = &[
    "ALL",
    "ANYSTRING",
    "AUTOMATON",
    "COMPLEMENT",
    "EMPTY",
    "INTERSECTION",
    "INTERVAL",
    "NONE",
];

/// Join the supported regular-expression flags with `|`.
///
/// Unsupported flags are dropped one by one; `None` if nothing survives.
pub(crate) fn regexp_flags(flags: &[&str]) -> Option<String> {
    let kept: Vec<String> = flags
        .iter()
        .filter_map(|flag| pick_upper("flags", flag, REGEXP_FLAGS))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join("|"))
    }
}

/// Shallow merge: every top-level key of `source` overwrites `target`'s.
pub(crate) fn extend(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (k, v) in source {
        target.insert(k, v);
    }
}
