//! REST URL construction shared by requests and documents.
//!
//! A URL is `/{segment}/{segment}...?{key}={value}&...`. Path segments and
//! parameter values are percent-encoded individually. List segments and
//! list parameters are joined with `,` after their items are encoded.

use std::fmt;

use serde_json::{Map, Value};

/// Render a scalar or a list of scalars as a parameter value.
///
/// Empty strings, empty lists, nulls and objects yield `None`.
fn param_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(urlencoding::encode(s).into_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().filter_map(param_value).collect();
            if items.is_empty() {
                None
            } else {
                Some(items.join(","))
            }
        }
        Value::Null | Value::Object(_) => None,
    }
}

/// Query-string parameters, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one parameter. Values that render empty are skipped.
    pub fn push(&mut self, key: &str, value: &Value) {
        if let Some(value) = param_value(value) {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Add every entry of `params` whose key is not in `skip`.
    pub fn extend_from(&mut self, params: &Map<String, Value>, skip: &[&str]) {
        for (key, value) in params {
            if !skip.contains(&key.as_str()) {
                self.push(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

impl From<&Map<String, Value>> for QueryParams {
    fn from(params: &Map<String, Value>) -> Self {
        let mut query = Self::new();
        query.extend_from(params, &[]);
        query
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// A REST path plus its query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestPath {
    segments: Vec<String>,
    params: QueryParams,
}

impl RestPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one path segment. Empty segments are skipped.
    pub fn segment(mut self, segment: &str) -> Self {
        if !segment.is_empty() {
            self.segments.push(urlencoding::encode(segment).into_owned());
        }
        self
    }

    /// Append a comma-joined list segment, e.g. `idx1,idx2`. Skipped when empty.
    pub fn list<S: AsRef<str>>(mut self, items: &[S]) -> Self {
        let items: Vec<String> = items
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|item| !item.is_empty())
            .map(|item| urlencoding::encode(item).into_owned())
            .collect();
        if !items.is_empty() {
            self.segments.push(items.join(","));
        }
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn get_params(&self) -> &QueryParams {
        &self.params
    }
}

impl fmt::Display for RestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.segments.is_empty() {
            f.write_str("/")?;
        }
        if !self.params.is_empty() {
            write!(f, "?{}", self.params)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_with_lists_and_endpoint() {
        let path = RestPath::new()
            .list(&["idx1", "idx2"])
            .list(&["t1"])
            .segment("_search");
        assert_eq!(path.to_string(), "/idx1,idx2/t1/_search");
    }

    #[test]
    fn test_empty_parts_are_skipped() {
        let path = RestPath::new().list::<&str>(&[]).segment("").segment("_count");
        assert_eq!(path.to_string(), "/_count");
        assert_eq!(RestPath::new().to_string(), "/");
    }

    #[test]
    fn test_params_encoding() {
        let mut params = QueryParams::new();
        params.push("routing", &json!("a b"));
        params.push("preference", &json!(""));
        params.push("fields", &json!(["name", "age"]));
        params.push("version", &json!(3));
        params.push("refresh", &json!(true));
        params.push("ignored", &Value::Null);

        assert_eq!(params.len(), 4);
        assert_eq!(params.get("routing"), Some("a%20b"));
        assert_eq!(
            RestPath::new().segment("i").params(params).to_string(),
            "/i?routing=a%20b&fields=name,age&version=3&refresh=true"
        );
    }

    #[test]
    fn test_extend_from_skips_keys() {
        let map = json!({"source": {"a": 1}, "routing": "r1", "ttl": "1d"});
        let mut params = QueryParams::new();
        params.extend_from(map.as_object().unwrap(), &["source"]);
        assert_eq!(params.to_string(), "routing=r1&ttl=1d");
    }

    #[test]
    fn test_segment_is_encoded() {
        let path = RestPath::new().segment("twitter").segment("my id/1");
        assert_eq!(path.to_string(), "/twitter/my%20id%2F1");
    }
}
