use crate::builder::Query;
use crate::util::FieldBody;

/// Documents whose field falls within a range.
///
/// Bounds accept numbers, strings and dates alike.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    body: FieldBody,
}

impl RangeQuery {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_options("range", field),
        }
    }

    field_scoped!();

    options! {
        value from / get_from => "from";
        value to / get_to => "to";
        bool include_lower / get_include_lower => "include_lower";
        bool include_upper / get_include_upper => "include_upper";
        value gt / get_gt => "gt";
        value gte / get_gte => "gte";
        value lt / get_lt => "lt";
        value lte / get_lte => "lte";
        float boost / get_boost => "boost";
    }
}

impl_builder!(RangeQuery, Query);
impl Query for RangeQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use serde_json::json;

    #[test]
    fn test_range_query_bounds() {
        let query = RangeQuery::new("age").gte(10).lt(20).boost(2.0);
        assert_eq!(
            query.to_string(),
            r#"{"range":{"age":{"gte":10,"lt":20,"boost":2.0}}}"#
        );
    }

    #[test]
    fn test_range_query_rename() {
        let query = RangeQuery::new("born")
            .from("2012-01-01")
            .include_lower(false)
            .field("created");
        assert_eq!(query.get_field(), "created");
        assert_eq!(
            query.to_value(),
            json!({"range": {"created": {"from": "2012-01-01", "include_lower": false}}})
        );
    }
}
