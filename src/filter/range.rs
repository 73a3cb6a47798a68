use crate::builder::Filter;
use crate::util::FieldBody;

macro_rules! range_filter {
    ($(#[$doc:meta])* $name:ident => $key:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            body: FieldBody,
        }

        impl $name {
            pub fn new(field: impl Into<String>) -> Self {
                Self {
                    body: FieldBody::with_options($key, field),
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
            }

            filter_meta!();
        }

        impl_builder!($name, Filter);
        impl Filter for $name {}
    };
}

range_filter! {
    /// Documents whose field falls within a range.
    RangeFilter => "range"
}

range_filter! {
    /// A range filter evaluated through the field data of numeric fields.
    NumericRangeFilter => "numeric_range"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use serde_json::json;

    #[test]
    fn test_range_filter_meta_sits_outside_field() {
        let filter = RangeFilter::new("age").gte(10).lte(20).cache(true);
        assert_eq!(
            filter.to_string(),
            r#"{"range":{"age":{"gte":10,"lte":20},"_cache":true}}"#
        );
    }

    #[test]
    fn test_numeric_range_rename() {
        let filter = NumericRangeFilter::new("price")
            .from(5)
            .to(10)
            .include_upper(false)
            .field("cost");
        assert_eq!(
            filter.to_value(),
            json!({"numeric_range": {"cost": {"from": 5, "to": 10, "include_upper": false}}})
        );
    }
}
