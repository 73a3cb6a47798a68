use crate::builder::Facet;
use crate::util::NamedBody;

/// Count, total, min, max, mean and variance of a numeric field or script.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalFacet {
    body: NamedBody,
}

impl StatisticalFacet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: NamedBody::new(name, "statistical"),
        }
    }

    facet_common!();

    options! {
        string field / get_field => "field";
        list add_field + fields / get_fields => "fields";
        string script / get_script => "script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
    }
}

impl_builder!(StatisticalFacet, Facet);
impl Facet for StatisticalFacet {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistical_facet_fields() {
        let facet = StatisticalFacet::new("stat")
            .add_field("num1")
            .add_field("num2")
            .nested("obj");
        assert_eq!(
            facet.to_string(),
            r#"{"stat":{"statistical":{"fields":["num1","num2"]},"nested":"obj"}}"#
        );
    }

    #[test]
    fn test_statistical_facet_script() {
        let facet = StatisticalFacet::new("stat")
            .script("doc['num1'].value * factor")
            .params(json!({"factor": 2}));
        assert_eq!(facet.get_params(), Some(&json!({"factor": 2})));
        assert_eq!(facet.get_field(), None);
    }
}
