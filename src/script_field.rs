use crate::util::KeyedBody;

/// A computed field returned with each hit: `{name: {script, lang, params, ignore_failure}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptField {
    body: KeyedBody,
}

impl ScriptField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: KeyedBody::new(name),
        }
    }

    pub fn get_name(&self) -> &str {
        self.body.key()
    }

    options! {
        string script / get_script => "script";
        string lang / get_lang => "lang";
        value params / get_params => "params";
        /// Return no value instead of failing the hit when the script errors.
        bool ignore_failure / get_ignore_failure => "ignore_failure";
    }
}

impl_builder!(ScriptField, ScriptField);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::data::Category;
    use serde_json::json;

    #[test]
    fn test_script_field() {
        let field = ScriptField::new("price_x2")
            .script("doc['price'].value * factor")
            .params(json!({"factor": 2}))
            .ignore_failure(true);
        assert_eq!(field.get_name(), "price_x2");
        assert_eq!(field.category(), Category::ScriptField);
        assert_eq!(
            field.to_string(),
            r#"{"price_x2":{"script":"doc['price'].value * factor","params":{"factor":2},"ignore_failure":true}}"#
        );
    }
}
