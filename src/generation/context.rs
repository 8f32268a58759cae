//! Generation context - the field mapping consumed by templates

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::generation::GenerationError;

/// Ordered mapping of field name to value.
///
/// Mappers build it incrementally (base fields, then properties and ports).
/// Once placed in a [`GenerationPlan`](crate::generation::GenerationPlan) it is
/// only reachable by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationContext {
    fields: Map<String, JsonValue>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same name
    pub fn insert(&mut self, key: &str, value: JsonValue) {
        self.fields.insert(key.to_string(), value);
    }

    /// Merge another context's fields into this one, in their order
    pub fn extend(&mut self, other: GenerationContext) {
        self.fields.extend(other.fields);
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// String field lookup, following dotted paths into nested objects
    pub fn get_str(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let mut value = self.fields.get(segments.next()?)?;
        for segment in segments {
            value = value.get(segment)?;
        }
        value.as_str()
    }

    /// Ensure every required field is present
    pub fn validate(&self, component: &str, required: &[&str]) -> Result<(), GenerationError> {
        match required.iter().find(|field| !self.contains(field)) {
            Some(field) => Err(GenerationError::MissingContextField {
                component: component.to_string(),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(self.fields.clone())
    }
}

impl From<Map<String, JsonValue>> for GenerationContext {
    fn from(fields: Map<String, JsonValue>) -> Self {
        Self { fields }
    }
}

impl From<GenerationContext> for Map<String, JsonValue> {
    fn from(context: GenerationContext) -> Self {
        context.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_preserves_insertion_order() {
        let mut context = GenerationContext::new();
        context.insert("zeta", json!(1));
        context.insert("alpha", json!(2));
        context.insert("mid", json!(3));

        let keys: Vec<_> = context.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&context).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn test_context_get_str_follows_paths() {
        let mut context = GenerationContext::new();
        context.insert("baseclass", json!({"name": "Echo_base", "file": "Echo_base.java"}));
        assert_eq!(context.get_str("baseclass.file"), Some("Echo_base.java"));
        assert_eq!(context.get_str("baseclass.missing"), None);
        assert_eq!(context.get_str("userclass.name"), None);
    }

    #[test]
    fn test_context_validate_reports_first_missing_field() {
        let mut context = GenerationContext::new();
        context.insert("package", json!("demo"));

        assert!(context.validate("Echo", &["package"]).is_ok());
        assert_eq!(
            context.validate("Echo", &["package", "ports", "properties"]),
            Err(GenerationError::MissingContextField {
                component: "Echo".to_string(),
                field: "ports".to_string(),
            })
        );
    }

    #[test]
    fn test_context_extend() {
        let mut base = GenerationContext::new();
        base.insert("name", json!("Echo"));
        let mut extra = GenerationContext::new();
        extra.insert("ports", json!([]));
        base.extend(extra);
        assert_eq!(base.len(), 2);
        assert!(base.contains("ports"));
    }
}
