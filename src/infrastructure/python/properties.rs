//! Python property context entries

use serde_json::{Value as JsonValue, json};

use crate::generation::PropertyMapper;
use crate::generation::utils::sanitize_python_identifier;
use crate::model::{Property, SimpleType};

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonPropertyMapper;

impl PythonPropertyMapper {
    /// Python literal for a default value
    pub fn literal(ty: SimpleType, value: &str) -> String {
        match ty {
            SimpleType::String | SimpleType::Char | SimpleType::ObjRef => {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            SimpleType::Boolean => {
                if value.eq_ignore_ascii_case("true") {
                    "True".to_string()
                } else {
                    "False".to_string()
                }
            }
            _ => value.to_string(),
        }
    }
}

impl PropertyMapper for PythonPropertyMapper {
    fn map_property(&self, property: &Property) -> JsonValue {
        json!({
            "id": property.id,
            "name": property.identifier(),
            "field": sanitize_python_identifier(property.identifier()),
            "type": property.ty.as_str(),
            "default": property
                .value
                .as_deref()
                .map_or_else(|| "None".to_string(), |v| Self::literal(property.ty, v)),
            "mode": property.mode.as_str(),
            "kinds": property.kinds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_property() {
        let mut property = Property::new("freq", SimpleType::Boolean).with_value("TRUE");
        property.name = Some("centerFrequency".to_string());
        let entry = PythonPropertyMapper.map_property(&property);
        assert_eq!(entry["field"], "center_frequency");
        assert_eq!(entry["default"], "True");
        assert_eq!(entry["type"], "boolean");
    }

    #[test]
    fn test_default_values() {
        let entry = PythonPropertyMapper.map_property(&Property::new("gain", SimpleType::Double));
        assert_eq!(entry["default"], "None");
        assert_eq!(PythonPropertyMapper::literal(SimpleType::String, "a\"b"), "\"a\\\"b\"");
        assert_eq!(PythonPropertyMapper::literal(SimpleType::Long, "42"), "42");
    }
}
