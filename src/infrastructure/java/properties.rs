//! Java property context entries

use serde_json::{Value as JsonValue, json};

use crate::generation::PropertyMapper;
use crate::generation::utils::sanitize_java_identifier;
use crate::model::{Property, SimpleType};

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaPropertyMapper;

impl JavaPropertyMapper {
    pub fn java_type(ty: SimpleType) -> &'static str {
        match ty {
            SimpleType::Boolean => "boolean",
            SimpleType::Char => "char",
            SimpleType::Double => "double",
            SimpleType::Float => "float",
            SimpleType::Short | SimpleType::UShort => "short",
            SimpleType::Long | SimpleType::ULong => "int",
            SimpleType::LongLong | SimpleType::ULongLong => "long",
            SimpleType::Octet => "byte",
            SimpleType::String => "String",
            SimpleType::ObjRef => "org.omg.CORBA.Object",
        }
    }

    /// Java literal for a default value
    pub fn literal(ty: SimpleType, value: &str) -> String {
        match ty {
            SimpleType::String | SimpleType::ObjRef => {
                format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            SimpleType::Char => match value.chars().next().unwrap_or(' ') {
                '\'' => "'\\''".to_string(),
                '\\' => "'\\\\'".to_string(),
                ch => format!("'{ch}'"),
            },
            SimpleType::Float => format!("{value}F"),
            SimpleType::LongLong | SimpleType::ULongLong => format!("{value}L"),
            SimpleType::Short | SimpleType::UShort => format!("(short){value}"),
            SimpleType::Octet => format!("(byte){value}"),
            SimpleType::Boolean => value.to_lowercase(),
            SimpleType::Double | SimpleType::Long | SimpleType::ULong => value.to_string(),
        }
    }
}

impl PropertyMapper for JavaPropertyMapper {
    fn map_property(&self, property: &Property) -> JsonValue {
        json!({
            "id": property.id,
            "name": property.identifier(),
            "field": sanitize_java_identifier(property.identifier()),
            "type": Self::java_type(property.ty),
            "default": property.value.as_deref().map(|v| Self::literal(property.ty, v)),
            "mode": property.mode.as_str(),
            "kinds": property.kinds,
        })
    }
}
