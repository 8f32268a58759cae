//! IDL to Java type translation

use crate::generation::TypeTranslator;
use crate::model::{IdlType, ParamDirection, Parameter};

const CORBA_PACKAGE: &str = "org.omg.CORBA";

/// Java language mapping of IDL types
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTranslator;

impl JavaTranslator {
    pub fn new() -> Self {
        Self
    }

    /// CORBA holder class used for `out` and `inout` parameters
    pub fn holder_type(&self, ty: &IdlType) -> String {
        match ty {
            IdlType::Named(_) => format!("{}Holder", self.base_type(ty)),
            IdlType::Sequence(element) => match element.as_ref() {
                IdlType::Named(_) => format!("{}SeqHolder", self.base_type(element)),
                primitive => match holder_stem(primitive) {
                    Some(stem) => format!("{CORBA_PACKAGE}.{stem}SeqHolder"),
                    None => format!("{CORBA_PACKAGE}.AnySeqHolder"),
                },
            },
            primitive => match holder_stem(primitive) {
                Some(stem) => format!("{CORBA_PACKAGE}.{stem}Holder"),
                None => self.base_type(ty),
            },
        }
    }
}

/// Holder class stem for primitive types
fn holder_stem(ty: &IdlType) -> Option<&'static str> {
    let stem = match ty {
        IdlType::Boolean => "Boolean",
        IdlType::Char => "Char",
        IdlType::WChar => "WChar",
        IdlType::Octet => "Octet",
        IdlType::Short | IdlType::UShort => "Short",
        IdlType::Long | IdlType::ULong => "Int",
        IdlType::LongLong | IdlType::ULongLong => "Long",
        IdlType::Float => "Float",
        IdlType::Double => "Double",
        IdlType::String => "String",
        IdlType::WString => "WString",
        IdlType::Any => "Any",
        IdlType::Object => "Object",
        IdlType::Void | IdlType::Sequence(_) | IdlType::Named(_) => return None,
    };
    Some(stem)
}

impl TypeTranslator for JavaTranslator {
    fn base_type(&self, ty: &IdlType) -> String {
        match ty {
            IdlType::Void => "void".to_string(),
            IdlType::Boolean => "boolean".to_string(),
            IdlType::Char | IdlType::WChar => "char".to_string(),
            IdlType::Octet => "byte".to_string(),
            IdlType::Short | IdlType::UShort => "short".to_string(),
            IdlType::Long | IdlType::ULong => "int".to_string(),
            IdlType::LongLong | IdlType::ULongLong => "long".to_string(),
            IdlType::Float => "float".to_string(),
            IdlType::Double => "double".to_string(),
            IdlType::String | IdlType::WString => "String".to_string(),
            IdlType::Any => format!("{CORBA_PACKAGE}.Any"),
            IdlType::Object => format!("{CORBA_PACKAGE}.Object"),
            IdlType::Sequence(element) => format!("{}[]", self.base_type(element)),
            IdlType::Named(_) => ty.scoped_name().unwrap_or_default().join("."),
        }
    }

    fn param_type(&self, param: &Parameter) -> String {
        match param.direction {
            ParamDirection::In => self.base_type(&param.ty),
            ParamDirection::Out | ParamDirection::InOut => self.holder_type(&param.ty),
        }
    }
}
