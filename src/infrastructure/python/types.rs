//! IDL to Python type translation

use crate::generation::TypeTranslator;
use crate::model::{IdlType, Parameter};

/// Python language mapping of IDL types
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonTranslator;

impl PythonTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl TypeTranslator for PythonTranslator {
    fn base_type(&self, ty: &IdlType) -> String {
        match ty {
            IdlType::Void => "None".to_string(),
            IdlType::Boolean => "bool".to_string(),
            IdlType::Char | IdlType::WChar | IdlType::String | IdlType::WString => {
                "str".to_string()
            }
            IdlType::Octet
            | IdlType::Short
            | IdlType::UShort
            | IdlType::Long
            | IdlType::ULong => "int".to_string(),
            IdlType::LongLong | IdlType::ULongLong => "long".to_string(),
            IdlType::Float | IdlType::Double => "float".to_string(),
            IdlType::Any => "CORBA.Any".to_string(),
            IdlType::Object => "CORBA.Object".to_string(),
            IdlType::Sequence(_) => "list".to_string(),
            IdlType::Named(_) => ty.scoped_name().unwrap_or_default().join("."),
        }
    }

    fn param_type(&self, param: &Parameter) -> String {
        self.base_type(&param.ty)
    }

    /// Python argument lists carry names only
    fn format_param(&self, param: &Parameter) -> String {
        param.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_mapping() {
        let python = PythonTranslator::new();
        let cases = [
            ("boolean", "bool"),
            ("wchar", "str"),
            ("string", "str"),
            ("octet", "int"),
            ("unsigned long", "int"),
            ("long long", "long"),
            ("double", "float"),
            ("any", "CORBA.Any"),
            ("Object", "CORBA.Object"),
            ("void", "None"),
            ("sequence<float>", "list"),
            ("CF::Properties", "CF.Properties"),
        ];
        for (idl, expected) in cases {
            let ty: IdlType = idl.parse().unwrap();
            assert_eq!(python.base_type(&ty), expected, "mapping of {idl}");
        }
    }

    #[test]
    fn test_format_param_is_name_only() {
        let param = Parameter::new(IdlType::Long, "x");
        assert_eq!(PythonTranslator.format_param(&param), "x");
        assert_eq!(PythonTranslator.param_type(&param), "int");
    }
}
