//! Interface member translation shared by component mappers

use serde_json::{Value as JsonValue, json};

use crate::generation::{NamespaceInfo, TypeTranslator};
use crate::model::{Attribute, IdlInterface, Operation};

/// Translate one operation into `{name, arglist, argnames, throws, returns}`.
///
/// Fault types keep their declared order and are qualified with the
/// namespace import prefix.
pub fn map_operation(
    operation: &Operation,
    translator: &dyn TypeTranslator,
    namespace: &NamespaceInfo,
) -> JsonValue {
    let arglist = operation
        .params
        .iter()
        .map(|p| translator.format_param(p))
        .collect::<Vec<_>>()
        .join(", ");
    let argnames: Vec<&str> = operation.params.iter().map(|p| p.name.as_str()).collect();
    let throws = operation
        .raises
        .iter()
        .map(|fault| format!("{}{}", namespace.imports, translator.base_type(fault)))
        .collect::<Vec<_>>()
        .join(", ");

    json!({
        "name": operation.name,
        "arglist": arglist,
        "argnames": argnames,
        "throws": throws,
        "returns": translator.base_type(&operation.returns),
    })
}

pub fn map_operations(
    interface: &IdlInterface,
    translator: &dyn TypeTranslator,
    namespace: &NamespaceInfo,
) -> Vec<JsonValue> {
    interface
        .operations()
        .iter()
        .map(|op| map_operation(op, translator, namespace))
        .collect()
}

pub fn map_attribute(attribute: &Attribute, translator: &dyn TypeTranslator) -> JsonValue {
    json!({
        "name": attribute.name,
        "readonly": attribute.readonly,
        "type": translator.base_type(&attribute.ty),
    })
}

pub fn map_attributes(interface: &IdlInterface, translator: &dyn TypeTranslator) -> Vec<JsonValue> {
    interface
        .attributes()
        .iter()
        .map(|attr| map_attribute(attr, translator))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::resolve_namespace_str;
    use crate::model::{IdlType, Parameter};

    /// Spells types the way IDL does
    struct IdlSpelling;

    impl TypeTranslator for IdlSpelling {
        fn base_type(&self, ty: &IdlType) -> String {
            match ty {
                IdlType::Long => "int".to_string(),
                other => other.to_string(),
            }
        }

        fn param_type(&self, param: &Parameter) -> String {
            self.base_type(&param.ty)
        }
    }

    #[test]
    fn test_map_operation_without_faults() {
        let op = Operation::new("configure")
            .param(Parameter::new(IdlType::Long, "x"))
            .param(Parameter::new(IdlType::String, "y"));

        let fragment = map_operation(&op, &IdlSpelling, &resolve_namespace_str("Demo"));
        assert_eq!(
            fragment,
            json!({
                "name": "configure",
                "arglist": "int x, string y",
                "argnames": ["x", "y"],
                "throws": "",
                "returns": "void",
            })
        );
    }

    #[test]
    fn test_map_operation_qualifies_faults_in_order() {
        let op = Operation::new("push")
            .raises(IdlType::Named("CosEventComm::Disconnected".to_string()))
            .raises(IdlType::Named("CosEventComm::AlreadyConnected".to_string()));

        let fragment = map_operation(
            &op,
            &IdlSpelling,
            &resolve_namespace_str("omg.org/CosEventComm"),
        );
        assert_eq!(
            fragment["throws"],
            "org.omg.CosEventComm::Disconnected, org.omg.CosEventComm::AlreadyConnected"
        );
        assert_eq!(fragment["argnames"], json!([]));
    }

    #[test]
    fn test_map_attribute() {
        let attr = Attribute {
            name: "label".to_string(),
            readonly: true,
            ty: IdlType::String,
        };
        assert_eq!(
            map_attribute(&attr, &IdlSpelling),
            json!({"name": "label", "readonly": true, "type": "string"})
        );
    }
}
