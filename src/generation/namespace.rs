//! Namespace resolution shared by fault-type translation and module reporting

use serde_json::{Value as JsonValue, json};

use crate::model::IdlInterface;

/// Module root used by OMG-standardized interfaces
pub const OMG_NAMESPACE_ROOT: &str = "omg.org";

/// Import prefix of the language bindings for OMG-standardized interfaces
pub const OMG_IMPORT_PREFIX: &str = "org.omg.";

/// Import prefix and namespace name for an interface's module path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub imports: String,
    pub namespace: String,
}

impl NamespaceInfo {
    /// `imports` and `namespace` context fields
    pub fn to_fields(&self) -> [(&'static str, JsonValue); 2] {
        [
            ("imports", json!(self.imports)),
            ("namespace", json!(self.namespace)),
        ]
    }
}

/// Resolve the namespace of an interface
pub fn resolve_namespace(interface: &IdlInterface) -> NamespaceInfo {
    resolve_namespace_str(&interface.namespace())
}

/// Resolve a slash-separated module path.
///
/// Paths under the OMG root drop their first segment and gain the OMG import
/// prefix; anything else passes through with no prefix. A bare OMG root with
/// no module below it is not stripped.
pub fn resolve_namespace_str(namespace: &str) -> NamespaceInfo {
    let omg_module = namespace
        .starts_with(OMG_NAMESPACE_ROOT)
        .then(|| namespace.split('/').nth(1))
        .flatten()
        .filter(|module| !module.is_empty());

    match omg_module {
        Some(module) => NamespaceInfo {
            imports: OMG_IMPORT_PREFIX.to_string(),
            namespace: module.to_string(),
        },
        None => NamespaceInfo {
            imports: String::new(),
            namespace: namespace.to_string(),
        },
    }
}
