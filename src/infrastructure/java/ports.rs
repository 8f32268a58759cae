//! Java port context entries

use serde_json::{Map, Value as JsonValue, json};

use crate::generation::utils::sanitize_java_identifier;
use crate::generation::{GenerationError, PortMapper, resolve_namespace_str};
use crate::model::Port;

/// Base fragment of a Java port: identity plus the qualified interface type
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaPortMapper;

impl PortMapper for JavaPortMapper {
    fn map_port(&self, port: &Port) -> Result<Map<String, JsonValue>, GenerationError> {
        let repid = port.repository_id()?;
        let namespace = resolve_namespace_str(&repid.namespace());
        let module = namespace.namespace.replace('/', ".");

        let mut fragment = Map::new();
        fragment.insert("name".to_string(), json!(port.name));
        fragment.insert("field".to_string(), json!(sanitize_java_identifier(&port.name)));
        fragment.insert("repid".to_string(), json!(port.repid));
        fragment.insert("direction".to_string(), json!(port.direction.to_string()));
        fragment.insert("interface".to_string(), json!(repid.name()));
        fragment.insert("imports".to_string(), json!(namespace.imports));
        fragment.insert("namespace".to_string(), json!(namespace.namespace));
        fragment.insert(
            "type".to_string(),
            json!(format!("{}{}.{}", namespace.imports, module, repid.name())),
        );
        Ok(fragment)
    }
}
