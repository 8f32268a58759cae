//! Python port context entries

use serde_json::{Map, Value as JsonValue, json};

use crate::generation::utils::sanitize_python_identifier;
use crate::generation::{GenerationError, PortMapper, resolve_namespace_str};
use crate::model::Port;

#[derive(Debug, Clone, Copy, Default)]
pub struct PythonPortMapper;

impl PortMapper for PythonPortMapper {
    fn map_port(&self, port: &Port) -> Result<Map<String, JsonValue>, GenerationError> {
        let repid = port.repository_id()?;
        let namespace = resolve_namespace_str(&repid.namespace());

        let mut fragment = Map::new();
        fragment.insert("name".to_string(), json!(port.name));
        fragment.insert(
            "field".to_string(),
            json!(format!("port_{}", sanitize_python_identifier(&port.name))),
        );
        fragment.insert("repid".to_string(), json!(port.repid));
        fragment.insert("direction".to_string(), json!(port.direction.to_string()));
        fragment.insert("interface".to_string(), json!(repid.name()));
        fragment.insert("imports".to_string(), json!(namespace.imports));
        fragment.insert("namespace".to_string(), json!(namespace.namespace));
        Ok(fragment)
    }
}
