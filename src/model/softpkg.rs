//! Software package descriptor model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{IdlError, RepositoryId};

/// Declared archetype of a software component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentType {
    Resource,
    Device,
    LoadableDevice,
    ExecutableDevice,
    Service,
    SharedLibrary,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Resource => "resource",
            ComponentType::Device => "device",
            ComponentType::LoadableDevice => "loadabledevice",
            ComponentType::ExecutableDevice => "executabledevice",
            ComponentType::Service => "service",
            ComponentType::SharedLibrary => "sharedlibrary",
        }
    }

    pub fn all() -> Vec<ComponentType> {
        vec![
            ComponentType::Resource,
            ComponentType::Device,
            ComponentType::LoadableDevice,
            ComponentType::ExecutableDevice,
            ComponentType::Service,
            ComponentType::SharedLibrary,
        ]
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = IdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "resource" | "component" => Ok(ComponentType::Resource),
            "device" => Ok(ComponentType::Device),
            "loadabledevice" => Ok(ComponentType::LoadableDevice),
            "executabledevice" => Ok(ComponentType::ExecutableDevice),
            "service" => Ok(ComponentType::Service),
            "sharedlibrary" => Ok(ComponentType::SharedLibrary),
            _ => Err(IdlError::UnknownComponentType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ComponentType {
    type Error = IdlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentType> for String {
    fn from(value: ComponentType) -> Self {
        value.as_str().to_string()
    }
}

/// Port direction relative to the component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Input port implemented by the component
    Provides,
    /// Output port the component calls out through
    Uses,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::Provides => write!(f, "provides"),
            PortDirection::Uses => write!(f, "uses"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub repid: String,
    pub direction: PortDirection,
}

impl Port {
    pub fn provides(name: impl Into<String>, repid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repid: repid.into(),
            direction: PortDirection::Provides,
        }
    }

    pub fn uses(name: impl Into<String>, repid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repid: repid.into(),
            direction: PortDirection::Uses,
        }
    }

    pub fn is_provides(&self) -> bool {
        self.direction == PortDirection::Provides
    }

    pub fn repository_id(&self) -> Result<RepositoryId, IdlError> {
        self.repid.parse()
    }
}

/// Simple property value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpleType {
    Boolean,
    Char,
    Double,
    Float,
    Short,
    UShort,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Octet,
    String,
    ObjRef,
}

impl SimpleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleType::Boolean => "boolean",
            SimpleType::Char => "char",
            SimpleType::Double => "double",
            SimpleType::Float => "float",
            SimpleType::Short => "short",
            SimpleType::UShort => "ushort",
            SimpleType::Long => "long",
            SimpleType::ULong => "ulong",
            SimpleType::LongLong => "longlong",
            SimpleType::ULongLong => "ulonglong",
            SimpleType::Octet => "octet",
            SimpleType::String => "string",
            SimpleType::ObjRef => "objref",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::ReadWrite => "readwrite",
            AccessMode::ReadOnly => "readonly",
            AccessMode::WriteOnly => "writeonly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: SimpleType,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub mode: AccessMode,
    #[serde(default)]
    pub kinds: Vec<String>,
}

impl Property {
    pub fn new(id: impl Into<String>, ty: SimpleType) -> Self {
        Self {
            id: id.into(),
            name: None,
            ty,
            value: None,
            mode: AccessMode::default(),
            kinds: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The name when present, otherwise the id
    pub fn identifier(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Software package descriptor: identity, archetype, interface and ports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwarePackage {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Repository id of the supported interface
    pub repid: String,
    #[serde(default)]
    pub ports: Vec<Port>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl SoftwarePackage {
    pub fn new(
        name: impl Into<String>,
        component_type: ComponentType,
        repid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            component_type,
            repid: repid.into(),
            ports: Vec::new(),
            properties: Vec::new(),
            version: default_version(),
            description: None,
            author: None,
            license: None,
        }
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn provides_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| p.is_provides())
    }

    pub fn uses_ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter().filter(|p| !p.is_provides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_from_str() {
        assert_eq!("service".parse::<ComponentType>().unwrap(), ComponentType::Service);
        assert_eq!(
            "Loadable_Device".parse::<ComponentType>().unwrap(),
            ComponentType::LoadableDevice
        );
        assert_eq!(
            "executable-device".parse::<ComponentType>().unwrap(),
            ComponentType::ExecutableDevice
        );
        assert_eq!("component".parse::<ComponentType>().unwrap(), ComponentType::Resource);
        assert!("waveform".parse::<ComponentType>().is_err());

        for ty in ComponentType::all() {
            assert_eq!(ty.as_str().parse::<ComponentType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_softpkg_from_yaml() {
        let yaml = r#"
name: Echo
type: service
repid: "IDL:Demo/Echo:1.0"
ports:
  - { name: message_in, repid: "IDL:ExtendedEvent/MessageEvent:1.0", direction: provides }
  - { name: data_out, repid: "IDL:BULKIO/dataFloat:1.0", direction: uses }
properties:
  - { id: gain, type: float, value: "1.5" }
"#;
        let softpkg: SoftwarePackage = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(softpkg.component_type, ComponentType::Service);
        assert_eq!(softpkg.version, "1.0.0");
        assert_eq!(softpkg.provides_ports().count(), 1);
        assert_eq!(softpkg.uses_ports().next().unwrap().name, "data_out");
        assert_eq!(softpkg.properties[0].identifier(), "gain");
        assert_eq!(softpkg.properties[0].mode, AccessMode::ReadWrite);
    }

    #[test]
    fn test_port_repository_id() {
        let port = Port::uses("out", "IDL:BULKIO/dataShort:1.0");
        assert_eq!(port.repository_id().unwrap().namespace(), "BULKIO");
        assert!(Port::uses("bad", "dataShort").repository_id().is_err());
    }
}
