//! Business rules for the generation domain: superclass selection and
//! interface dependency derivation

use crate::generation::GenerationError;
use crate::model::{ComponentType, IdlError, IdlInterface, SoftwarePackage};

/// Packaging requirement for the BULKIO namespace
pub const BULKIO_DEPENDENCY: &str = "bulkio >= 1.0 bulkioInterfaces >= 1.9";

/// Packaging requirement for the REDHAWK namespace
pub const REDHAWK_DEPENDENCY: &str = "redhawkInterfaces >= 1.2.0";

/// Archive appended to every interface archive list
pub const COMMON_INTERFACE_JAR: &str = "bulkio.jar";

/// Fixed archetype to base class table
pub type SuperclassTable = &'static [(ComponentType, &'static str)];

/// Look up the base class for a component's archetype
pub fn resolve_superclass(
    table: SuperclassTable,
    softpkg: &SoftwarePackage,
) -> Result<&'static str, GenerationError> {
    table
        .iter()
        .find(|(component_type, _)| *component_type == softpkg.component_type)
        .map(|(_, name)| *name)
        .ok_or_else(|| GenerationError::UnsupportedComponentType {
            component: softpkg.name.clone(),
            component_type: softpkg.component_type,
        })
}

/// Namespaces the component depends on, in first-encountered order: the
/// supported interface, its bases, then each port's interface.
pub fn interface_namespaces(
    softpkg: &SoftwarePackage,
    interface: &IdlInterface,
) -> Result<Vec<String>, IdlError> {
    let mut candidates = vec![interface.namespace()];
    candidates.extend(interface.inherited().iter().map(|repid| repid.namespace()));
    for port in &softpkg.ports {
        candidates.push(port.repository_id()?.namespace());
    }

    let mut namespaces: Vec<String> = Vec::with_capacity(candidates.len());
    for namespace in candidates {
        if !namespaces.contains(&namespace) {
            namespaces.push(namespace);
        }
    }
    Ok(namespaces)
}

/// Versioned packaging requirement for each namespace.
///
/// Entries are emitted in namespace order and are not deduplicated.
pub fn interface_dependencies(namespaces: &[String]) -> Vec<String> {
    namespaces
        .iter()
        .map(|namespace| match namespace.as_str() {
            "BULKIO" => BULKIO_DEPENDENCY.to_string(),
            "REDHAWK" => REDHAWK_DEPENDENCY.to_string(),
            other => format!("{}Interfaces", other.to_lowercase()),
        })
        .collect()
}

/// Interface archive names, one per namespace, plus the common archive
pub fn interface_jars(namespaces: &[String]) -> Vec<String> {
    let mut jars: Vec<String> = namespaces
        .iter()
        .map(|namespace| format!("{}Interfaces.jar", namespace.to_lowercase()))
        .collect();
    jars.push(COMMON_INTERFACE_JAR.to_string());
    jars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IdlLibrary, InterfaceDefinition, Port};

    const TABLE: SuperclassTable = &[
        (ComponentType::Service, "Service"),
        (ComponentType::Device, "Device"),
    ];

    #[test]
    fn test_resolve_superclass() {
        let service = SoftwarePackage::new("Echo", ComponentType::Service, "IDL:Demo/Echo:1.0");
        assert_eq!(resolve_superclass(TABLE, &service).unwrap(), "Service");

        let resource = SoftwarePackage::new("Echo", ComponentType::Resource, "IDL:Demo/Echo:1.0");
        assert_eq!(
            resolve_superclass(TABLE, &resource),
            Err(GenerationError::UnsupportedComponentType {
                component: "Echo".to_string(),
                component_type: ComponentType::Resource,
            })
        );
    }

    #[test]
    fn test_bulkio_only_dependency() {
        assert_eq!(
            interface_dependencies(&["BULKIO".to_string()]),
            vec![BULKIO_DEPENDENCY.to_string()]
        );
    }

    #[test]
    fn test_unknown_namespace_dependency_falls_back() {
        assert_eq!(
            interface_dependencies(&["FOO".to_string(), "REDHAWK".to_string()]),
            vec!["fooInterfaces".to_string(), REDHAWK_DEPENDENCY.to_string()]
        );
    }

    #[test]
    fn test_interface_jars_always_append_common_archive() {
        assert_eq!(interface_jars(&[]), vec!["bulkio.jar".to_string()]);
        assert_eq!(
            interface_jars(&["BULKIO".to_string()]),
            vec!["bulkioInterfaces.jar".to_string(), "bulkio.jar".to_string()]
        );
    }

    #[test]
    fn test_interface_namespaces_first_encountered_order() {
        let mut service = InterfaceDefinition::new("IDL:Demo/Echo:1.0");
        service.inherits.push("IDL:CF/LifeCycle:1.0".to_string());
        let library = IdlLibrary::new()
            .with(service)
            .with(InterfaceDefinition::new("IDL:CF/LifeCycle:1.0"));
        let interface = IdlInterface::from_repid("IDL:Demo/Echo:1.0", &library).unwrap();

        let softpkg = SoftwarePackage::new("Echo", ComponentType::Service, "IDL:Demo/Echo:1.0")
            .with_port(Port::uses("out", "IDL:BULKIO/dataFloat:1.0"))
            .with_port(Port::provides("ctl", "IDL:Demo/Control:1.0"))
            .with_port(Port::uses("out2", "IDL:BULKIO/dataShort:1.0"));

        assert_eq!(
            interface_namespaces(&softpkg, &interface).unwrap(),
            vec!["Demo", "CF", "BULKIO"]
        );
    }

    #[test]
    fn test_interface_namespaces_propagates_malformed_port_repid() {
        let library = IdlLibrary::new().with(InterfaceDefinition::new("IDL:Demo/Echo:1.0"));
        let interface = IdlInterface::from_repid("IDL:Demo/Echo:1.0", &library).unwrap();
        let softpkg = SoftwarePackage::new("Echo", ComponentType::Service, "IDL:Demo/Echo:1.0")
            .with_port(Port::uses("out", "not-a-repid"));

        assert_eq!(
            interface_namespaces(&softpkg, &interface),
            Err(IdlError::MalformedRepositoryId("not-a-repid".to_string()))
        );
    }
}
