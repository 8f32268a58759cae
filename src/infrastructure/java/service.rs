//! Java service generation: component mapping and template selection

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use super::{JavaPortMapper, JavaPropertyMapper, JavaTranslator};
use crate::generation::mapping::{map_attributes, map_operations};
use crate::generation::rules::{
    SuperclassTable, interface_dependencies, interface_jars, interface_namespaces,
    resolve_superclass,
};
use crate::generation::utils::{package_path, qualified_name};
use crate::generation::{
    CodeGenerator, ComponentMapper, GenerationContext, GenerationError, Language, PortMapper,
    PropertyMapper, TemplateBinding, resolve_namespace,
};
use crate::infrastructure::ports::{MessageConsumerConfig, PortFactoryRegistry};
use crate::infrastructure::templates::{CodegenLoader, TemplateStore};
use crate::model::{ComponentType, IdlInterface, IdlLibrary, SoftwarePackage};

/// Services are the only archetype generated in Java
pub const SERVICE_SUPERCLASSES: SuperclassTable = &[(ComponentType::Service, "Service")];

const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "interface",
    "operations",
    "attributes",
    "imports",
    "namespace",
    "package",
    "baseclass",
    "userclass",
    "mainclass",
    "jarfile",
    "superclass",
    "interfacedeps",
    "interfacejars",
    "properties",
    "ports",
];

/// Maps a service descriptor into the Java service context
#[derive(Debug, Clone, Default)]
pub struct ServiceMapper {
    package: Option<String>,
}

impl ServiceMapper {
    pub fn new(package: Option<String>) -> Self {
        Self { package }
    }

    /// Configured package, or the lowercased component name
    pub fn package_for(&self, softpkg: &SoftwarePackage) -> String {
        self.package
            .clone()
            .unwrap_or_else(|| softpkg.name.to_lowercase())
    }
}

impl ComponentMapper for ServiceMapper {
    fn map_component(
        &self,
        softpkg: &SoftwarePackage,
        library: &IdlLibrary,
    ) -> Result<GenerationContext, GenerationError> {
        let superclass = resolve_superclass(SERVICE_SUPERCLASSES, softpkg)?;
        let interface = IdlInterface::from_repid(&softpkg.repid, library)?;
        let namespace = resolve_namespace(&interface);
        let translator = JavaTranslator::new();

        let package = self.package_for(softpkg);
        let base_name = format!("{}_base", softpkg.name);
        let namespaces = interface_namespaces(softpkg, &interface)?;
        debug!(
            component = %softpkg.name,
            interface = interface.name(),
            namespaces = ?namespaces,
            "Mapping Java service"
        );

        let mut context = GenerationContext::new();
        context.insert("name", json!(softpkg.name));
        context.insert("version", json!(softpkg.version));
        context.insert("interface", json!(interface.name()));
        context.insert(
            "operations",
            json!(map_operations(&interface, &translator, &namespace)),
        );
        context.insert("attributes", json!(map_attributes(&interface, &translator)));
        for (key, value) in namespace.to_fields() {
            context.insert(key, value);
        }
        context.insert("package", json!(package));
        context.insert("pkgpath", json!(package_path(&package)));
        context.insert(
            "baseclass",
            json!({ "name": base_name, "file": format!("{base_name}.java") }),
        );
        context.insert(
            "userclass",
            json!({ "name": softpkg.name, "file": format!("{}.java", softpkg.name) }),
        );
        context.insert("mainclass", json!(qualified_name(&softpkg.name, &package)));
        context.insert("jarfile", json!(format!("{}.jar", softpkg.name)));
        context.insert("superclass", json!({ "name": superclass }));
        context.insert("interfacedeps", json!(interface_dependencies(&namespaces)));
        context.insert("interfacejars", json!(interface_jars(&namespaces)));
        Ok(context)
    }
}

/// Generator for Java services
#[derive(Debug, Clone, Default)]
pub struct JavaServiceGenerator {
    package: Option<String>,
    message: MessageConsumerConfig,
}

impl JavaServiceGenerator {
    pub const ID: &'static str = "java/service";

    pub fn new(package: Option<String>, message: MessageConsumerConfig) -> Self {
        Self { package, message }
    }
}

impl CodeGenerator for JavaServiceGenerator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn language(&self) -> Language {
        Language::Java
    }

    fn supports(&self, component_type: ComponentType) -> bool {
        component_type == ComponentType::Service
    }

    fn loader(&self, store: Arc<dyn TemplateStore>) -> CodegenLoader {
        CodegenLoader::new(store, "java/service").with_prefix("common", "common")
    }

    fn component_mapper(&self) -> Box<dyn ComponentMapper> {
        Box::new(ServiceMapper::new(self.package.clone()))
    }

    fn property_mapper(&self) -> Box<dyn PropertyMapper> {
        Box::new(JavaPropertyMapper)
    }

    fn port_mapper(&self) -> Box<dyn PortMapper> {
        Box::new(JavaPortMapper)
    }

    fn port_factory(&self) -> PortFactoryRegistry {
        PortFactoryRegistry::with_defaults(Language::Java, self.message)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        REQUIRED_FIELDS
    }

    fn templates(&self, component: &GenerationContext) -> Vec<TemplateBinding> {
        let pkgpath = component.get_str("pkgpath").unwrap_or_default();
        let source_path = |file: &str| {
            if pkgpath.is_empty() {
                format!("src/{file}")
            } else {
                format!("src/{pkgpath}/{file}")
            }
        };
        let base_file = component.get_str("baseclass.file").unwrap_or_default();
        let user_file = component.get_str("userclass.file").unwrap_or_default();

        vec![
            TemplateBinding::source(Language::Java, "service_base.java", source_path(base_file)),
            TemplateBinding::source(Language::Java, "service.java", source_path(user_file)),
            TemplateBinding::autoconf("configure.ac"),
            TemplateBinding::automake("Makefile.am"),
            TemplateBinding::shell("common/reconf"),
            TemplateBinding::shell("startJava.sh"),
        ]
    }
}
