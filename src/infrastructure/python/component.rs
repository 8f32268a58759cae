//! Python pull-model component generation

use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use super::{PythonPortMapper, PythonPropertyMapper, PythonTranslator};
use crate::generation::mapping::{map_attributes, map_operations};
use crate::generation::rules::{SuperclassTable, resolve_superclass};
use crate::generation::{
    CodeGenerator, ComponentMapper, GenerationContext, GenerationError, Language, PortMapper,
    PropertyMapper, TemplateBinding, resolve_namespace,
};
use crate::infrastructure::ports::{MessageConsumerConfig, PortFactoryRegistry};
use crate::infrastructure::templates::{CodegenLoader, TemplateStore};
use crate::model::{ComponentType, IdlInterface, IdlLibrary, SoftwarePackage};

pub const COMPONENT_SUPERCLASSES: SuperclassTable = &[
    (ComponentType::Resource, "Resource"),
    (ComponentType::Device, "Device"),
    (ComponentType::LoadableDevice, "LoadableDevice"),
    (ComponentType::ExecutableDevice, "ExecutableDevice"),
];

const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "interface",
    "imports",
    "namespace",
    "baseclass",
    "userclass",
    "superclass",
    "operations",
    "attributes",
    "properties",
    "ports",
];

/// Maps resources and devices into the Python pull-component context
#[derive(Debug, Clone, Copy, Default)]
pub struct PullComponentMapper;

impl ComponentMapper for PullComponentMapper {
    fn map_component(
        &self,
        softpkg: &SoftwarePackage,
        library: &IdlLibrary,
    ) -> Result<GenerationContext, GenerationError> {
        let superclass = resolve_superclass(COMPONENT_SUPERCLASSES, softpkg)?;
        let interface = IdlInterface::from_repid(&softpkg.repid, library)?;
        let namespace = resolve_namespace(&interface);
        let translator = PythonTranslator::new();
        debug!(
            component = %softpkg.name,
            superclass,
            interface = interface.name(),
            "Mapping Python pull component"
        );

        let base_name = format!("{}_base", softpkg.name);
        let mut context = GenerationContext::new();
        context.insert("name", json!(softpkg.name));
        context.insert("version", json!(softpkg.version));
        context.insert("interface", json!(interface.name()));
        for (key, value) in namespace.to_fields() {
            context.insert(key, value);
        }
        context.insert(
            "baseclass",
            json!({ "name": base_name, "file": format!("{base_name}.py") }),
        );
        context.insert(
            "userclass",
            json!({ "name": softpkg.name, "file": format!("{}.py", softpkg.name) }),
        );
        context.insert("superclass", json!({ "name": superclass }));
        context.insert(
            "operations",
            json!(map_operations(&interface, &translator, &namespace)),
        );
        context.insert("attributes", json!(map_attributes(&interface, &translator)));
        Ok(context)
    }
}

/// Generator for Python resources and devices using the pull processing model
#[derive(Debug, Clone, Default)]
pub struct PythonPullComponentGenerator {
    message: MessageConsumerConfig,
}

impl PythonPullComponentGenerator {
    pub const ID: &'static str = "python/component/pull";

    pub fn new(message: MessageConsumerConfig) -> Self {
        Self { message }
    }
}

impl CodeGenerator for PythonPullComponentGenerator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn language(&self) -> Language {
        Language::Python
    }

    fn supports(&self, component_type: ComponentType) -> bool {
        COMPONENT_SUPERCLASSES
            .iter()
            .any(|(supported, _)| *supported == component_type)
    }

    fn loader(&self, store: Arc<dyn TemplateStore>) -> CodegenLoader {
        CodegenLoader::new(store, "python/component/pull")
            .with_prefix("common", "common")
            .with_prefix("base", "python/component/base")
    }

    fn component_mapper(&self) -> Box<dyn ComponentMapper> {
        Box::new(PullComponentMapper)
    }

    fn property_mapper(&self) -> Box<dyn PropertyMapper> {
        Box::new(PythonPropertyMapper)
    }

    fn port_mapper(&self) -> Box<dyn PortMapper> {
        Box::new(PythonPortMapper)
    }

    fn port_factory(&self) -> PortFactoryRegistry {
        PortFactoryRegistry::with_defaults(Language::Python, self.message)
    }

    fn required_fields(&self) -> &'static [&'static str] {
        REQUIRED_FIELDS
    }

    fn templates(&self, component: &GenerationContext) -> Vec<TemplateBinding> {
        let base_file = component.get_str("baseclass.file").unwrap_or_default();
        let user_file = component.get_str("userclass.file").unwrap_or_default();

        vec![
            TemplateBinding::source(Language::Python, "resource_base.py", base_file),
            TemplateBinding::source(Language::Python, "resource.py", user_file).executable(),
            TemplateBinding::autoconf("configure.ac"),
            TemplateBinding::automake("base/Makefile.am"),
            TemplateBinding::automake("base/Makefile.am.ide"),
            TemplateBinding::shell("common/reconf"),
        ]
    }
}
