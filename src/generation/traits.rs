//! Port interfaces for the generation domain

use serde_json::{Map, Value as JsonValue, json};
use std::fmt;
use std::sync::Arc;

use crate::generation::{GenerationContext, GenerationError, Language, TemplateBinding};
use crate::infrastructure::ports::PortFactoryRegistry;
use crate::infrastructure::templates::{CodegenLoader, TemplateStore};
use crate::model::{ComponentType, IdlLibrary, IdlType, Parameter, Port, Property, SoftwarePackage};

/// Maps abstract IDL types to target-language type names
pub trait TypeTranslator: Send + Sync {
    /// Type name for a value of the given IDL type
    fn base_type(&self, ty: &IdlType) -> String;

    /// Type name for a parameter, honoring its passing direction
    fn param_type(&self, param: &Parameter) -> String;

    /// One entry of an operation's argument list
    fn format_param(&self, param: &Parameter) -> String {
        format!("{} {}", self.param_type(param), param.name)
    }
}

/// Produces the base generation context for a software package
pub trait ComponentMapper: Send + Sync {
    fn map_component(
        &self,
        softpkg: &SoftwarePackage,
        library: &IdlLibrary,
    ) -> Result<GenerationContext, GenerationError>;
}

/// Produces the context of a top-level (project) generator
pub trait ProjectMapper: Send + Sync {
    fn map_project(&self, softpkg: &SoftwarePackage) -> GenerationContext;
}

/// Maps component properties into context entries
pub trait PropertyMapper: Send + Sync {
    fn map_property(&self, property: &Property) -> JsonValue;

    fn map_properties(&self, properties: &[Property]) -> Vec<JsonValue> {
        properties.iter().map(|p| self.map_property(p)).collect()
    }
}

/// Maps a port into the language-specific part of its context entry
pub trait PortMapper: Send + Sync {
    fn map_port(&self, port: &Port) -> Result<Map<String, JsonValue>, GenerationError>;
}

/// Emits the context fragment for one port
pub trait PortGenerator: fmt::Debug + Send + Sync {
    fn fragment(&self, port: &Port) -> Map<String, JsonValue>;
}

/// A port bound to an implementation class shipped with the framework
pub trait BuiltinPort: fmt::Debug + Send + Sync {
    /// Fully-qualified implementation class
    fn implementation(&self) -> String;

    fn constructor_args(&self, _port: &Port) -> Vec<String> {
        Vec::new()
    }
}

impl<T: BuiltinPort> PortGenerator for T {
    fn fragment(&self, port: &Port) -> Map<String, JsonValue> {
        let mut fragment = Map::new();
        fragment.insert("class".to_string(), json!(self.implementation()));
        fragment.insert(
            "constructor_args".to_string(),
            json!(self.constructor_args(port)),
        );
        fragment.insert("builtin".to_string(), json!(true));
        fragment
    }
}

/// Capability-matching factory of port generators
pub trait PortFactory: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    fn matches(&self, port: &Port) -> bool;

    fn generator(&self, port: &Port) -> Box<dyn PortGenerator>;
}

/// Everything needed to generate one kind of component in one language
pub trait CodeGenerator: Send + Sync {
    /// Stable identifier, e.g. `java/service`
    fn id(&self) -> &'static str;

    fn language(&self) -> Language;

    /// Whether this generator is the default for the archetype
    fn supports(&self, component_type: ComponentType) -> bool;

    fn loader(&self, store: Arc<dyn TemplateStore>) -> CodegenLoader;

    fn component_mapper(&self) -> Box<dyn ComponentMapper>;

    fn property_mapper(&self) -> Box<dyn PropertyMapper>;

    fn port_mapper(&self) -> Box<dyn PortMapper>;

    fn port_factory(&self) -> PortFactoryRegistry;

    /// Fields the templates of this generator read
    fn required_fields(&self) -> &'static [&'static str];

    /// Ordered template bindings for a mapped component
    fn templates(&self, component: &GenerationContext) -> Vec<TemplateBinding>;
}

/// Generator for project-level packaging files
pub trait ProjectGenerator: Send + Sync {
    fn id(&self) -> &'static str;

    fn loader(&self, store: Arc<dyn TemplateStore>) -> CodegenLoader;

    fn project_mapper(&self) -> Box<dyn ProjectMapper>;

    fn templates(&self, project: &GenerationContext) -> Vec<TemplateBinding>;
}
