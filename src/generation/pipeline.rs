//! Generation pipeline - coordinates mapping and template selection

use serde_json::{Value as JsonValue, json};
use std::sync::Arc;
use tracing::{debug, info};

use crate::generation::{
    CodeGenerator, GenerationContext, GenerationError, Language, ProjectGenerator,
    TemplateBinding,
};
use crate::infrastructure::GeneratorRegistry;
use crate::infrastructure::templates::{CodegenLoader, TemplateStore};
use crate::model::{IdlLibrary, SoftwarePackage};

/// What the rendering engine consumes: loader, frozen context and bindings
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    generator: String,
    loader: CodegenLoader,
    context: GenerationContext,
    templates: Vec<TemplateBinding>,
}

impl GenerationPlan {
    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn loader(&self) -> &CodegenLoader {
        &self.loader
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    pub fn templates(&self) -> &[TemplateBinding] {
        &self.templates
    }

    /// JSON summary for inspection
    pub fn summary(&self) -> JsonValue {
        json!({
            "generator": self.generator,
            "loader": self.loader.layout(),
            "templates": self.templates,
            "context": self.context,
        })
    }
}

/// Single-pass composition of mappers and template selection
pub struct GenerationPipeline {
    registry: Arc<GeneratorRegistry>,
    project: Arc<dyn ProjectGenerator>,
    store: Arc<dyn TemplateStore>,
}

impl GenerationPipeline {
    pub fn new(
        registry: Arc<GeneratorRegistry>,
        project: Arc<dyn ProjectGenerator>,
        store: Arc<dyn TemplateStore>,
    ) -> Self {
        Self {
            registry,
            project,
            store,
        }
    }

    /// Plan a component using the default generator for its language and archetype
    pub fn plan_component(
        &self,
        softpkg: &SoftwarePackage,
        language: Language,
        library: &IdlLibrary,
    ) -> Result<GenerationPlan, GenerationError> {
        let generator = self.registry.select(language, softpkg.component_type)?;
        self.plan(generator.as_ref(), softpkg, library)
    }

    /// Plan a component with an explicitly chosen generator
    pub fn plan_with(
        &self,
        generator_id: &str,
        softpkg: &SoftwarePackage,
        library: &IdlLibrary,
    ) -> Result<GenerationPlan, GenerationError> {
        let generator = self.registry.get(generator_id)?;
        self.plan(generator.as_ref(), softpkg, library)
    }

    /// Plan the project-level packaging files
    pub fn plan_project(&self, softpkg: &SoftwarePackage) -> GenerationPlan {
        let context = self.project.project_mapper().map_project(softpkg);
        let templates = self.project.templates(&context);
        info!(
            component = %softpkg.name,
            generator = self.project.id(),
            templates = templates.len(),
            "Planned project generation"
        );

        GenerationPlan {
            generator: self.project.id().to_string(),
            loader: self.project.loader(Arc::clone(&self.store)),
            context,
            templates,
        }
    }

    fn plan(
        &self,
        generator: &dyn CodeGenerator,
        softpkg: &SoftwarePackage,
        library: &IdlLibrary,
    ) -> Result<GenerationPlan, GenerationError> {
        info!(
            component = %softpkg.name,
            component_type = %softpkg.component_type,
            generator = generator.id(),
            "Selected generator"
        );

        let context = build_context(generator, softpkg, library)?;
        let templates = generator.templates(&context);
        debug!(
            component = %softpkg.name,
            templates = templates.len(),
            "Template bindings resolved"
        );

        Ok(GenerationPlan {
            generator: generator.id().to_string(),
            loader: generator.loader(Arc::clone(&self.store)),
            context,
            templates,
        })
    }
}

/// Build and validate the full context: base fields, then properties, then ports
pub fn build_context(
    generator: &dyn CodeGenerator,
    softpkg: &SoftwarePackage,
    library: &IdlLibrary,
) -> Result<GenerationContext, GenerationError> {
    let mut context = generator
        .component_mapper()
        .map_component(softpkg, library)?;

    let properties = generator
        .property_mapper()
        .map_properties(&softpkg.properties);
    context.insert("properties", JsonValue::Array(properties));

    let factory = generator.port_factory();
    factory.check_exclusive(&softpkg.ports)?;
    let port_mapper = generator.port_mapper();
    let mut ports = Vec::with_capacity(softpkg.ports.len());
    for port in &softpkg.ports {
        let mut fragment = port_mapper.map_port(port)?;
        let port_generator = factory.resolve(&softpkg.name, port)?;
        debug!(port = %port.name, generator = ?port_generator, "Resolved port generator");
        fragment.extend(port_generator.fragment(port));
        ports.push(JsonValue::Object(fragment));
    }
    context.insert("ports", JsonValue::Array(ports));

    context.validate(&softpkg.name, generator.required_fields())?;
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ComponentProjectGenerator;
    use crate::infrastructure::templates::InMemoryTemplateStore;
    use crate::model::{ComponentType, InterfaceDefinition, Port, Property, SimpleType};
    use tracing_test::traced_test;

    fn pipeline() -> GenerationPipeline {
        GenerationPipeline::new(
            Arc::new(GeneratorRegistry::default()),
            Arc::new(ComponentProjectGenerator),
            Arc::new(InMemoryTemplateStore::new()),
        )
    }

    fn library() -> IdlLibrary {
        IdlLibrary::new()
            .with(InterfaceDefinition::new("IDL:CF/Resource:1.0"))
            .with(InterfaceDefinition::new("IDL:CF/Service:1.0"))
    }

    fn resource() -> SoftwarePackage {
        SoftwarePackage::new("Gain", ComponentType::Resource, "IDL:CF/Resource:1.0")
            .with_port(Port::provides("dataFloat_in", "IDL:BULKIO/dataFloat:1.0"))
            .with_port(Port::provides("message_in", "IDL:ExtendedEvent/MessageEvent:1.0"))
            .with_property(Property::new("gain", SimpleType::Float).with_value("1.0"))
    }

    #[test]
    fn test_plan_component_builds_full_context() {
        let plan = pipeline()
            .plan_component(&resource(), Language::Python, &library())
            .unwrap();

        assert_eq!(plan.generator(), "python/component/pull");
        assert_eq!(plan.templates().len(), 6);
        assert_eq!(plan.loader().package(), "python/component/pull");

        let keys: Vec<&str> = plan.context().keys().collect();
        assert_eq!(keys.last(), Some(&"ports"));
        assert_eq!(keys[keys.len() - 2], "properties");

        let ports = plan.context().get("ports").unwrap();
        assert_eq!(ports[0]["class"], "bulkio.InFloatPort");
        assert_eq!(ports[0]["field"], "port_data_float_in");
        assert_eq!(ports[1]["class"], "ossie.events.MessageConsumerPort");
        assert_eq!(ports[1]["constructor_args"][0], "thread_sleep=0.1");
        assert_eq!(ports[1]["builtin"], true);
    }

    #[test]
    fn test_unsupported_port_aborts_component() {
        let softpkg = resource().with_port(Port::uses("out", "IDL:Vendor/Custom:1.0"));
        let err = pipeline()
            .plan_component(&softpkg, Language::Python, &library())
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::UnsupportedPort { ref port, ref component, .. }
                if port == "out" && component == "Gain"
        ));
    }

    #[test]
    fn test_no_generator_for_archetype() {
        let err = pipeline()
            .plan_component(&resource(), Language::Java, &library())
            .unwrap_err();
        assert!(matches!(err, GenerationError::NoGenerator { .. }));
    }

    #[test]
    fn test_plan_with_explicit_generator() {
        let softpkg =
            SoftwarePackage::new("Logger", ComponentType::Service, "IDL:CF/Service:1.0");
        let plan = pipeline()
            .plan_with("java/service", &softpkg, &library())
            .unwrap();
        assert_eq!(plan.generator(), "java/service");
        assert_eq!(plan.context().get_str("package"), Some("logger"));

        let err = pipeline()
            .plan_with("python/component/push", &softpkg, &library())
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::UnknownGenerator("python/component/push".to_string())
        );
    }

    #[test]
    fn test_unknown_interface_propagates() {
        let softpkg = SoftwarePackage::new("Gain", ComponentType::Resource, "IDL:CF/Missing:1.0");
        let err = pipeline()
            .plan_component(&softpkg, Language::Python, &IdlLibrary::new())
            .unwrap_err();
        assert!(matches!(err, GenerationError::Idl(_)));
    }

    #[test]
    fn test_plan_project_summary() {
        let plan = pipeline().plan_project(&resource());
        let summary = plan.summary();
        assert_eq!(summary["generator"], "project/component");
        assert_eq!(summary["templates"][1]["filename"], "Gain.spec");
        assert_eq!(summary["templates"][0]["kind"]["kind"], "shell");
        assert_eq!(summary["context"]["name"], "Gain");
    }

    #[test]
    #[traced_test]
    fn test_selection_is_logged() {
        pipeline()
            .plan_component(&resource(), Language::Python, &library())
            .unwrap();
        assert!(logs_contain("Selected generator"));
        assert!(logs_contain("python/component/pull"));
    }
}
