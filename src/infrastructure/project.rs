//! Project-level packaging files shared by every component

use serde_json::json;
use std::sync::Arc;

use crate::generation::{GenerationContext, ProjectGenerator, ProjectMapper, TemplateBinding};
use crate::infrastructure::templates::{CodegenLoader, TemplateStore};
use crate::model::SoftwarePackage;

/// Packaging metadata for the build script and RPM spec file
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentProjectMapper;

impl ProjectMapper for ComponentProjectMapper {
    fn map_project(&self, softpkg: &SoftwarePackage) -> GenerationContext {
        let mut context = GenerationContext::new();
        context.insert("name", json!(softpkg.name));
        context.insert("version", json!(softpkg.version));
        context.insert("description", json!(softpkg.description));
        context.insert("author", json!(softpkg.author));
        context.insert("license", json!(softpkg.license));
        context.insert("type", json!(softpkg.component_type.as_str()));
        context
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentProjectGenerator;

impl ComponentProjectGenerator {
    pub const ID: &'static str = "project/component";
}

impl ProjectGenerator for ComponentProjectGenerator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn loader(&self, store: Arc<dyn TemplateStore>) -> CodegenLoader {
        CodegenLoader::new(store, "project/component").with_prefix("common", "common")
    }

    fn project_mapper(&self) -> Box<dyn ProjectMapper> {
        Box::new(ComponentProjectMapper)
    }

    fn templates(&self, project: &GenerationContext) -> Vec<TemplateBinding> {
        let name = project.get_str("name").unwrap_or_default();
        vec![
            TemplateBinding::shell("build.sh"),
            TemplateBinding::specfile("component.spec", format!("{name}.spec")),
        ]
    }
}
