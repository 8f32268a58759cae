//! Registry of available code generators

use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::config::GeneratorConfig;
use crate::generation::{CodeGenerator, GenerationError, Language};
use crate::infrastructure::java::JavaServiceGenerator;
use crate::infrastructure::python::PythonPullComponentGenerator;
use crate::model::ComponentType;

/// Code generators in registration order
pub struct GeneratorRegistry {
    generators: Vec<Arc<dyn CodeGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Registry holding every built-in generator
    pub fn with_defaults(config: &GeneratorConfig) -> Self {
        let message = config.message_consumer();
        let mut registry = Self::new();
        registry.register(Arc::new(JavaServiceGenerator::new(
            config.java_package.clone(),
            message,
        )));
        registry.register(Arc::new(PythonPullComponentGenerator::new(message)));
        registry
    }

    pub fn register(&mut self, generator: Arc<dyn CodeGenerator>) {
        if self.generators.iter().any(|g| g.id() == generator.id()) {
            warn!(generator = generator.id(), "Replacing registered generator");
            self.generators.retain(|g| g.id() != generator.id());
        }
        debug!(generator = generator.id(), "Registered generator");
        self.generators.push(generator);
    }

    /// Generator by identifier
    pub fn get(&self, id: &str) -> Result<Arc<dyn CodeGenerator>, GenerationError> {
        self.generators
            .iter()
            .find(|g| g.id() == id)
            .cloned()
            .ok_or_else(|| GenerationError::UnknownGenerator(id.to_string()))
    }

    /// Default generator for a language and archetype
    pub fn select(
        &self,
        language: Language,
        component_type: ComponentType,
    ) -> Result<Arc<dyn CodeGenerator>, GenerationError> {
        self.generators
            .iter()
            .find(|g| g.language() == language && g.supports(component_type))
            .cloned()
            .ok_or(GenerationError::NoGenerator {
                language,
                component_type,
            })
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.id()).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults(&GeneratorConfig::default())
    }
}
