//! Ordered registry of port factories

use std::sync::Arc;
use tracing::debug;

use super::{BulkioPortFactory, MessageConsumerConfig, MessagePortFactory};
use crate::generation::{GenerationError, Language, PortFactory, PortGenerator};
use crate::model::Port;

/// Capability-matching registry; the first factory that matches a port owns it
#[derive(Clone, Default)]
pub struct PortFactoryRegistry {
    factories: Vec<Arc<dyn PortFactory>>,
}

impl PortFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, factory: Arc<dyn PortFactory>) {
        debug!(factory = factory.name(), "Registered port factory");
        self.factories.push(factory);
    }

    /// Factories for the framework's built-in port kinds
    pub fn with_defaults(language: Language, message: MessageConsumerConfig) -> Self {
        Self::new()
            .with(MessagePortFactory::new(language, message))
            .with(BulkioPortFactory)
    }

    pub fn with(mut self, factory: impl PortFactory + 'static) -> Self {
        self.register(Arc::new(factory));
        self
    }

    /// Names of the registered factories, in lookup order
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    /// Generator for a port of the named component
    pub fn resolve(
        &self,
        component: &str,
        port: &Port,
    ) -> Result<Box<dyn PortGenerator>, GenerationError> {
        self.factories
            .iter()
            .find(|factory| factory.matches(port))
            .map(|factory| factory.generator(port))
            .ok_or_else(|| GenerationError::UnsupportedPort {
                component: component.to_string(),
                port: port.name.clone(),
                repid: port.repid.clone(),
                direction: port.direction,
            })
    }

    /// Fails if any port is claimed by more than one factory
    pub fn check_exclusive(&self, ports: &[Port]) -> Result<(), GenerationError> {
        for port in ports {
            let factories: Vec<&'static str> = self
                .factories
                .iter()
                .filter(|factory| factory.matches(port))
                .map(|factory| factory.name())
                .collect();
            if factories.len() > 1 {
                return Err(GenerationError::AmbiguousPort {
                    port: port.name.clone(),
                    repid: port.repid.clone(),
                    factories,
                });
            }
        }
        Ok(())
    }
}
