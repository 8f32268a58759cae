//! Error types for the generation domain

use crate::generation::Language;
use crate::model::{ComponentType, IdlError, PortDirection};
use thiserror::Error;

/// Errors that abort generation of a single component
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// No superclass is defined for the archetype
    #[error("Unsupported software component type '{component_type}' for component '{component}'")]
    UnsupportedComponentType {
        component: String,
        component_type: ComponentType,
    },

    /// No registered port factory matches the port
    #[error("Unsupported port type '{repid}' ({direction}) on port '{port}' of component '{component}'")]
    UnsupportedPort {
        component: String,
        port: String,
        repid: String,
        direction: PortDirection,
    },

    /// More than one registered port factory matches the port
    #[error("Port '{port}' ({repid}) matches factories {factories:?}")]
    AmbiguousPort {
        port: String,
        repid: String,
        factories: Vec<&'static str>,
    },

    #[error("No generator for {component_type} components in {language}")]
    NoGenerator {
        language: Language,
        component_type: ComponentType,
    },

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Generation context for '{component}' is missing required field '{field}'")]
    MissingContextField { component: String, field: String },

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    #[error("Interface description error: {0}")]
    Idl(#[from] IdlError),
}
