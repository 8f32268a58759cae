//! Error handling for the componentgen library.
//!
//! This module defines the top-level error type `Error` that aggregates the
//! per-layer errors, along with a convenient `Result` type alias.
//!
//! # Examples
//!
//! ```
//! use componentgen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("missing descriptor"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

use crate::generation::GenerationError;
use crate::infrastructure::descriptors::DescriptorError;
use crate::infrastructure::output::OutputError;
use crate::infrastructure::rendering::RenderError;
use crate::infrastructure::templates::TemplateError;
use crate::model::IdlError;

/// Result type for componentgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for componentgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Idl(#[from] IdlError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Config(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Config(s)
    }
}
