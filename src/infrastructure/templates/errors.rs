//! Error types for the template infrastructure layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in template operations
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No layer of the loader provides the template
    #[error("Template '{name}' not found (searched: {})", searched.join(", "))]
    TemplateNotFound { name: String, searched: Vec<String> },

    /// No usable template root directory
    #[error("Template directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TemplateError {
    pub fn not_found<S: Into<String>>(name: S, searched: Vec<String>) -> Self {
        Self::TemplateNotFound {
            name: name.into(),
            searched,
        }
    }
}
