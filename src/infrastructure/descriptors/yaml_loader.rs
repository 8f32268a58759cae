//! YAML descriptor bundles: a software package plus the interfaces it references

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::model::{IdlLibrary, SoftwarePackage};

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Failed to read descriptor {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid descriptor: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parsed descriptor file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DescriptorBundle {
    pub softpkg: SoftwarePackage,
    #[serde(default)]
    pub interfaces: IdlLibrary,
}

impl DescriptorBundle {
    pub fn parse(content: &str) -> Result<Self, DescriptorError> {
        let bundle: Self = serde_yaml::from_str(content)?;
        debug!(
            component = %bundle.softpkg.name,
            interfaces = bundle.interfaces.len(),
            "Parsed descriptor"
        );
        Ok(bundle)
    }

    pub async fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| DescriptorError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse(&content)
    }
}
